use std::path::{Path, PathBuf};

use common::config::{ApiConfig, ShellConfig};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

impl AppConfig {
    /// Load defaults, then the config file, then `SLT_ADMIN__*` overrides.
    ///
    /// An explicit `path` must exist. Without one, `<config dir>/slt-admin/config.toml`
    /// and then `config/config.*` are read when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => builder = builder.add_source(File::from(path).required(true)),
            None => {
                if let Some(user) = user_config_file() {
                    builder = builder.add_source(File::from(user).required(false));
                }
                builder = builder.add_source(File::with_name("config/config").required(false));
            }
        }

        let s = builder
            // e.g. SLT_ADMIN__API__BASE_URL
            .add_source(
                Environment::with_prefix("SLT_ADMIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}

fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slt-admin").join("config.toml"))
}
