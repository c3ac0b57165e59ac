use serde::Deserialize;

use crate::resource::ResourceKind;

/// Remote API location. Default base URL is the production backend.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Root of the REST API. Default: "https://slttranportdatabse.onrender.com/api".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Banner resource path. Default: "/banners".
    #[serde(default = "default_banners_path")]
    pub banners_path: String,
    /// Service resource path. Default: "/services".
    #[serde(default = "default_services_path")]
    pub services_path: String,
    /// Blog resource path. Default: "/blogs".
    #[serde(default = "default_blogs_path")]
    pub blogs_path: String,
    /// Request timeout in seconds. Unset leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://slttranportdatabse.onrender.com/api".into()
}
fn default_banners_path() -> String {
    "/banners".into()
}
fn default_services_path() -> String {
    "/services".into()
}
fn default_blogs_path() -> String {
    "/blogs".into()
}

impl ApiConfig {
    /// Base URL for one resource, without a trailing slash.
    pub fn resource_url(&self, kind: ResourceKind) -> String {
        let path = match kind {
            ResourceKind::Banner => &self.banners_path,
            ResourceKind::Service => &self.services_path,
            ResourceKind::Blog => &self.blogs_path,
        };
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            banners_path: default_banners_path(),
            services_path: default_services_path(),
            blogs_path: default_blogs_path(),
            timeout_secs: None,
        }
    }
}

/// Navigation shell settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    /// Terminal width in columns below which the nav collapses. Default: 96.
    #[serde(default = "default_collapse_below")]
    pub collapse_below: u16,
}

fn default_collapse_below() -> u16 {
    96
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            collapse_below: default_collapse_below(),
        }
    }
}
