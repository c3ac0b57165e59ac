use std::net::SocketAddr;

use client::ResourceClient;
use ::common::Record;
use ::common::config::ApiConfig;
use fake_backend::BackendState;

/// A running fake backend plus the config pointing at it.
pub struct TestApp {
    pub addr: SocketAddr,
    pub backend: BackendState,
    pub config: ApiConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let backend = BackendState::new();
        let addr = fake_backend::spawn(backend.clone())
            .await
            .expect("Failed to start fake backend");

        let config = ApiConfig {
            base_url: format!("http://{addr}/api"),
            ..Default::default()
        };

        Self {
            addr,
            backend,
            config,
        }
    }

    pub fn client<R: Record>(&self) -> ResourceClient<R> {
        ResourceClient::from_config(&self.config).expect("Failed to build client")
    }
}

pub fn png(name: &str) -> ::common::Attachment {
    ::common::Attachment::new(name, b"\x89PNG\r\n\x1a\nDATA".to_vec())
}
