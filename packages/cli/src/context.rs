use std::sync::Arc;

use admin::{AdminView, Confirm, InMemoryObjectUrls};
use client::{ClientError, ResourceClient, build_http_client};
use common::Record;

use crate::config::AppConfig;

/// Shared state of one CLI invocation.
pub struct Context {
    pub config: AppConfig,
    http: reqwest::Client,
    urls: Arc<InMemoryObjectUrls>,
}

impl Context {
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        let http = build_http_client(&config.api)?;
        Ok(Self {
            config,
            http,
            urls: Arc::new(InMemoryObjectUrls::new()),
        })
    }

    pub fn client<R: Record>(&self) -> ResourceClient<R> {
        ResourceClient::with_client(
            self.http.clone(),
            self.config.api.resource_url(R::descriptor().kind),
        )
    }

    pub fn view<R: Record>(&self, confirm: Arc<dyn Confirm>) -> AdminView<R, ResourceClient<R>> {
        AdminView::new(self.client(), confirm, self.urls.clone())
    }
}
