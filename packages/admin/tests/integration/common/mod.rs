use std::sync::Arc;

use ::common::config::ApiConfig;
use ::common::{Attachment, Record};
use admin::{AdminView, InMemoryObjectUrls, ScriptedConfirm};
use client::ResourceClient;
use fake_backend::BackendState;

/// A fake backend plus the capabilities handed to each view.
pub struct TestApp {
    pub backend: BackendState,
    pub config: ApiConfig,
    pub confirm: Arc<ScriptedConfirm>,
    pub urls: Arc<InMemoryObjectUrls>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::with_answers(Vec::<bool>::new()).await
    }

    /// Spawn with scripted answers for delete confirmations.
    pub async fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        let backend = BackendState::new();
        let addr = fake_backend::spawn(backend.clone())
            .await
            .expect("Failed to start fake backend");

        Self {
            backend,
            config: ApiConfig {
                base_url: format!("http://{addr}/api"),
                ..Default::default()
            },
            confirm: Arc::new(ScriptedConfirm::new(answers)),
            urls: Arc::new(InMemoryObjectUrls::new()),
        }
    }

    pub fn view<R: Record>(&self) -> AdminView<R, ResourceClient<R>> {
        let api = ResourceClient::from_config(&self.config).expect("Failed to build client");
        AdminView::new(api, self.confirm.clone(), self.urls.clone())
    }

    /// A mounted view.
    pub async fn mounted<R: Record>(&self) -> AdminView<R, ResourceClient<R>> {
        let mut view = self.view::<R>();
        view.mount().await;
        view
    }
}

pub fn png(name: &str) -> Attachment {
    Attachment::new(name, b"\x89PNG\r\n\x1a\nDATA".to_vec())
}
