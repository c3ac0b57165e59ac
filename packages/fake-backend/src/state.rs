use std::collections::VecDeque;
use std::sync::Arc;

use common::{Banner, Blog, RecordId, Service};
use tokio::sync::Mutex;

/// A request as seen by the fake backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
}

impl RecordedRequest {
    pub fn is_multipart(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    }
}

#[derive(Debug)]
pub(crate) struct Rejection {
    pub status: u16,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct Store {
    next_id: i64,
    pub banners: Vec<Banner>,
    pub services: Vec<Service>,
    pub blogs: Vec<Blog>,
    pub requests: Vec<RecordedRequest>,
    pub rejections: VecDeque<Rejection>,
    /// Reply to successful writes with `{"message": ...}` instead of the record.
    pub acknowledgement: Option<String>,
}

impl Store {
    pub fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::from(self.next_id)
    }
}

/// Shared in-memory state behind the fake API.
#[derive(Clone, Default)]
pub struct BackendState {
    pub(crate) inner: Arc<Mutex<Store>>,
}

impl BackendState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_banner(&self, image_url: &str, is_active: bool) -> Banner {
        let mut store = self.inner.lock().await;
        let banner = Banner {
            id: store.next_id(),
            image_url: image_url.to_string(),
            is_active,
        };
        store.banners.push(banner.clone());
        banner
    }

    pub async fn seed_service(&self, title: &str, description: &str, points: &[&str]) -> Service {
        let mut store = self.inner.lock().await;
        let service = Service {
            id: store.next_id(),
            title: title.to_string(),
            description: description.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
            image_url: None,
        };
        store.services.push(service.clone());
        service
    }

    pub async fn seed_blog(&self, title: &str, slug: &str, is_active: bool) -> Blog {
        let mut store = self.inner.lock().await;
        let blog = Blog {
            id: store.next_id(),
            title: title.to_string(),
            slug: slug.to_string(),
            description: format!("About {title}"),
            full_content: format!("# {title}"),
            image_url: Some(format!("https://cdn.example.test/blogs/{slug}.png")),
            is_active,
        };
        store.blogs.push(blog.clone());
        blog
    }

    pub async fn banners(&self) -> Vec<Banner> {
        self.inner.lock().await.banners.clone()
    }

    pub async fn services(&self) -> Vec<Service> {
        self.inner.lock().await.services.clone()
    }

    pub async fn blogs(&self) -> Vec<Blog> {
        self.inner.lock().await.blogs.clone()
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().await.requests.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.inner.lock().await.requests.len()
    }

    pub async fn clear_requests(&self) {
        self.inner.lock().await.requests.clear();
    }

    /// Fail the next request with `status`, optionally carrying an `error`
    /// message in a JSON body.
    pub async fn reject_next(&self, status: u16, error: Option<&str>) {
        self.inner.lock().await.rejections.push_back(Rejection {
            status,
            error: error.map(str::to_string),
        });
    }

    /// Answer successful creates and updates with a bare `{"message": ...}`
    /// body, the way some deployments do, while still storing the record.
    pub async fn acknowledge_writes(&self, message: &str) {
        self.inner.lock().await.acknowledgement = Some(message.to_string());
    }
}
