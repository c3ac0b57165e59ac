use axum::{
    Json,
    extract::{Path, Request, State},
    http::{Method, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use common::{Banner, Blog, Service};
use serde_json::json;

use crate::error::FakeError;
use crate::form::{FormInput, UploadedFile};
use crate::state::{BackendState, RecordedRequest};

/// Record every request, then fail it if a rejection has been queued.
pub(crate) async fn record_request(
    State(state): State<BackendState>,
    req: Request,
    next: Next,
) -> Response {
    let is_write = matches!(req.method(), &Method::POST | &Method::PUT);
    let (rejection, acknowledgement) = {
        let mut store = state.inner.lock().await;
        store.requests.push(RecordedRequest {
            method: req.method().to_string(),
            path: req.uri().path().to_string(),
            content_type: req
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
        (store.rejections.pop_front(), store.acknowledgement.clone())
    };

    if let Some(r) = rejection {
        return FakeError::Injected {
            status: r.status,
            error: r.error,
        }
        .into_response();
    }

    let response = next.run(req).await;
    match acknowledgement {
        Some(message) if is_write && response.status().is_success() => {
            (response.status(), Json(json!({ "message": message }))).into_response()
        }
        _ => response,
    }
}

fn stored_url(resource: &str, id: &common::RecordId, file: &UploadedFile) -> String {
    format!(
        "https://cdn.example.test/{resource}/{id}-{}",
        file.file_name
    )
}

fn not_found(what: &str) -> FakeError {
    FakeError::NotFound(format!("{what} not found"))
}

// ---- banners ----

pub(crate) async fn list_banners(State(state): State<BackendState>) -> Json<Vec<Banner>> {
    Json(state.banners().await)
}

pub(crate) async fn add_banner(
    State(state): State<BackendState>,
    input: FormInput,
) -> Result<impl IntoResponse, FakeError> {
    let file = input
        .file("image_url")
        .ok_or_else(|| FakeError::BadRequest("No image uploaded".into()))?;

    let mut store = state.inner.lock().await;
    let id = store.next_id();
    let banner = Banner {
        image_url: stored_url("banners", &id, file),
        id,
        is_active: true,
    };
    store.banners.push(banner.clone());
    Ok((StatusCode::CREATED, Json(banner)))
}

pub(crate) async fn update_banner(
    State(state): State<BackendState>,
    Path(id): Path<String>,
    input: FormInput,
) -> Result<Json<Banner>, FakeError> {
    let mut store = state.inner.lock().await;
    let banner = store
        .banners
        .iter_mut()
        .find(|b| b.id.as_str() == id)
        .ok_or_else(|| not_found("Banner"))?;

    if let Some(file) = input.file("image_url") {
        banner.image_url = stored_url("banners", &banner.id, file);
    } else if let Some(url) = input.text("image_url") {
        banner.image_url = url;
    }
    if let Some(active) = input.flag("is_active") {
        banner.is_active = active;
    }
    Ok(Json(banner.clone()))
}

pub(crate) async fn delete_banner(
    State(state): State<BackendState>,
    Path(id): Path<String>,
) -> Result<StatusCode, FakeError> {
    let mut store = state.inner.lock().await;
    let before = store.banners.len();
    store.banners.retain(|b| b.id.as_str() != id);
    if store.banners.len() == before {
        return Err(not_found("Banner"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---- services ----

pub(crate) async fn list_services(State(state): State<BackendState>) -> Json<Vec<Service>> {
    Json(state.services().await)
}

pub(crate) async fn add_service(
    State(state): State<BackendState>,
    input: FormInput,
) -> Result<impl IntoResponse, FakeError> {
    let title = input.text("title").unwrap_or_default();
    let description = input.text("description").unwrap_or_default();
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err(FakeError::BadRequest(
            "Title and description are required".into(),
        ));
    }

    let mut store = state.inner.lock().await;
    let id = store.next_id();
    let service = Service {
        image_url: input
            .file("image_file")
            .map(|file| stored_url("services", &id, file)),
        id,
        title,
        description,
        points: input.list("points").unwrap_or_default(),
    };
    store.services.push(service.clone());
    Ok((StatusCode::CREATED, Json(service)))
}

pub(crate) async fn delete_service(
    State(state): State<BackendState>,
    Path(id): Path<String>,
) -> Result<StatusCode, FakeError> {
    let mut store = state.inner.lock().await;
    let before = store.services.len();
    store.services.retain(|s| s.id.as_str() != id);
    if store.services.len() == before {
        return Err(not_found("Service"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---- blogs ----

pub(crate) async fn list_blogs(State(state): State<BackendState>) -> Json<Vec<Blog>> {
    Json(state.blogs().await)
}

pub(crate) async fn create_blog(
    State(state): State<BackendState>,
    input: FormInput,
) -> Result<impl IntoResponse, FakeError> {
    let file = input
        .file("image")
        .ok_or_else(|| FakeError::BadRequest("Cover image is required".into()))?;
    let title = input.text("title").unwrap_or_default();
    if title.trim().is_empty() {
        return Err(FakeError::BadRequest("Title is required".into()));
    }

    let mut store = state.inner.lock().await;
    let id = store.next_id();
    let blog = Blog {
        image_url: Some(stored_url("blogs", &id, file)),
        id,
        title,
        slug: input.text("slug").unwrap_or_default(),
        description: input.text("description").unwrap_or_default(),
        full_content: input.text("fullContent").unwrap_or_default(),
        is_active: true,
    };
    store.blogs.push(blog.clone());
    Ok((StatusCode::CREATED, Json(blog)))
}

pub(crate) async fn update_blog(
    State(state): State<BackendState>,
    Path(id): Path<String>,
    input: FormInput,
) -> Result<Json<Blog>, FakeError> {
    let mut store = state.inner.lock().await;
    let blog = store
        .blogs
        .iter_mut()
        .find(|b| b.id.as_str() == id)
        .ok_or_else(|| not_found("Blog"))?;

    if let Some(title) = input.text("title") {
        blog.title = title;
    }
    if let Some(slug) = input.text("slug") {
        blog.slug = slug;
    }
    if let Some(description) = input.text("description") {
        blog.description = description;
    }
    if let Some(content) = input.text("fullContent") {
        blog.full_content = content;
    }
    if let Some(file) = input.file("image") {
        blog.image_url = Some(stored_url("blogs", &blog.id, file));
    }
    Ok(Json(blog.clone()))
}

pub(crate) async fn toggle_blog(
    State(state): State<BackendState>,
    Path(id): Path<String>,
) -> Result<StatusCode, FakeError> {
    let mut store = state.inner.lock().await;
    let blog = store
        .blogs
        .iter_mut()
        .find(|b| b.id.as_str() == id)
        .ok_or_else(|| not_found("Blog"))?;
    blog.is_active = !blog.is_active;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn delete_blog(
    State(state): State<BackendState>,
    Path(id): Path<String>,
) -> Result<StatusCode, FakeError> {
    let mut store = state.inner.lock().await;
    let before = store.blogs.len();
    store.blogs.retain(|b| b.id.as_str() != id);
    if store.blogs.len() == before {
        return Err(not_found("Blog"));
    }
    Ok(StatusCode::NO_CONTENT)
}
