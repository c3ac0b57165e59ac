//! In-memory implementation of the admin REST contract.
//!
//! Only used by integration tests: it speaks the same paths, field names and
//! `{ "error": ... }` rejection bodies as the production backend, keeps every
//! record in memory and records each request it sees.

pub mod error;
mod form;
mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub use state::{BackendState, RecordedRequest};

/// Build the fake API router.
pub fn router(state: BackendState) -> Router {
    Router::new()
        .route("/api/banners/all", get(handlers::list_banners))
        .route("/api/banners/add", post(handlers::add_banner))
        .route("/api/banners/update/{id}", put(handlers::update_banner))
        .route("/api/banners/delete/{id}", delete(handlers::delete_banner))
        .route("/api/services/all", get(handlers::list_services))
        .route("/api/services/add", post(handlers::add_service))
        .route("/api/services/delete/{id}", delete(handlers::delete_service))
        .route("/api/blogs", get(handlers::list_blogs))
        .route("/api/blogs/", get(handlers::list_blogs))
        .route("/api/blogs/create", post(handlers::create_blog))
        .route(
            "/api/blogs/{id}",
            put(handlers::update_blog)
                .patch(handlers::toggle_blog)
                .delete(handlers::delete_blog),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::record_request,
        ))
        .with_state(state)
}

/// Serve the router on an ephemeral local port and return its address.
pub async fn spawn(state: BackendState) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = router(state);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Fake backend stopped: {}", e);
        }
    });

    Ok(addr)
}
