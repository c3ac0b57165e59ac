use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Rejection returned by the fake API, rendered as `{ "error": message }`.
#[derive(Debug)]
pub enum FakeError {
    BadRequest(String),
    NotFound(String),
    /// Injected failure with an arbitrary status and optional message.
    Injected { status: u16, error: Option<String> },
}

impl IntoResponse for FakeError {
    fn into_response(self) -> Response {
        match self {
            FakeError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            FakeError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            FakeError::Injected { status, error } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                match error {
                    Some(msg) => (status, Json(json!({ "error": msg }))).into_response(),
                    None => (status, "upstream failure").into_response(),
                }
            }
        }
    }
}
