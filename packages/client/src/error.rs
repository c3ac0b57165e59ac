use common::ResourceKind;
use thiserror::Error;

/// Errors from the resource client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// The body's `error` field, or a generic description.
        message: String,
    },

    /// A 2xx response whose body is not the expected JSON.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The attachment could not be turned into a multipart part.
    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    /// The resource does not expose the requested operation.
    #[error("{resource} do not support {operation}")]
    Unsupported {
        resource: ResourceKind,
        operation: &'static str,
    },
}

impl ClientError {
    /// HTTP status for server rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
