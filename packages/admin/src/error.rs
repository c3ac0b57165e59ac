use client::ClientError;
use common::{DraftError, ResourceKind};
use thiserror::Error;

/// Failure of a view operation, as surfaced to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdminError {
    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Network(String),

    /// The backend answered with a non-2xx status, or with a body that is not
    /// the expected record.
    #[error("{message}")]
    ServerRejected {
        status: Option<u16>,
        message: String,
    },

    /// The draft is incomplete. No request was sent.
    #[error("{0}")]
    Validation(String),
}

impl From<ClientError> for AdminError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(e) => Self::Network(e.to_string()),
            ClientError::RequestFailed { status, message } => Self::ServerRejected {
                status: Some(status),
                message,
            },
            ClientError::Decode(e) => Self::ServerRejected {
                status: None,
                message: format!("Unexpected response: {e}"),
            },
            err @ (ClientError::InvalidAttachment(_) | ClientError::Unsupported { .. }) => {
                Self::Validation(err.to_string())
            }
        }
    }
}

/// Misuse of the form, independent of the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("{resource} records cannot be edited")]
    NotEditable { resource: ResourceKind },
}
