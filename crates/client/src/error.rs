//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the events API.
///
/// `Api` is a server-confirmed rejection; `Request` means the request never
/// completed. Callers treat the two differently, so they never collapse
/// into one variant.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status}: {error}: {message}")]
    Api {
        status: u16,
        error: String,
        message: String,
    },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("not logged in; run `eventy auth login` first")]
    NotAuthenticated,

    #[error("another request is still in flight")]
    InFlight,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether this is a server-confirmed rejection rather than a
    /// transport failure.
    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }
}
