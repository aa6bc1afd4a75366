//! Error types for remote API calls

use thiserror::Error;

/// Result type for remote API operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors that can occur talking to the remote library API
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    /// Base URL could not be used to build a client
    #[error("Invalid remote configuration: {0}")]
    InvalidConfig(String),
}

impl RemoteError {
    /// Returns true if the error is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, RemoteError::Status { status, .. } if status.is_client_error())
    }

    /// Returns true if the error is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, RemoteError::Status { status, .. } if status.is_server_error())
    }
}
