//! Error types shared across the Smartshelf workspace
//!
//! Failures fall into three buckets:
//! - **Remote**: the network API was unreachable or answered with a
//!   non-success status. Transport failures, 4xx and 5xx are deliberately
//!   collapsed into one variant; the controller treats them identically.
//! - **Storage**: the persistent store could not be read or written at the
//!   filesystem level.
//! - **Serialize**: a collection could not be encoded for storage or the
//!   wire. Decode failures on *reads* are handled inside the store by
//!   reseeding and never reach callers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the workspace
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Errors surfaced by the library data layer
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Remote API unreachable or returned a non-success status
    #[error("remote library unavailable: {0}")]
    Remote(String),

    /// Persistent store I/O failure
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Collection could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Referenced book does not exist in the collection
    #[error("no book with id {0}")]
    BookNotFound(i64),
}

impl LibraryError {
    /// Returns true if the error came from the remote backend
    pub fn is_remote(&self) -> bool {
        matches!(self, LibraryError::Remote(_))
    }

    /// Returns true if the error came from local storage
    pub fn is_storage(&self) -> bool {
        matches!(self, LibraryError::Storage { .. })
    }
}
