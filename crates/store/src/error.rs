//! Error types for the persistent store

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing the store.
///
/// Decode failures are absent on purpose: unparseable content is handled
/// inside [`crate::PersistentStore::get`] by treating the key as missing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read a stored value
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a stored value
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a value for storage
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create the data directory
    #[error("Failed to create data directory at {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data directory path could not be determined
    #[error("Could not determine data directory: {reason}")]
    PathResolution { reason: String },
}

impl StoreError {
    /// Returns the filesystem path involved, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            StoreError::Read { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::DirectoryCreation { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::PathResolution {
            reason: "no home directory".to_string(),
        };
        assert!(err.to_string().contains("no home directory"));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_error_path_accessor() {
        let err = StoreError::Write {
            path: PathBuf::from("/data/books.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(err.path(), Some(&PathBuf::from("/data/books.json")));
    }
}
