//! File-backed key-value store with atomic writes

use crate::error::{StoreError, StoreResult};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Current on-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Name of the environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "SMARTSHELF_DATA_DIR";

/// Versioned wrapper around every stored value
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    value: T,
}

/// Key-based durable storage under a single data directory.
///
/// Each key maps to `<root>/<key>.json`. Writes go through a temp file and an
/// atomic rename. Reads of missing or undecodable content return `None`; the
/// caller is expected to reseed, so corruption never propagates.
#[derive(Debug, Clone)]
pub struct PersistentStore {
    root: PathBuf,
}

impl PersistentStore {
    /// Opens a store rooted at the given directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| StoreError::DirectoryCreation {
                path: root.clone(),
                source: e,
            })?;
            log::info!("Created data directory: {}", root.display());
        }
        Ok(Self { root })
    }

    /// Opens the store at the platform data directory.
    ///
    /// `SMARTSHELF_DATA_DIR` overrides the location when set.
    pub fn open_default() -> StoreResult<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Self::open(dir);
        }
        let dirs = ProjectDirs::from("", "", "smartshelf").ok_or_else(|| {
            StoreError::PathResolution {
                reason: "no home directory available".to_string(),
            }
        })?;
        Self::open(dirs.data_dir())
    }

    /// Returns the root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key does not exist, and also when the
    /// stored content cannot be decoded or carries an unknown schema version.
    /// Both cases are logged; neither is an error for the caller.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|e| StoreError::Read {
            path: path.clone(),
            source: e,
        })?;

        let envelope: Envelope<T> = match serde_json::from_str(&contents) {
            Ok(envelope) => envelope,
            Err(e) => {
                log::warn!(
                    "Stored data at {} is unreadable ({}), treating as absent",
                    path.display(),
                    e
                );
                return Ok(None);
            }
        };

        if envelope.version > SCHEMA_VERSION {
            log::warn!(
                "Stored data at {} has schema version {} (current {}), treating as absent",
                path.display(),
                envelope.version,
                SCHEMA_VERSION
            );
            return Ok(None);
        }

        Ok(Some(envelope.value))
    }

    /// Writes `value` under `key` atomically
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let envelope = Envelope {
            version: SCHEMA_VERSION,
            value,
        };
        let json = serde_json::to_string_pretty(&envelope).map_err(|e| StoreError::Serialize {
            key: key.to_string(),
            source: e,
        })?;

        let path = self.path_for(key);
        self.write_atomic(&path, &json)?;

        log::debug!("Stored '{}' at {}", key, path.display());
        Ok(())
    }

    /// Removes the value stored under `key`, if present
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StoreError::Write {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Writes content to a temp file in the same directory and atomically
    /// renames it over the target
    fn write_atomic(&self, path: &Path, content: &str) -> StoreResult<()> {
        let mut temp_file = NamedTempFile::new_in(&self.root).map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| StoreError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        temp_file.flush().map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

        temp_file.persist(path).map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        Ok(())
    }
}
