//! Durable key-value storage for the book collection
//!
//! One JSON file per key under a data directory, written atomically so a
//! crash mid-write never leaves a corrupted file behind. Values travel in a
//! versioned envelope; content that fails to decode is treated as absent so
//! callers can reseed instead of crashing.

pub mod error;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::{PersistentStore, DATA_DIR_ENV, SCHEMA_VERSION};

/// Key under which the book collection is stored
pub const BOOKS_KEY: &str = "books";
