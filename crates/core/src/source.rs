//! The backend abstraction both data sources implement

use crate::error::Result;
use crate::types::{Book, BookDraft, BookId, Recommendation};
use async_trait::async_trait;

/// A backend capable of serving the five library operations.
///
/// Two implementations exist: the remote HTTP API and the local persistent
/// store. The controller picks one per its connectivity mode and talks to it
/// through this trait only; the UI never sees which backend answered.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Returns the full collection, newest first
    async fn list(&self) -> Result<Vec<Book>>;

    /// Stores a new book and returns it with its assigned id
    async fn add(&self, draft: BookDraft) -> Result<Book>;

    /// Overwrites the book with the same id
    async fn update(&self, book: &Book) -> Result<()>;

    /// Removes the book with the given id
    async fn delete(&self, id: BookId) -> Result<()>;

    /// Computes a recommendation from the stored collection
    async fn recommend(&self) -> Result<Recommendation>;
}
