//! Shared domain types for the Smartshelf book library.
//!
//! Everything the remote and local backends have in common lives here: the
//! [`Book`] data model, the [`BookSource`] trait both backends implement, and
//! the [`LibraryError`] taxonomy the rest of the workspace reports through.

pub mod error;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use error::{LibraryError, Result};
pub use source::BookSource;
pub use types::{
    Book, BookDraft, BookId, BookStatus, LibraryStats, Recommendation, SuggestedBook, GENRES,
};
