//! Domain types for the book collection

mod book;
mod recommendation;
mod stats;

pub use book::{Book, BookDraft, BookId, BookStatus};
pub use recommendation::{Recommendation, SuggestedBook};
pub use stats::LibraryStats;

/// The genre suggestion set offered by front ends.
///
/// Genres on a [`Book`] are free-form strings; this list only feeds pickers
/// and the recommendation catalog.
pub const GENRES: [&str; 10] = [
    "Fiction",
    "Non-Fiction",
    "Sci-Fi",
    "Fantasy",
    "Mystery",
    "Classic",
    "Biography",
    "Self-Help",
    "Dystopian",
    "History",
];
