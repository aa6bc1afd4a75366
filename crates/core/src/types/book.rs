//! Book domain model

use serde::{Deserialize, Serialize};

/// Unique identifier for a book.
///
/// Serializes as a plain JSON number to match the wire protocol. Online, the
/// server assigns ids from its autoincrement column; offline, ids are derived
/// from the current time in milliseconds. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Creates a BookId from a raw numeric id
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reading status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    Unread,
    Reading,
    Read,
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookStatus::Unread => "Unread",
            BookStatus::Reading => "Reading",
            BookStatus::Read => "Read",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unread" => Ok(BookStatus::Unread),
            "Reading" => Ok(BookStatus::Reading),
            "Read" => Ok(BookStatus::Read),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// A book in the user's collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
    /// Star rating, 0 to 5 inclusive
    pub rating: u8,
    pub status: BookStatus,
}

impl Book {
    /// Splits the book into its id and the identity-free draft
    pub fn into_draft(self) -> (BookId, BookDraft) {
        (
            self.id,
            BookDraft {
                title: self.title,
                author: self.author,
                genre: self.genre,
                year: self.year,
                rating: self.rating,
                status: self.status,
            },
        )
    }
}

/// A book that has not been assigned an id yet.
///
/// This is what `add` accepts and what goes on the wire for `POST /add`;
/// whichever backend creates the record supplies the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
    pub rating: u8,
    pub status: BookStatus,
}

impl BookDraft {
    /// Creates a draft with the given fields and a rating of zero
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        status: BookStatus,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
            rating: 0,
            status,
        }
    }

    /// Sets the rating
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Merges an assigned id into the draft, producing a complete book
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            year: self.year,
            rating: self.rating,
            status: self.status,
        }
    }
}
