//! Library statistics

use crate::types::{Book, BookStatus};
use serde::{Deserialize, Serialize};

/// Per-status counts over a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub reading: usize,
    pub unread: usize,
}

impl LibraryStats {
    /// Tallies statistics for the given collection
    pub fn for_books(books: &[Book]) -> Self {
        let mut stats = Self {
            total: books.len(),
            ..Self::default()
        };
        for book in books {
            match book.status {
                BookStatus::Read => stats.read += 1,
                BookStatus::Reading => stats.reading += 1,
                BookStatus::Unread => stats.unread += 1,
            }
        }
        stats
    }

    /// Returns the percentage of finished books
    pub fn read_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.read as f64 / self.total as f64) * 100.0
    }
}
