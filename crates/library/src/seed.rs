//! Default collection used to seed an empty store

use smartshelf_core::{Book, BookDraft, BookId, BookStatus};

fn seed(
    id: i64,
    title: &str,
    author: &str,
    genre: &str,
    year: i32,
    rating: u8,
    status: BookStatus,
) -> Book {
    BookDraft::new(title, author, genre, year, status)
        .with_rating(rating)
        .into_book(BookId::new(id))
}

/// The five sample books a fresh (or corrupted) store is seeded with
pub fn default_collection() -> Vec<Book> {
    vec![
        seed(
            1,
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Classic",
            1925,
            5,
            BookStatus::Read,
        ),
        seed(2, "Dune", "Frank Herbert", "Sci-Fi", 1965, 5, BookStatus::Reading),
        seed(
            3,
            "Project Hail Mary",
            "Andy Weir",
            "Sci-Fi",
            2021,
            4,
            BookStatus::Read,
        ),
        seed(
            4,
            "Atomic Habits",
            "James Clear",
            "Self-Help",
            2018,
            0,
            BookStatus::Unread,
        ),
        seed(5, "1984", "George Orwell", "Dystopian", 1949, 5, BookStatus::Read),
    ]
}
