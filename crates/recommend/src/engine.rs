//! Dominant-genre recommendation algorithm

use crate::catalog::candidates_for;
use smartshelf_core::{Book, Recommendation};

const EMPTY_LIBRARY_MESSAGE: &str =
    "Your library is empty. Add some books to get recommendations!";

/// Returns the genre with the highest occurrence count in `books`.
///
/// Ties go to whichever genre reached the maximal count first while scanning
/// the collection in its stored order. Since new books are prepended, the
/// winner among tied genres can change as the collection changes, but the
/// result is fully determined by the collection's current order.
pub fn dominant_genre(books: &[Book]) -> Option<&str> {
    // Ordered tally keyed by first appearance; collections are small enough
    // that a linear scan beats a map here anyway.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for book in books {
        match counts.iter_mut().find(|(genre, _)| *genre == book.genre) {
            Some((_, count)) => *count += 1,
            None => counts.push((book.genre.as_str(), 1)),
        }
    }

    // Strictly-greater comparison keeps the earliest genre on ties
    let mut best: Option<(&str, usize)> = None;
    for (genre, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((genre, count));
        }
    }
    best.map(|(genre, _)| genre)
}

/// Recommends an unowned title from the user's dominant genre.
///
/// Candidates whose title already appears in the collection are excluded by
/// case-insensitive comparison; the pick among the remainder is uniformly
/// random.
pub fn recommend(books: &[Book]) -> Recommendation {
    let Some(genre) = dominant_genre(books) else {
        return Recommendation::message_only(EMPTY_LIBRARY_MESSAGE);
    };

    let owned_titles: Vec<String> = books.iter().map(|b| b.title.to_lowercase()).collect();
    let unowned: Vec<_> = candidates_for(genre)
        .iter()
        .filter(|c| !owned_titles.contains(&c.title.to_lowercase()))
        .collect();

    log::debug!(
        "Dominant genre '{}', {} unowned candidate(s)",
        genre,
        unowned.len()
    );

    match fastrand::choice(&unowned) {
        Some(pick) => Recommendation::with_book(
            format!("Because you read a lot of {genre}, you might enjoy:"),
            pick.title,
            pick.author,
        ),
        None => Recommendation::message_only(format!(
            "You're a {genre} expert! We don't have new suggestions right now."
        )),
    }
}
