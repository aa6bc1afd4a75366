//! Recommendation result types

use serde::{Deserialize, Serialize};

/// A suggested title the user does not own yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedBook {
    pub title: String,
    pub author: String,
}

/// Outcome of a recommendation query.
///
/// Produced fresh per request; carries no identity. `book` is `None` when the
/// library is empty or every candidate for the dominant genre is already
/// owned, with `message` explaining which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<SuggestedBook>,
}

impl Recommendation {
    /// Creates a recommendation with a suggested book
    pub fn with_book(message: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            book: Some(SuggestedBook {
                title: title.into(),
                author: author.into(),
            }),
        }
    }

    /// Creates a message-only recommendation
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            book: None,
        }
    }
}
