//! Content-based book recommendation
//!
//! Derives the user's dominant genre from their collection and proposes a
//! curated title they do not own yet.

mod catalog;
mod engine;

pub use catalog::{candidates_for, Candidate};
pub use engine::{dominant_genre, recommend};
