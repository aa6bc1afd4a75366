//! Data-access layer for the Smartshelf book collection
//!
//! [`Library`] is the single entry point the UI talks to. It owns the
//! canonical in-memory collection and routes every operation to either the
//! remote API or the local persistent store, depending on whether the remote
//! was reachable when the session started. The fallback is one-way: once a
//! session goes offline it stays offline until the process restarts.

mod controller;
mod local;
mod seed;

pub use controller::{Library, Mode};
pub use local::LocalLibrary;
pub use seed::default_collection;
