//! HTTP client for the remote library API
//!
//! Speaks the five-endpoint JSON protocol of the book server. Any transport
//! failure or non-success status is reported as "remote unavailable"; the
//! controller never needs to distinguish a 404 from a connection refuse.

mod client;
mod config;
pub mod error;

pub use client::ApiClient;
pub use config::{RemoteConfig, API_URL_ENV, DEFAULT_BASE_URL};
pub use error::{RemoteError, RemoteResult};
