//! Remote API client configuration

use std::time::Duration;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "SMARTSHELF_API_URL";

/// Base URL used when no override is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration for the remote API client
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("smartshelf/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RemoteConfig {
    /// Builds a configuration from the environment.
    ///
    /// `SMARTSHELF_API_URL` overrides the base URL; everything else keeps its
    /// default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Sets the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the full URL for an endpoint path
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
