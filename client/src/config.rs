//! Store location.
//!
//! The base URL has no default. A missing value is reported per request as
//! [`StoreError::Configuration`](ideaboard_common::StoreError) rather than
//! failing at startup, so the feed can show the problem in its error banner.

use tracing::{info, warn};

/// Environment variable holding the store base URL.
pub const API_URL_VAR: &str = "IDEA_API_URL";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Option<String>,
}

impl ClientConfig {
    /// Blank values count as unset; trailing slashes are dropped.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Self { base_url }
    }

    /// Read `IDEA_API_URL` from the process environment.
    pub fn from_env() -> Self {
        let config = Self::new(std::env::var(API_URL_VAR).ok());
        config.log_source("runtime environment");
        config
    }

    /// Read `IDEA_API_URL` baked in at compile time (browser builds).
    pub fn from_build_env() -> Self {
        let config = Self::new(option_env!("IDEA_API_URL").map(String::from));
        config.log_source("build environment");
        config
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn log_source(&self, source: &str) {
        match &self.base_url {
            Some(url) => info!("Idea store at {url} (from {source})"),
            None => warn!("{API_URL_VAR} not set in {source}; store calls will fail"),
        }
    }
}
