//! Client configuration read from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use canvas::geometry::Size;
use canvas::layout::DEFAULT_CONTAINER;

/// Default card API root.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for talking to the card server.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:3000/api`. Stored without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
    /// Canvas size used for placement.
    pub container: Size,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            container: DEFAULT_CONTAINER,
        }
    }
}

impl ClientConfig {
    /// Read `POSTCARDS_API_URL` and `POSTCARDS_TIMEOUT_SECS`, falling back to
    /// defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_url = std::env::var("POSTCARDS_API_URL").unwrap_or(defaults.api_url);
        let timeout_secs = env_parse("POSTCARDS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        Self { api_url: normalize_base_url(&api_url), timeout: Duration::from_secs(timeout_secs), container: defaults.container }
    }

    /// Override the API root.
    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = normalize_base_url(api_url);
        self
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
