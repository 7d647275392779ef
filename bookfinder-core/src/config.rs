//! Client configuration

use crate::error::ConfigError;
use std::time::Duration;

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "BOOKFINDER_API_URL";

/// Environment variable overriding the cover image host
pub const ENV_COVERS_URL: &str = "BOOKFINDER_COVERS_URL";

/// Environment variable overriding the request timeout, in whole seconds
pub const ENV_TIMEOUT_SECS: &str = "BOOKFINDER_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "https://openlibrary.org";
const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for [`OpenLibraryClient`](crate::OpenLibraryClient)
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the search and works API, without trailing slash
    pub base_url: String,

    /// Base URL of the cover image host, without trailing slash
    pub covers_url: String,

    /// Upper bound for every request
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("bookfinder/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Build a configuration from defaults overridden by environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config = config.with_base_url(url);
        }
        if let Some(url) = lookup(ENV_COVERS_URL) {
            config = config.with_covers_url(url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = parse_timeout_secs(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS.to_string(),
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = trim_url(url.into());
        self
    }

    /// Set the cover image host
    pub fn with_covers_url(mut self, url: impl Into<String>) -> Self {
        self.covers_url = trim_url(url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn trim_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_timeout_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}
