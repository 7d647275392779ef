//! Error types for Bookfinder Core

use thiserror::Error;

/// Result type alias using BookFinderError
pub type Result<T> = std::result::Result<T, BookFinderError>;

/// Top-level error type for all Bookfinder operations
#[derive(Debug, Error)]
pub enum BookFinderError {
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// The remote catalog could not answer a request
///
/// Every variant means the same thing to the rest of the crate: the search
/// is unavailable. The split only exists for logging.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteError::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            RemoteError::Status(status.as_u16())
        } else if err.is_decode() {
            RemoteError::Malformed(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Malformed(err.to_string())
    }
}

/// Errors that occur while building a client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
