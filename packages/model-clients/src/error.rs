//! Error types for the model clients.

use thiserror::Error;

/// Result type for model client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Model client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error (empty API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the provider
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Parse(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
