//! Error types for the folio-quote crate

use crate::quote::InvalidPayload;
use thiserror::Error;

/// Result type alias using `QuoteError`
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Errors that can occur while fetching a quote
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The outbound call did not complete (connection refused, DNS, TLS...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The outbound call exceeded the configured timeout
    #[error("upstream timed out")]
    Timeout,

    /// Upstream answered with a non-success status
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// Upstream success body exceeded the configured cap
    #[error("upstream body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// Upstream body was not valid JSON
    #[error("decode error: {0}")]
    Decode(String),

    /// Upstream JSON did not have the expected shape
    #[error("invalid payload: {0}")]
    InvalidPayload(InvalidPayload),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            QuoteError::Timeout
        } else {
            QuoteError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Decode(err.to_string())
    }
}
