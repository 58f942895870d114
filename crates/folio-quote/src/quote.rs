//! Quote model and upstream payload validation
//!
//! The upstream provider answers with a JSON array of `{q, a?}` objects.
//! Only the first element is used.

use crate::{QuoteError, Result, DEFAULT_AUTHOR};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A normalized quote, as served to the site
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text, never empty
    pub content: String,
    /// Attribution, `"Unknown"` when upstream omits it
    pub author: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }
}

/// Why an upstream payload was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPayload {
    #[error("payload is not an array")]
    NotAnArray,

    #[error("payload array is empty")]
    EmptyArray,

    #[error("first element has no quote text")]
    MissingContent,
}

/// Outcome of checking an upstream payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteValidation {
    Valid(Quote),
    Invalid(InvalidPayload),
}

impl QuoteValidation {
    /// Convert into a `Result`, mapping rejections to `QuoteError::InvalidPayload`
    pub fn into_result(self) -> Result<Quote> {
        match self {
            Self::Valid(quote) => Ok(quote),
            Self::Invalid(reason) => Err(QuoteError::InvalidPayload(reason)),
        }
    }
}

/// Validate a decoded upstream payload
///
/// `q` must be a non-empty string. `a` is used when it is a string (even an
/// empty one); anything else falls back to [`DEFAULT_AUTHOR`].
pub fn validate_payload(payload: &Value) -> QuoteValidation {
    let Some(items) = payload.as_array() else {
        return QuoteValidation::Invalid(InvalidPayload::NotAnArray);
    };

    let Some(first) = items.first() else {
        return QuoteValidation::Invalid(InvalidPayload::EmptyArray);
    };

    let content = match first.get("q").and_then(Value::as_str) {
        Some(q) if !q.is_empty() => q,
        _ => return QuoteValidation::Invalid(InvalidPayload::MissingContent),
    };

    let author = first
        .get("a")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_AUTHOR);

    QuoteValidation::Valid(Quote::new(content, author))
}
