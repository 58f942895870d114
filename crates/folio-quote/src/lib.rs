//! # Folio Quote
//!
//! Random quote fetching for the Folio site.
//!
//! This crate provides:
//! - **Quote model**: the normalized `{content, author}` value served to the site
//! - **Validation**: an explicit schema check over the upstream JSON payload
//! - **Quote sources**: the `QuoteSource` trait with an HTTP and an in-memory backend
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              fetch_quote                │
//! │   status check → decode → validate      │
//! ├─────────────────────────────────────────┤
//! │            QuoteSource Trait            │
//! ├────────────────────┬────────────────────┤
//! │   HttpQuoteSource  │ MemoryQuoteSource  │
//! ├────────────────────┴────────────────────┤
//! │     Upstream random-quote provider      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_quote::{fetch_quote, HttpQuoteSource, UpstreamConfig};
//!
//! let source = HttpQuoteSource::new(UpstreamConfig::default())?;
//! let quote = fetch_quote(&source).await?;
//! println!("{} ({})", quote.content, quote.author);
//! ```

pub mod error;
pub mod memory;
pub mod quote;
pub mod upstream;

pub use error::{QuoteError, Result};
pub use memory::MemoryQuoteSource;
pub use quote::{validate_payload, InvalidPayload, Quote, QuoteValidation};
pub use upstream::{HttpQuoteSource, UpstreamConfig, UpstreamReply};

use async_trait::async_trait;
use tracing::{debug, warn};

/// Default upstream endpoint
pub const DEFAULT_UPSTREAM_URL: &str = "https://zenquotes.io/api/random";

/// Default cap on an upstream success body (64 KiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Author used when upstream does not attribute the quote
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Trait for random-quote providers
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Make one outbound call and return the raw reply
    ///
    /// Returns `Err` only when the call did not complete. A non-success
    /// status is still an `Ok` reply.
    async fn fetch_random(&self) -> Result<UpstreamReply>;
}

/// Fetch one quote from `source` and normalize it
///
/// Makes exactly one call to the source, with no retry.
pub async fn fetch_quote(source: &dyn QuoteSource) -> Result<Quote> {
    let reply = source.fetch_random().await?;

    if !reply.is_success() {
        warn!(status = reply.status, "Quote fetch failed");
        return Err(QuoteError::UpstreamStatus(reply.status));
    }

    let payload: serde_json::Value = serde_json::from_slice(&reply.body)?;

    let quote = validate_payload(&payload)
        .into_result()
        .inspect_err(|e| warn!("Rejected upstream payload: {}", e))?;
    debug!(author = %quote.author, "Quote fetched");

    Ok(quote)
}
