//! HTTP client for the upstream random-quote provider

use crate::{QuoteError, QuoteSource, Result, DEFAULT_MAX_BODY_BYTES, DEFAULT_UPSTREAM_URL};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Configuration for the upstream provider
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    /// Full URL of the random-quote endpoint
    pub url: String,
    /// Request timeout, unbounded when `None`
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
    /// Largest success body accepted from upstream
    pub max_body_bytes: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: None,
            user_agent: format!("folio-quote/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl UpstreamConfig {
    /// Create a config pointing at the given endpoint
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the body size cap
    pub fn with_max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }
}

/// A completed upstream exchange, whatever its status
#[derive(Clone, Debug)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Bytes,
}

impl UpstreamReply {
    /// Create a reply
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx check
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Quote source backed by a real HTTP endpoint
#[derive(Clone)]
pub struct HttpQuoteSource {
    client: Client,
    config: UpstreamConfig,
}

impl HttpQuoteSource {
    /// Create a new upstream client
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| QuoteError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    #[instrument(skip(self), fields(url = %self.config.url))]
    async fn fetch_random(&self) -> Result<UpstreamReply> {
        let mut response = self.client.get(&self.config.url).send().await.map_err(|e| {
            warn!("Upstream request failed: {}", e);
            QuoteError::from(e)
        })?;

        let status = response.status().as_u16();

        // The status alone decides a failed fetch; its body is never read
        if !response.status().is_success() {
            debug!(status, "Upstream responded with error status");
            return Ok(UpstreamReply::new(status, Bytes::new()));
        }

        let limit = self.config.max_body_bytes;
        if response.content_length().is_some_and(|len| len > limit as u64) {
            return Err(QuoteError::BodyTooLarge { limit });
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > limit {
                return Err(QuoteError::BodyTooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }
        debug!(status, bytes = body.len(), "Upstream responded");

        Ok(UpstreamReply::new(status, body.freeze()))
    }
}
