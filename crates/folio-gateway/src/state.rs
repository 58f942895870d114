//! Application state

use crate::config::GatewayConfig;
use folio_quote::{HttpQuoteSource, QuoteSource};
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// Gateway configuration
    pub config: GatewayConfig,
    /// Upstream quote provider
    pub quotes: Arc<dyn QuoteSource>,
}

impl AppState {
    /// Create application state backed by the configured HTTP upstream
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;

        let source = HttpQuoteSource::new(config.upstream())?;
        info!("Quote upstream: {}", config.upstream_url);

        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Create application state with an explicit quote source
    pub fn with_source(config: GatewayConfig, quotes: Arc<dyn QuoteSource>) -> Self {
        Self { config, quotes }
    }
}
