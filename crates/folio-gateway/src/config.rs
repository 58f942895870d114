//! Gateway configuration

use folio_quote::{UpstreamConfig, DEFAULT_UPSTREAM_URL};
use std::time::Duration;
use url::Url;

/// Gateway server configuration
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Upstream random-quote endpoint
    pub upstream_url: String,
    /// Upstream request timeout (seconds), unbounded when unset
    pub upstream_timeout_secs: Option<u64>,
    /// Enable CORS (the site normally calls the gateway same-origin)
    pub cors_enabled: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout_secs: None,
            cors_enabled: false,
        }
    }
}

impl GatewayConfig {
    /// Get the bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the upstream settings
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.upstream_url)
            .map_err(|e| format!("invalid upstream URL {:?}: {}", self.upstream_url, e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("unsupported upstream scheme: {}", url.scheme()));
        }

        if self.upstream_timeout_secs == Some(0) {
            return Err("upstream timeout must be at least one second".to_string());
        }

        Ok(())
    }

    /// Build the upstream client configuration
    pub fn upstream(&self) -> UpstreamConfig {
        let config = UpstreamConfig::new(&self.upstream_url);
        match self.upstream_timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}
