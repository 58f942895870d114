//! Folio Gateway - same-origin quote proxy

use clap::Parser;
use folio_gateway::{run_server, GatewayConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "folio-gateway")]
#[command(about = "Same-origin quote gateway for the Folio site")]
#[command(version)]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "FOLIO_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "FOLIO_PORT")]
    port: u16,

    /// Upstream random-quote endpoint
    #[arg(
        long,
        default_value = folio_quote::DEFAULT_UPSTREAM_URL,
        env = "QUOTE_UPSTREAM_URL"
    )]
    upstream_url: String,

    /// Upstream request timeout in seconds (unbounded when unset)
    #[arg(long, env = "QUOTE_UPSTREAM_TIMEOUT_SECS")]
    upstream_timeout_secs: Option<u64>,

    /// Allow cross-origin GET requests
    #[arg(long, env = "FOLIO_CORS")]
    cors: bool,

    /// Enable debug logging
    #[arg(short, long, env = "FOLIO_DEBUG")]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "folio_gateway={level},folio_quote={level},tower_http={level}",
                    level = log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Folio Gateway on {}:{}", args.host, args.port);

    match args.upstream_timeout_secs {
        Some(secs) => tracing::info!("Upstream timeout: {}s", secs),
        None => tracing::debug!("Upstream timeout: none"),
    }

    if args.cors {
        tracing::warn!("CORS enabled - the quote endpoint is callable from any origin");
    }

    let config = GatewayConfig {
        host: args.host,
        port: args.port,
        upstream_url: args.upstream_url,
        upstream_timeout_secs: args.upstream_timeout_secs,
        cors_enabled: args.cors,
    };

    run_server(config).await
}
