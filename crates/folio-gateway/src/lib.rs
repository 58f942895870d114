//! # Folio Gateway
//!
//! Same-origin quote gateway for the Folio blog.
//!
//! The site asks `GET /api/quote` for its daily quote; the gateway calls the
//! upstream random-quote provider once, validates what comes back and answers
//! with either `{content, author}` or `{error}`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  Browser (same origin)              │
//! └─────────────────────────┬───────────────────────────┘
//!                           │  GET /api/quote
//! ┌─────────────────────────▼───────────────────────────┐
//! │                    Folio Gateway                    │
//! ├─────────────────────────────────────────────────────┤
//! │   Request ID │ Request Logging │ Trace │ CORS (opt) │
//! ├─────────────────────────────────────────────────────┤
//! │                    Quote Handler                    │
//! ├─────────────────────────────────────────────────────┤
//! │                     folio-quote                     │
//! │          (validation, HttpQuoteSource)              │
//! └─────────────────────────┬───────────────────────────┘
//!                           │  GET /api/random
//!                  upstream quote provider
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use server::{run_server, run_server_with_shutdown, shutdown_signal};
pub use state::AppState;
