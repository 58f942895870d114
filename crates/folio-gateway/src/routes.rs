//! HTTP route definitions

use crate::{handlers, middleware, AppState};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    middleware as axum_middleware,
    routing::{any, get, head},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Path of the quote endpoint
pub const QUOTE_PATH: &str = "/api/quote";

/// Create the main router
pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        // Service endpoints
        .route("/", head(handlers::health_check))
        .route("/health", get(handlers::health_check))
        // Every method reaches the handler so it can answer 405 with a JSON body
        .route(QUOTE_PATH, any(handlers::get_quote))
        // Apply middleware
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(axum_middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http());

    let router = if state.config.cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(60 * 60));
        router.layer(cors)
    } else {
        router
    };

    router.with_state(state)
}
