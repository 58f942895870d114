//! Service-level handlers

use axum::{http::StatusCode, response::IntoResponse};

/// HEAD / and GET /health - Liveness probe
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
