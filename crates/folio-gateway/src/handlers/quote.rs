//! Daily quote handler

use crate::{ApiError, AppState};
use axum::{extract::State, http::Method, Json};
use folio_quote::{fetch_quote, Quote};
use std::sync::Arc;

/// ANY /api/quote - Fetch and normalize one random quote
///
/// Only `GET` is served; every other method is rejected before the
/// upstream is contacted.
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    method: Method,
) -> Result<Json<Quote>, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let quote = fetch_quote(state.quotes.as_ref()).await?;

    Ok(Json(quote))
}
