//! Error types and JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_quote::QuoteError;
use serde::Serialize;
use thiserror::Error;

/// Body of every failed response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Quote(QuoteError::UpstreamStatus(status)) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Quote(QuoteError::InvalidPayload(_) | QuoteError::BodyTooLarge { .. }) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Quote(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "Method not allowed",
            Self::Quote(QuoteError::UpstreamStatus(_)) => "Quote fetch failed",
            Self::Quote(QuoteError::InvalidPayload(_) | QuoteError::BodyTooLarge { .. }) => {
                "Invalid quote payload"
            }
            Self::Quote(_) => "Unexpected server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = %status.as_u16(), "{}", self);
        }

        (status, Json(ErrorBody { error: self.public_message() })).into_response()
    }
}
