//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tw_aggregator::AggregatorError;

/// API errors that can be returned to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error from the aggregation pipeline.
    #[error("aggregator error: {0}")]
    Aggregator(#[from] AggregatorError),
}

/// Error response body.
///
/// Only a generic code goes to the client; the full error is logged.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl ApiError {
    /// Status code and public error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Aggregator(AggregatorError::Upstream(_)) => {
                (StatusCode::BAD_GATEWAY, "upstream_error")
            }
            ApiError::Aggregator(AggregatorError::PageLimitExceeded { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_code();
        tracing::error!(status = status.as_u16(), "Request failed: {}", self);

        (status, Json(ErrorResponse { error })).into_response()
    }
}
