//! Route handlers for the API endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use tw_ingestion::PageSource;
use tw_types::TimeFilter;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{HealthResponse, TweetsQuery, TweetsResponse};

/// GET /health - Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/tweets - Collect the whole timeline and summarize it.
///
/// If the client disconnects, axum drops this future and with it the
/// in-flight upstream request.
pub async fn get_tweets<S: PageSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<TweetsQuery>,
) -> Result<Json<TweetsResponse>, ApiError> {
    let filter = TimeFilter::from(query);

    let summary = state.aggregator.collect_all(&filter).await?;

    Ok(Json(summary.into()))
}
