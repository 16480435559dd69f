//! tw-api: HTTP API layer for the timeline summary service
//!
//! This crate defines the HTTP surface:
//! - GET /api/tweets
//! - GET /health
//! - GET / and the frontend's static assets

pub mod error;
pub mod handlers;
pub mod state;
mod static_files;
pub mod types;

use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tw_ingestion::PageSource;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router.
///
/// `dist_dir` is the built frontend directory holding `index.html` and
/// the asset folders.
pub fn create_router<S: PageSource + 'static>(
    state: Arc<AppState<S>>,
    dist_dir: &Path,
) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/tweets", get(handlers::get_tweets::<S>))
        .with_state(state)
        .merge(static_files::router(dist_dir))
        .layer(TraceLayer::new_for_http())
}
