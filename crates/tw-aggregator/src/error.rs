//! Error types for the aggregator.

use thiserror::Error;

/// Errors that can occur while collecting the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregatorError {
    /// A page fetch failed. The upstream error is passed through unchanged.
    #[error("upstream error: {0}")]
    Upstream(#[from] tw_ingestion::UpstreamError),

    /// The upstream kept returning cursors past the configured page cap.
    #[error("page limit of {limit} exceeded")]
    PageLimitExceeded { limit: usize },
}
