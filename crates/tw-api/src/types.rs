//! API request and response types.

use serde::{Deserialize, Serialize};
use tw_types::{TimeFilter, TimelineSummary, Tweet};

/// Query parameters for `GET /api/tweets`.
///
/// Both bounds are forwarded to upstream as-is; nothing is validated here.
#[derive(Debug, Default, Deserialize)]
pub struct TweetsQuery {
    /// Oldest post time (RFC3339).
    pub start_time: Option<String>,
    /// Newest post time (RFC3339).
    pub end_time: Option<String>,
}

impl From<TweetsQuery> for TimeFilter {
    fn from(query: TweetsQuery) -> Self {
        TimeFilter::new(query.start_time, query.end_time)
    }
}

/// Response body for `GET /api/tweets`.
#[derive(Debug, Serialize)]
pub struct TweetsResponse {
    /// Number of posts collected.
    pub tweet_count: usize,
    /// Every post, in fetch order.
    pub tweets: Vec<Tweet>,
    /// Id of the most-liked post, `""` if none.
    pub most_liked: String,
    /// Id of the most-replied post, `""` if none.
    pub most_replied: String,
}

impl From<TimelineSummary> for TweetsResponse {
    fn from(summary: TimelineSummary) -> Self {
        let tweet_count = summary.total_count();
        let (tweets, most_liked, most_replied) = summary.into_parts();
        Self {
            tweet_count,
            tweets,
            most_liked,
            most_replied,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
