//! Post types.
//!
//! [`Tweet`] is both the upstream wire shape and the shape we return to
//! clients, so a single serde derive covers both directions.

use serde::{Deserialize, Serialize};

/// Engagement counters attached to a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMetrics {
    /// Number of reposts.
    #[serde(default)]
    pub retweet_count: u64,

    /// Number of replies.
    #[serde(default)]
    pub reply_count: u64,

    /// Number of likes.
    #[serde(default)]
    pub like_count: u64,

    /// Number of quote posts.
    #[serde(default)]
    pub quote_count: u64,
}

/// A single post from the account timeline.
///
/// # Fields
///
/// - `id`: Opaque identifier, unique within the account
/// - `text`: Display text
/// - `metrics`: Engagement counters (`public_metrics` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Upstream post identifier.
    pub id: String,

    /// Post body.
    #[serde(default)]
    pub text: String,

    /// Engagement counters.
    #[serde(rename = "public_metrics", default)]
    pub metrics: PublicMetrics,
}

impl Tweet {
    /// Number of likes on this post.
    #[inline]
    pub fn like_count(&self) -> u64 {
        self.metrics.like_count
    }

    /// Number of replies to this post.
    #[inline]
    pub fn reply_count(&self) -> u64 {
        self.metrics.reply_count
    }
}
