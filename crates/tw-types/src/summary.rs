//! Aggregated timeline summary.
//!
//! The two order statistics are single passes that track the running
//! maximum. When several posts share the maximum, the one fetched last
//! wins, which is what `Iterator::max_by_key` returns.

use crate::Tweet;
use serde::Serialize;

/// The post with the most likes, or `None` for an empty slice.
pub fn most_liked(items: &[Tweet]) -> Option<&Tweet> {
    items.iter().max_by_key(|t| t.like_count())
}

/// The post with the most replies, or `None` for an empty slice.
pub fn most_replied(items: &[Tweet]) -> Option<&Tweet> {
    items.iter().max_by_key(|t| t.reply_count())
}

/// The result of collecting every page for one request.
///
/// The only constructor is [`TimelineSummary::from_items`], which computes
/// both ids from `items`, so each id is either `""` (no items) or the id
/// of a post in `items`. `total_count` is always derived from `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineSummary {
    items: Vec<Tweet>,
    most_liked_id: String,
    most_replied_id: String,
}

impl TimelineSummary {
    /// Summarize collected posts, kept in fetch order.
    pub fn from_items(items: Vec<Tweet>) -> Self {
        let most_liked_id = most_liked(&items).map(|t| t.id.clone()).unwrap_or_default();
        let most_replied_id = most_replied(&items)
            .map(|t| t.id.clone())
            .unwrap_or_default();

        Self {
            items,
            most_liked_id,
            most_replied_id,
        }
    }

    /// Number of collected posts.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Collected posts in fetch order.
    pub fn items(&self) -> &[Tweet] {
        &self.items
    }

    /// Id of the post with the most likes, or `""` if there are none.
    pub fn most_liked_id(&self) -> &str {
        &self.most_liked_id
    }

    /// Id of the post with the most replies, or `""` if there are none.
    pub fn most_replied_id(&self) -> &str {
        &self.most_replied_id
    }

    /// Consume the summary, returning `(items, most_liked_id, most_replied_id)`.
    pub fn into_parts(self) -> (Vec<Tweet>, String, String) {
        (self.items, self.most_liked_id, self.most_replied_id)
    }
}
