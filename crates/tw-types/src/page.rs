//! Timeline page types.
//!
//! A [`TimelinePage`] is one response body from the upstream timeline
//! endpoint. Pages are transient: the aggregator merges the items and drops
//! the page.

use crate::Tweet;
use serde::{Deserialize, Serialize};

/// Pagination metadata returned with every page.
///
/// The upstream omits fields it has no value for (an empty page has no
/// `oldest_id`/`newest_id`, the last page has no `next_token`), so every
/// field defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Id of the oldest post on this page.
    #[serde(default)]
    pub oldest_id: Option<String>,

    /// Id of the newest post on this page.
    #[serde(default)]
    pub newest_id: Option<String>,

    /// Number of posts on this page.
    #[serde(default)]
    pub result_count: u64,

    /// Cursor for the next page. Absent or empty on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of the account timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePage {
    /// Posts on this page, in upstream order.
    #[serde(rename = "data", default)]
    pub items: Vec<Tweet>,

    /// Pagination metadata.
    #[serde(default)]
    pub meta: PageMeta,
}

impl TimelinePage {
    /// Create a page from items and an optional continuation cursor.
    ///
    /// Mostly useful for tests and mocks; real pages come from serde.
    pub fn new(items: Vec<Tweet>, next_token: Option<&str>) -> Self {
        let meta = PageMeta {
            oldest_id: items.last().map(|t| t.id.clone()),
            newest_id: items.first().map(|t| t.id.clone()),
            result_count: items.len() as u64,
            next_token: next_token.map(str::to_string),
        };
        Self { items, meta }
    }

    /// The cursor to request the next page with, if there is one.
    ///
    /// An empty token is treated the same as a missing one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.next_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns true if this is the final page.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next_cursor().is_none()
    }
}
