//! Order statistics over collected posts.
//!
//! The scans live next to [`TimelineSummary`] so its constructor can
//! compute both ids itself; they are re-exported here for pipeline users.

use tw_types::{TimelineSummary, Tweet};

pub use tw_types::{most_liked, most_replied};

/// Build a [`TimelineSummary`] from every collected post.
///
/// Ids are empty strings when there are no posts.
pub fn summarize(items: Vec<Tweet>) -> TimelineSummary {
    TimelineSummary::from_items(items)
}
