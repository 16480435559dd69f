//! tw-types: Shared data structures for the timeline summary service
//!
//! This crate defines the types passed between the workspace crates:
//! - [`Tweet`] - A single post with its [`PublicMetrics`]
//! - [`TimelinePage`] - One page of the upstream timeline plus its [`PageMeta`]
//! - [`TimeFilter`] - Optional time window forwarded to the upstream API
//! - [`TimelineSummary`] - The aggregated result for one request
//!
//! # Example
//!
//! ```rust
//! use tw_types::TimelinePage;
//!
//! let body = r#"{"data":[{"id":"1","text":"hi","public_metrics":
//!     {"retweet_count":0,"reply_count":2,"like_count":5,"quote_count":0}}],
//!     "meta":{"result_count":1,"next_token":"abc"}}"#;
//!
//! let page: TimelinePage = serde_json::from_str(body).unwrap();
//! assert_eq!(page.items.len(), 1);
//! assert_eq!(page.next_cursor(), Some("abc"));
//! ```

mod filter;
mod page;
mod summary;
mod tweet;

pub use filter::TimeFilter;
pub use page::{PageMeta, TimelinePage};
pub use summary::{most_liked, most_replied, TimelineSummary};
pub use tweet::{PublicMetrics, Tweet};
