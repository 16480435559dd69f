//! tw-aggregator: Pagination loop and metrics aggregation.
//!
//! This crate provides the [`Aggregator`] struct which drives a
//! [`PageSource`](tw_ingestion::PageSource) through every page of the
//! timeline and reduces the result to a [`TimelineSummary`].
//!
//! # Overview
//!
//! The aggregator:
//! - Follows `next_token` until the upstream stops returning one
//! - Forwards the same [`TimeFilter`] on every page
//! - Fails fast: the first upstream error aborts the whole collection
//! - Picks the most-liked and most-replied posts in one linear scan each
//!
//! # Example
//!
//! ```rust
//! use tw_aggregator::{Aggregator, AggregatorConfig};
//! use tw_ingestion::MockSource;
//! use tw_types::TimeFilter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let aggregator = Aggregator::new(MockSource::new(), AggregatorConfig::default());
//!
//!     let summary = aggregator.collect_all(&TimeFilter::default()).await?;
//!
//!     assert_eq!(summary.total_count(), 0);
//!     assert_eq!(summary.most_liked_id(), "");
//!     Ok(())
//! }
//! ```

mod aggregator;
mod error;
mod scan;

pub use aggregator::{parse_max_pages, Aggregator, AggregatorConfig};
pub use error::AggregatorError;
pub use scan::{most_liked, most_replied, summarize};

// Re-export commonly used types from dependencies for convenience
pub use tw_ingestion::UpstreamError;
pub use tw_types::{TimeFilter, TimelineSummary, Tweet};
