//! # tw-ingestion
//!
//! Upstream client for the account timeline API.
//!
//! This crate provides a [`PageSource`] trait that fetches one timeline page
//! at a time, a production implementation over `reqwest`
//! ([`TwitterSource`]) and a scripted [`MockSource`] for tests.
//!
//! ## Design Principles
//!
//! - **One page per call**: the source never loops. Following the cursor is
//!   the aggregator's job, so the pagination policy lives in one place.
//!
//! - **No retries**: a single failure is returned as an [`UpstreamError`].
//!
//! - **Config in, not env reads**: [`ClientConfig`] is built once at startup
//!   and handed to [`TwitterSource::new`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tw_ingestion::{ClientConfig, PageSource, TwitterSource};
//! use tw_types::TimeFilter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = TwitterSource::new(ClientConfig::new("my-bearer-token"))?;
//!
//!     let filter = TimeFilter::new(Some("2021-01-01T00:00:00Z".into()), None);
//!     let page = source.fetch_page(None, &filter).await?;
//!
//!     println!("Fetched {} posts, next: {:?}", page.items.len(), page.next_cursor());
//!     Ok(())
//! }
//! ```
//!
//! ## Testing with MockSource
//!
//! ```rust
//! use tw_ingestion::{MockSource, PageSource};
//! use tw_types::TimeFilter;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockSource::new();
//!     let page = mock.fetch_page(None, &TimeFilter::default()).await.unwrap();
//!     assert!(page.items.is_empty()); // No pages configured
//! }
//! ```

pub mod config;
pub mod error;
mod mock;
mod twitter;

pub use config::ClientConfig;
pub use error::UpstreamError;
pub use mock::{MockSource, RecordedCall};
pub use twitter::TwitterSource;

use tw_types::{TimeFilter, TimelinePage};

/// Source of timeline pages.
///
/// Uses native async syntax (Rust 1.75+) rather than `async_trait`, and
/// requires `Send + Sync` so a source can sit in shared axum state and be
/// used from many requests at once.
///
/// ## Implementors
///
/// - [`TwitterSource`]: Production implementation over HTTP
/// - [`MockSource`]: Test implementation with scripted pages
pub trait PageSource: Send + Sync {
    /// Fetch a single page of the timeline.
    ///
    /// # Arguments
    ///
    /// * `cursor` - `next_token` from the previous page, `None` for the first page
    /// * `filter` - Time window, forwarded unchanged on every page
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Timeout`] if the call exceeds the timeout.
    /// Returns [`UpstreamError::BadResponse`] on non-2xx or undecodable bodies.
    /// Returns [`UpstreamError::Unreachable`] on transport failures.
    fn fetch_page(
        &self,
        cursor: Option<&str>,
        filter: &TimeFilter,
    ) -> impl std::future::Future<Output = Result<TimelinePage, UpstreamError>> + Send;
}
