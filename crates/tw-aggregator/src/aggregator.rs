//! Core aggregator implementation.
//!
//! The `Aggregator` owns a page source and turns one request's filter into
//! a complete [`TimelineSummary`].

use crate::error::AggregatorError;
use crate::scan::summarize;
use tw_ingestion::PageSource;
use std::env;
use std::num::NonZeroUsize;
use tw_types::{TimeFilter, TimelineSummary, Tweet};

/// Configuration for the aggregator.
///
/// # Environment Variables
///
/// - `MAX_PAGES`: positive page cap per request (default: unset, no cap)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Maximum number of pages to fetch per request.
    ///
    /// `None` (the default) follows the cursor for as long as upstream
    /// returns one.
    pub max_pages: Option<NonZeroUsize>,
}

impl AggregatorConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing, zero or unparseable `MAX_PAGES` means no cap.
    pub fn from_env() -> Self {
        Self {
            max_pages: env::var("MAX_PAGES")
                .ok()
                .and_then(|v| parse_max_pages(&v)),
        }
    }

    /// Cap the number of pages fetched per request.
    ///
    /// A cap of `0` removes the cap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tw_aggregator::AggregatorConfig;
    ///
    /// let config = AggregatorConfig::default().with_max_pages(50);
    /// assert_eq!(config.max_pages.map(|n| n.get()), Some(50));
    ///
    /// let config = AggregatorConfig::default().with_max_pages(0);
    /// assert_eq!(config.max_pages, None);
    /// ```
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = NonZeroUsize::new(max_pages);
        self
    }
}

/// Parse a page cap value. Zero and non-numbers yield `None`.
pub fn parse_max_pages(value: &str) -> Option<NonZeroUsize> {
    value.trim().parse().ok()
}

/// Drives a [`PageSource`] through the whole timeline.
///
/// The aggregator holds no per-request state: every call to
/// [`collect_all`](Aggregator::collect_all) builds its own accumulator, so a
/// single instance can serve concurrent requests behind an `Arc`.
///
/// # Example
///
/// ```rust,no_run
/// use tw_aggregator::{Aggregator, AggregatorConfig, TimeFilter};
/// use tw_ingestion::{ClientConfig, TwitterSource};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let source = TwitterSource::new(ClientConfig::from_env()?)?;
///     let aggregator = Aggregator::new(source, AggregatorConfig::default());
///
///     let summary = aggregator
///         .collect_all(&TimeFilter::new(Some("2021-01-01T00:00:00Z".into()), None))
///         .await?;
///
///     println!("{} posts, most liked: {}", summary.total_count(), summary.most_liked_id());
///     Ok(())
/// }
/// ```
pub struct Aggregator<S> {
    /// Where pages come from.
    source: S,

    /// Configuration.
    config: AggregatorConfig,
}

impl<S: PageSource> Aggregator<S> {
    /// Create a new aggregator over the given source.
    pub fn new(source: S, config: AggregatorConfig) -> Self {
        Self { source, config }
    }

    /// The underlying page source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every page matching `filter` and summarize the posts.
    ///
    /// Pages are fetched one after another, each with the previous page's
    /// cursor and the same `filter`. Posts keep fetch order.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::Upstream`] as soon as any page fetch fails;
    /// posts from earlier pages are discarded.
    /// Returns [`AggregatorError::PageLimitExceeded`] if `max_pages` is set
    /// and upstream still has a cursor after that many pages.
    pub async fn collect_all(
        &self,
        filter: &TimeFilter,
    ) -> Result<TimelineSummary, AggregatorError> {
        let mut items: Vec<Tweet> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            if let Some(limit) = self.config.max_pages.map(NonZeroUsize::get) {
                if pages >= limit {
                    tracing::warn!(
                        limit,
                        collected = items.len(),
                        "Page limit reached with cursor remaining"
                    );
                    return Err(AggregatorError::PageLimitExceeded { limit });
                }
            }

            let page = self
                .source
                .fetch_page(cursor.as_deref(), filter)
                .await
                .map_err(|e| {
                    tracing::warn!(
                        page = pages + 1,
                        kind = e.kind(),
                        "Page fetch failed, aborting"
                    );
                    e
                })?;
            pages += 1;

            let next = page.next_cursor().map(str::to_string);
            items.extend(page.items);

            match next {
                Some(token) => cursor = Some(token),
                None => break,
            }
        }

        let summary = summarize(items);
        tracing::info!(
            pages,
            total = summary.total_count(),
            most_liked = summary.most_liked_id(),
            most_replied = summary.most_replied_id(),
            "Collected timeline"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tw_ingestion::{MockSource, UpstreamError};
    use tw_types::TimelinePage;

    fn tweet(id: &str) -> Tweet {
        Tweet {
            id: id.to_string(),
            text: String::new(),
            metrics: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_single_page() {
        let source =
            MockSource::new().with_pages(vec![TimelinePage::new(vec![tweet("1"), tweet("2")], None)]);
        let aggregator = Aggregator::new(source, AggregatorConfig::default());

        let summary = aggregator.collect_all(&TimeFilter::default()).await.unwrap();

        assert_eq!(summary.total_count(), 2);
        assert_eq!(aggregator.source().call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_cursor_stops_loop() {
        let source = MockSource::new().with_pages(vec![
            TimelinePage::new(vec![tweet("1")], Some("")),
            TimelinePage::new(vec![tweet("never")], None),
        ]);
        let aggregator = Aggregator::new(source, AggregatorConfig::default());

        let summary = aggregator.collect_all(&TimeFilter::default()).await.unwrap();

        assert_eq!(summary.total_count(), 1);
        assert_eq!(aggregator.source().call_count(), 1);
    }

    #[tokio::test]
    async fn test_first_page_failure() {
        let source = MockSource::new().failing_at(0, UpstreamError::Unreachable("dns".into()));
        let aggregator = Aggregator::new(source, AggregatorConfig::default());

        let err = aggregator.collect_all(&TimeFilter::default()).await.unwrap_err();

        assert_eq!(
            err,
            AggregatorError::Upstream(UpstreamError::Unreachable("dns".into()))
        );
    }

    #[tokio::test]
    async fn test_page_limit() {
        let source = MockSource::repeating(TimelinePage::new(vec![tweet("x")], Some("more")));
        let aggregator = Aggregator::new(source, AggregatorConfig::default().with_max_pages(3));

        let err = aggregator.collect_all(&TimeFilter::default()).await.unwrap_err();

        assert_eq!(err, AggregatorError::PageLimitExceeded { limit: 3 });
        assert_eq!(aggregator.source().call_count(), 3);
    }

    #[tokio::test]
    async fn test_zero_cap_means_unbounded() {
        let source = MockSource::new().with_pages(vec![
            TimelinePage::new(vec![tweet("1")], Some("a")),
            TimelinePage::new(vec![tweet("2")], None),
        ]);
        let aggregator = Aggregator::new(source, AggregatorConfig::default().with_max_pages(0));

        let summary = aggregator.collect_all(&TimeFilter::default()).await.unwrap();

        assert_eq!(summary.total_count(), 2);
        assert_eq!(aggregator.source().call_count(), 2);
    }

    #[test]
    fn test_parse_max_pages() {
        assert_eq!(parse_max_pages("25").map(NonZeroUsize::get), Some(25));
        assert_eq!(parse_max_pages(" 3 ").map(NonZeroUsize::get), Some(3));
        assert_eq!(parse_max_pages("0"), None);
        assert_eq!(parse_max_pages("-1"), None);
        assert_eq!(parse_max_pages("lots"), None);
        assert_eq!(parse_max_pages(""), None);
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var("MAX_PAGES", "7");
        assert_eq!(
            AggregatorConfig::from_env().max_pages.map(NonZeroUsize::get),
            Some(7)
        );

        std::env::set_var("MAX_PAGES", "0");
        assert_eq!(AggregatorConfig::from_env().max_pages, None);

        std::env::remove_var("MAX_PAGES");
        assert_eq!(AggregatorConfig::from_env(), AggregatorConfig::default());
    }

    #[tokio::test]
    async fn test_page_limit_not_hit_when_last_page_fits() {
        let source = MockSource::new().with_pages(vec![
            TimelinePage::new(vec![tweet("1")], Some("a")),
            TimelinePage::new(vec![tweet("2")], None),
        ]);
        let aggregator = Aggregator::new(source, AggregatorConfig::default().with_max_pages(2));

        let summary = aggregator.collect_all(&TimeFilter::default()).await.unwrap();

        assert_eq!(summary.total_count(), 2);
    }
}
