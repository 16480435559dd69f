//! Pipeline tests: pagination, fail-fast and filter passthrough.

use tw_aggregator::{Aggregator, AggregatorConfig, AggregatorError, TimeFilter, UpstreamError};
use tw_ingestion::MockSource;
use tw_types::{PublicMetrics, TimelinePage, Tweet};

fn tweet(id: &str, likes: u64, replies: u64) -> Tweet {
    Tweet {
        id: id.to_string(),
        text: format!("post {id}"),
        metrics: PublicMetrics {
            like_count: likes,
            reply_count: replies,
            ..Default::default()
        },
    }
}

fn aggregator(source: MockSource) -> Aggregator<MockSource> {
    Aggregator::new(source, AggregatorConfig::default())
}

#[tokio::test]
async fn test_two_page_example() {
    let source = MockSource::new().with_pages(vec![
        TimelinePage::new(vec![tweet("1", 5, 1), tweet("2", 5, 9)], Some("tok")),
        TimelinePage::new(vec![tweet("3", 2, 1)], Some("")),
    ]);
    let aggregator = aggregator(source);

    let summary = aggregator.collect_all(&TimeFilter::default()).await.unwrap();

    assert_eq!(summary.total_count(), 3);
    assert_eq!(summary.most_liked_id(), "2");
    assert_eq!(summary.most_replied_id(), "2");

    let ids: Vec<&str> = summary.items().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_n_pages_means_n_fetches() {
    let pages: Vec<TimelinePage> = (0..5)
        .map(|i| {
            let items = (0..=i).map(|j| tweet(&format!("{i}-{j}"), j, 0)).collect();
            let next = (i < 4).then(|| format!("cursor-{i}"));
            TimelinePage::new(items, next.as_deref())
        })
        .collect();
    let expected: usize = pages.iter().map(|p| p.items.len()).sum();

    let aggregator = aggregator(MockSource::new().with_pages(pages));
    let summary = aggregator.collect_all(&TimeFilter::default()).await.unwrap();

    assert_eq!(aggregator.source().call_count(), 5);
    assert_eq!(summary.total_count(), expected);

    // Each fetch carries the previous page's cursor.
    let cursors: Vec<Option<String>> = aggregator
        .source()
        .calls()
        .into_iter()
        .map(|c| c.cursor)
        .collect();
    assert_eq!(
        cursors,
        vec![
            None,
            Some("cursor-0".to_string()),
            Some("cursor-1".to_string()),
            Some("cursor-2".to_string()),
            Some("cursor-3".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_empty_upstream() {
    let aggregator = aggregator(MockSource::new().with_pages(vec![TimelinePage::default()]));

    let summary = aggregator.collect_all(&TimeFilter::default()).await.unwrap();

    assert_eq!(summary.total_count(), 0);
    assert_eq!(summary.most_liked_id(), "");
    assert_eq!(summary.most_replied_id(), "");
    assert_eq!(aggregator.source().call_count(), 1);
}

#[tokio::test]
async fn test_failure_on_later_page_discards_everything() {
    let source = MockSource::new()
        .with_pages(vec![
            TimelinePage::new(vec![tweet("1", 100, 100)], Some("a")),
            TimelinePage::new(vec![tweet("2", 1, 1)], Some("b")),
            TimelinePage::new(vec![tweet("3", 1, 1)], None),
        ])
        .failing_at(
            2,
            UpstreamError::BadResponse {
                status: 503,
                body: "Service Unavailable".to_string(),
            },
        );
    let aggregator = aggregator(source);

    let result = aggregator.collect_all(&TimeFilter::default()).await;

    assert_eq!(
        result,
        Err(AggregatorError::Upstream(UpstreamError::BadResponse {
            status: 503,
            body: "Service Unavailable".to_string(),
        }))
    );
    // No fetch after the failing one.
    assert_eq!(aggregator.source().call_count(), 3);
}

#[tokio::test]
async fn test_timeout_propagates_unchanged() {
    let source = MockSource::new()
        .with_pages(vec![TimelinePage::new(vec![tweet("1", 0, 0)], Some("a"))])
        .failing_at(1, UpstreamError::Timeout);

    let err = aggregator(source)
        .collect_all(&TimeFilter::default())
        .await
        .unwrap_err();

    assert_eq!(err, AggregatorError::Upstream(UpstreamError::Timeout));
}

#[tokio::test]
async fn test_filters_forwarded_on_every_page() {
    let source = MockSource::new().with_pages(vec![
        TimelinePage::new(vec![tweet("1", 0, 0)], Some("a")),
        TimelinePage::new(vec![tweet("2", 0, 0)], Some("b")),
        TimelinePage::new(vec![tweet("3", 0, 0)], None),
    ]);
    let aggregator = aggregator(source);
    let filter = TimeFilter::new(
        Some("2021-01-01T00:00:00Z".into()),
        Some("2021-12-31T23:59:59Z".into()),
    );

    aggregator.collect_all(&filter).await.unwrap();

    let calls = aggregator.source().calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.filter == filter));
}

#[tokio::test]
async fn test_tie_across_pages_goes_to_later_page() {
    let source = MockSource::new().with_pages(vec![
        TimelinePage::new(vec![tweet("early", 8, 3)], Some("a")),
        TimelinePage::new(vec![tweet("late", 8, 3)], None),
    ]);

    let summary = aggregator(source)
        .collect_all(&TimeFilter::default())
        .await
        .unwrap();

    assert_eq!(summary.most_liked_id(), "late");
    assert_eq!(summary.most_replied_id(), "late");
}
