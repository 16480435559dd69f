//! Production page source backed by the v2 timeline API.
//!
//! # Request shape
//!
//! Every request is a GET to `/2/users/{id}/tweets` with:
//! - `exclude=retweets`
//! - `max_results=100`
//! - `tweet.fields=public_metrics`
//! - `start_time` / `end_time` when the caller supplied them
//! - `pagination_token` for every page after the first
//!
//! The bearer token is installed as a default header when the client is
//! built, so an unusable token fails at startup instead of per request.
//!
//! # Errors
//!
//! No retries happen here. A timeout, transport failure, non-2xx status or
//! undecodable body is returned to the caller as an [`UpstreamError`].

use crate::{config::ClientConfig, error::UpstreamError, PageSource};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tw_types::{TimeFilter, TimelinePage};
use url::Url;

/// Page source that talks to the real API.
///
/// # Example
///
/// ```rust,no_run
/// use tw_ingestion::{ClientConfig, PageSource, TwitterSource};
/// use tw_types::TimeFilter;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let source = TwitterSource::new(ClientConfig::from_env()?)?;
///     let page = source.fetch_page(None, &TimeFilter::default()).await?;
///     println!("Got {} posts", page.items.len());
///     Ok(())
/// }
/// ```
pub struct TwitterSource {
    /// Pooled HTTP client carrying the auth header and timeout.
    http_client: reqwest::Client,

    /// Resolved timeline endpoint.
    timeline_url: Url,

    /// `max_results` value, pre-rendered.
    page_size: String,
}

impl TwitterSource {
    /// Build a source from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Config`] if the token can't be used as a
    /// header value, the timeline URL can't be built, or the HTTP client
    /// fails to initialise.
    pub fn new(config: ClientConfig) -> Result<Self, UpstreamError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.bearer_token))
            .map_err(|e| UpstreamError::Config(format!("invalid bearer token: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            timeline_url: config.timeline_url()?,
            page_size: config.page_size.to_string(),
        })
    }

    /// The endpoint this source queries.
    pub fn timeline_url(&self) -> &Url {
        &self.timeline_url
    }

    /// Query parameters for one page request.
    fn query<'a>(
        &'a self,
        cursor: Option<&'a str>,
        filter: &'a TimeFilter,
    ) -> Vec<(&'static str, &'a str)> {
        let mut query = vec![
            ("exclude", "retweets"),
            ("max_results", self.page_size.as_str()),
            ("tweet.fields", "public_metrics"),
        ];
        query.extend(filter.query_pairs());
        if let Some(token) = cursor {
            query.push(("pagination_token", token));
        }
        query
    }
}

impl PageSource for TwitterSource {
    async fn fetch_page(
        &self,
        cursor: Option<&str>,
        filter: &TimeFilter,
    ) -> Result<TimelinePage, UpstreamError> {
        let query = self.query(cursor, filter);
        tracing::debug!(url = %self.timeline_url, ?cursor, ?filter, "Fetching timeline page");

        let response = self
            .http_client
            .get(self.timeline_url.clone())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Upstream returned non-success status");
            return Err(UpstreamError::BadResponse {
                status: status.as_u16(),
                body,
            });
        }

        let page: TimelinePage = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to decode timeline page");
            UpstreamError::BadResponse {
                status: status.as_u16(),
                body: body.clone(),
            }
        })?;

        tracing::debug!(
            count = page.items.len(),
            next = ?page.next_cursor(),
            "Fetched timeline page"
        );

        Ok(page)
    }
}
