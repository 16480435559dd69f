//! Configuration for the upstream client.
//!
//! Built once at startup and moved into [`TwitterSource`](crate::TwitterSource).
//! Request handling never reads the environment.
//!
//! # Environment Variables
//!
//! - `CMT_BEARER_TOKEN`: API bearer token (required)
//! - `TWITTER_API_URL`: API base URL (default: `https://api.twitter.com`)
//! - `TWITTER_ACCOUNT_ID`: Account whose timeline is fetched (default: `22176791`)

use crate::error::UpstreamError;
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default upstream API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

/// Default account id.
pub const DEFAULT_ACCOUNT_ID: &str = "22176791";

/// Hard per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Page size requested from the API (its maximum).
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Upstream client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URL; the timeline path is appended to it.
    pub base_url: String,

    /// Account whose timeline is fetched.
    pub account_id: String,

    /// Bearer token sent with every request.
    pub bearer_token: String,

    /// Per-request timeout covering connect, send and body read.
    pub timeout: Duration,

    /// `max_results` sent with every request.
    pub page_size: u32,
}

impl ClientConfig {
    /// Create a config for the default API and account.
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            bearer_token: bearer_token.into(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Config`] if `CMT_BEARER_TOKEN` is unset or
    /// empty, or if `TWITTER_API_URL` is not a valid URL.
    pub fn from_env() -> Result<Self, UpstreamError> {
        let token = env::var("CMT_BEARER_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| UpstreamError::Config("CMT_BEARER_TOKEN is not set".to_string()))?;

        let mut config = Self::new(token);

        if let Some(base) = env::var("TWITTER_API_URL").ok().filter(|s| !s.is_empty()) {
            config = config.with_base_url(&base)?;
        }
        if let Some(account) = env::var("TWITTER_ACCOUNT_ID").ok().filter(|s| !s.is_empty()) {
            config = config.with_account_id(account);
        }

        Ok(config)
    }

    /// Point the client at a different API host (e.g. a mock server).
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Config`] if `base_url` is not a valid URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, UpstreamError> {
        parse_base_url(base_url)?;
        self.base_url = base_url.to_string();
        Ok(self)
    }

    /// Fetch a different account's timeline.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the account timeline endpoint.
    pub fn timeline_url(&self) -> Result<Url, UpstreamError> {
        parse_base_url(&self.base_url)?
            .join(&format!("/2/users/{}/tweets", self.account_id))
            .map_err(|e| UpstreamError::Config(format!("invalid timeline URL: {e}")))
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, UpstreamError> {
    Url::parse(base_url)
        .map_err(|e| UpstreamError::Config(format!("invalid base URL {base_url:?}: {e}")))
}

// Keep the token out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("bearer_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("page_size", &self.page_size)
            .finish()
    }
}
