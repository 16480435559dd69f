//! Error types for the upstream client.
//!
//! Every failure is converted to owned data right away, so the error is
//! `Clone` and carries no lifetimes. [`MockSource`](crate::MockSource)
//! replays errors, which needs `Clone`.

use thiserror::Error;

/// Errors that can occur while fetching a timeline page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The request did not finish within the per-call timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// Upstream answered, but with a non-2xx status or a body we could not
    /// decode. Status and raw body are kept for diagnostics.
    #[error("bad response from upstream (status {status}): {body}")]
    BadResponse {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Transport failure before any response (DNS, connection refused, TLS).
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// Client could not be built (bad credential, bad URL, missing env var).
    #[error("config error: {0}")]
    Config(String),
}

impl UpstreamError {
    /// Short machine-readable name of the error kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Timeout => "timeout",
            UpstreamError::BadResponse { .. } => "bad_response",
            UpstreamError::Unreachable(_) => "unreachable",
            UpstreamError::Config(_) => "config",
        }
    }
}

// Sort reqwest's single error type into our kinds.
impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_builder() {
            UpstreamError::Config(err.to_string())
        } else if err.is_status() || err.is_decode() {
            UpstreamError::BadResponse {
                status: err.status().map_or(0, |s| s.as_u16()),
                body: err.to_string(),
            }
        } else {
            UpstreamError::Unreachable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(UpstreamError::Timeout.kind(), "timeout");
        assert_eq!(
            UpstreamError::BadResponse {
                status: 401,
                body: String::new()
            }
            .kind(),
            "bad_response"
        );
        assert_eq!(UpstreamError::Unreachable("x".into()).kind(), "unreachable");
    }

    #[test]
    fn test_bad_response_display_includes_status_and_body() {
        let err = UpstreamError::BadResponse {
            status: 400,
            body: r#"{"title":"Invalid Request"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("Invalid Request"));
    }
}
