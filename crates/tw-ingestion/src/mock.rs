//! Mock page source for testing.
//!
//! `MockSource` implements `PageSource` with a scripted list of pages,
//! allowing pipeline and HTTP tests to run without network calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tw_ingestion::{MockSource, UpstreamError};
//!
//! let mock = MockSource::new()
//!     .with_pages(vec![first_page, last_page])
//!     .failing_at(1, UpstreamError::Timeout);
//! ```

use crate::{error::UpstreamError, PageSource};
use std::sync::{Mutex, PoisonError};
use tw_types::{TimeFilter, TimelinePage};

/// Arguments of one `fetch_page` call, as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Cursor the caller passed.
    pub cursor: Option<String>,
    /// Filter the caller passed.
    pub filter: TimeFilter,
}

/// Mock page source for testing.
///
/// The Nth call returns the Nth configured page regardless of the cursor,
/// so tests can check the cursors that were sent via [`MockSource::calls`].
/// Calls past the end of the script return an empty final page, or the last
/// page again when built with [`MockSource::repeating`].
#[derive(Debug, Default)]
pub struct MockSource {
    /// Pages to return, in call order.
    pub pages: Vec<TimelinePage>,

    /// Call index (0-based) that fails, and the error it returns.
    pub fail_at: Option<(usize, UpstreamError)>,

    /// Keep returning the last page once the script runs out.
    pub repeat_last: bool,

    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSource {
    /// Create a new empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pages to return (builder pattern).
    pub fn with_pages(mut self, pages: Vec<TimelinePage>) -> Self {
        self.pages = pages;
        self
    }

    /// Make call number `call` (0-based) fail with `error`.
    pub fn failing_at(mut self, call: usize, error: UpstreamError) -> Self {
        self.fail_at = Some((call, error));
        self
    }

    /// A source that returns `page` on every call, forever.
    pub fn repeating(page: TimelinePage) -> Self {
        Self {
            pages: vec![page],
            repeat_last: true,
            ..Self::default()
        }
    }

    /// Every call made so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl PageSource for MockSource {
    async fn fetch_page(
        &self,
        cursor: Option<&str>,
        filter: &TimeFilter,
    ) -> Result<TimelinePage, UpstreamError> {
        let index = {
            let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
            calls.push(RecordedCall {
                cursor: cursor.map(str::to_string),
                filter: filter.clone(),
            });
            calls.len() - 1
        };

        if let Some((fail_index, error)) = &self.fail_at {
            if *fail_index == index {
                return Err(error.clone());
            }
        }

        let page = match self.pages.get(index) {
            Some(page) => page.clone(),
            None if self.repeat_last => self.pages.last().cloned().unwrap_or_default(),
            None => TimelinePage::default(),
        };

        Ok(page)
    }
}
