//! Time window filter forwarded to the upstream API.

/// Optional `start_time` / `end_time` bounds for a timeline query.
///
/// Values are opaque strings (RFC3339 is expected upstream) and are never
/// parsed here; validation is left to the upstream API. Empty strings are
/// dropped so `?start_time=` behaves like no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeFilter {
    /// Oldest post time to include.
    pub start_time: Option<String>,

    /// Newest post time to include.
    pub end_time: Option<String>,
}

impl TimeFilter {
    /// Build a filter, discarding empty values.
    pub fn new(start_time: Option<String>, end_time: Option<String>) -> Self {
        Self {
            start_time: start_time.filter(|s| !s.is_empty()),
            end_time: end_time.filter(|s| !s.is_empty()),
        }
    }

    /// Returns true if neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }

    /// Query parameters for the upstream request, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(start) = self.start_time.as_deref() {
            pairs.push(("start_time", start));
        }
        if let Some(end) = self.end_time.as_deref() {
            pairs.push(("end_time", end));
        }
        pairs
    }
}
