//! Application state for the API server.

use tw_aggregator::Aggregator;

/// Shared application state.
///
/// Immutable after startup; every request builds its own accumulator
/// inside [`Aggregator::collect_all`], so no locking is needed.
pub struct AppState<S> {
    /// The aggregator for collecting the timeline.
    pub aggregator: Aggregator<S>,
}

impl<S> AppState<S> {
    /// Create a new application state with the given aggregator.
    pub fn new(aggregator: Aggregator<S>) -> Self {
        Self { aggregator }
    }
}
