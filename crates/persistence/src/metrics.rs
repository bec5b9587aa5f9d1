//! Query metrics collection.
//!
//! Durations go through the `metrics` facade; without an installed exporter
//! the recordings are no-ops.

use metrics::histogram;
use std::time::Instant;

/// Times one repository query and records its duration as a histogram
/// labeled with the query name.
pub struct QueryTimer {
    query_name: String,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name
        )
        .record(duration);
    }
}
