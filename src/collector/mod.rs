//! SDK-facing collector hooks and the local histogram-dump implementation.
#[cfg(test)]
mod tests;

use std::time::Duration;

use tracing::debug;

use crate::charts::{Destination, render_histograms};
use crate::config::SinkConfig;
use crate::error::SinkResult;
use crate::store::{SampleStore, tag_set_key};

/// Collector hooks consumed by host instrumentation code.
///
/// Only `timing` aggregates in this sink; the remaining metric kinds are
/// accepted for interface compatibility and ignored.
pub trait Collector {
    /// Record one timing sample for `stat`, distinguished by `tags`.
    fn timing(&mut self, stat: &str, value: Duration, tags: &[&str]);

    /// Record a counter increment. Ignored by this sink.
    fn count(&mut self, stat: &str, count: f64, tags: &[&str]);

    /// Record a gauge value. Ignored by this sink.
    fn gauge(&mut self, stat: &str, value: f64, tags: &[&str]);

    /// Record a pre-aggregated histogram value. Ignored by this sink.
    fn histogram(&mut self, stat: &str, value: f64, tags: &[&str]);

    /// Report an informational event. Ignored by this sink.
    fn inform(&mut self, title: &str, text: &str, tags: &[&str]);

    /// Report an error event. Ignored by this sink.
    fn error(&mut self, error: &(dyn std::error::Error + 'static), tags: &[&str]);

    /// Render and flush everything recorded so far. One-shot: the
    /// collector ignores further events afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the render destination cannot be created or
    /// written.
    fn close(&mut self) -> SinkResult<()>;
}

/// Convert a raw timing into display milliseconds.
///
/// Sub-millisecond values collapse to exactly 0.0 so the charts put them
/// in the zero bucket instead of spreading them over fractional-ms
/// buckets. The nanosecond precision is not retained.
pub(crate) fn normalize_timing(value: Duration) -> f64 {
    let ms = value.as_nanos() as f64 / 1e6;
    if ms < 1.0 { 0.0 } else { ms }
}

/// Local collector buffering timing samples and rendering one latency
/// histogram per metric when closed.
#[derive(Debug)]
pub struct StdoutCollector {
    destination: Destination,
    whitelist: Vec<String>,
    store: SampleStore,
    closed: bool,
}

impl StdoutCollector {
    /// `destination` is interpreted per [`Destination::parse`]; an empty
    /// `whitelist` records every metric.
    #[must_use]
    pub fn new(destination: &str, whitelist: Vec<String>) -> Self {
        Self {
            destination: Destination::parse(destination),
            whitelist,
            store: SampleStore::new(),
            closed: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &SinkConfig) -> Self {
        Self::new(&config.destination, config.whitelist.clone())
    }

    fn whitelisted(&self, stat: &str) -> bool {
        self.whitelist.is_empty() || self.whitelist.iter().any(|entry| entry == stat)
    }
}

impl Collector for StdoutCollector {
    fn timing(&mut self, stat: &str, value: Duration, tags: &[&str]) {
        if self.closed || !self.whitelisted(stat) {
            return;
        }
        let key = tag_set_key(tags);
        self.store.record(stat, &key, normalize_timing(value));
    }

    fn count(&mut self, _stat: &str, _count: f64, _tags: &[&str]) {}

    fn gauge(&mut self, _stat: &str, _value: f64, _tags: &[&str]) {}

    fn histogram(&mut self, _stat: &str, _value: f64, _tags: &[&str]) {}

    fn inform(&mut self, _title: &str, _text: &str, _tags: &[&str]) {}

    fn error(&mut self, _error: &(dyn std::error::Error + 'static), _tags: &[&str]) {}

    fn close(&mut self) -> SinkResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let store = std::mem::take(&mut self.store);
        if store.is_empty() {
            debug!("No timing samples recorded; skipping histogram render");
            return Ok(());
        }
        render_histograms(&store, &self.destination)
    }
}
