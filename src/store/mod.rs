//! Append-only aggregation of normalized timing samples.

use std::collections::{BTreeMap, HashMap};

const INITIAL_SERIES_CAPACITY: usize = 1024;
const INITIAL_METRIC_CAPACITY: usize = 32;

const TAG_DELIMITER: &str = ",";

/// Join an ordered tag list into a series key.
///
/// Tags are joined in emission order with no canonicalization, so the same
/// tags in a different order name a different series.
#[must_use]
pub fn tag_set_key(tags: &[&str]) -> String {
    tags.join(TAG_DELIMITER)
}

/// Samples grouped by metric name and tag-set key.
///
/// Metric names keep first-seen order in a side list because map iteration
/// order is unspecified and multi-histogram output must be stable across
/// runs for the same input sequence. Tag-set keys within a metric iterate
/// in ascending byte-wise order.
#[derive(Debug, Default)]
pub struct SampleStore {
    series: HashMap<String, BTreeMap<String, Vec<f64>>>,
    order: Vec<String>,
}

impl SampleStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
            order: Vec::with_capacity(INITIAL_METRIC_CAPACITY),
        }
    }

    /// Append one normalized sample to the series for `(stat, tag_key)`.
    pub fn record(&mut self, stat: &str, tag_key: &str, value: f64) {
        if !self.series.contains_key(stat) {
            self.order.push(stat.to_owned());
        }
        self.series
            .entry(stat.to_owned())
            .or_default()
            .entry(tag_key.to_owned())
            .or_insert_with(|| Vec::with_capacity(INITIAL_SERIES_CAPACITY))
            .push(value);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Metric names in first-seen order.
    #[must_use]
    pub fn metric_names(&self) -> &[String] {
        &self.order
    }

    /// Tag-set keys and sample series for one metric, keyed in ascending
    /// byte-wise order.
    #[must_use]
    pub fn metric_series(&self, stat: &str) -> Option<&BTreeMap<String, Vec<f64>>> {
        self.series.get(stat)
    }

    /// Iterate metrics in first-seen order with their sorted series maps.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, Vec<f64>>)> {
        self.order
            .iter()
            .filter_map(|stat| self.series.get(stat).map(|tags| (stat.as_str(), tags)))
    }
}
