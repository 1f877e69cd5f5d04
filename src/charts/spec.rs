//! Derived histogram views built once per metric at shutdown.

use crate::store::SampleStore;

use super::buckets::BucketGrid;
use super::palette::{Rgb, colour_for_index};

// Inherited labels, preserved verbatim: the X axis says seconds while the
// tick formatter works in milliseconds for most of its range.
pub(crate) const X_AXIS_LABEL: &str = "Time [s]";
pub(crate) const Y_AXIS_LABEL: &str = "Frequency [count]";

/// Visual style for one series on a graphical backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub fill: Rgb,
    pub line: Rgb,
    pub line_width: u32,
}

/// One tag-set series within a histogram, in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec<'store> {
    pub key: &'store str,
    pub samples: &'store [f64],
    pub style: Option<SeriesStyle>,
}

/// Read-only view of one metric's histogram: title, shared bucket grid,
/// and series in ascending tag-key order.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec<'store> {
    pub title: &'store str,
    pub grid: BucketGrid,
    pub series: Vec<SeriesSpec<'store>>,
}

impl HistogramSpec<'_> {
    /// Largest frequency across all series; the tight Y upper bound.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|series| self.grid.counts(series.samples))
            .max()
            .unwrap_or(0)
    }
}

/// Build one histogram per metric: metrics in first-seen order, series in
/// sorted tag-key order, styled only when a graphical backend will render
/// them.
#[must_use]
pub fn build_histogram_specs(store: &SampleStore, styled: bool) -> Vec<HistogramSpec<'_>> {
    store
        .iter()
        .map(|(stat, tags)| {
            let max_value = tags
                .values()
                .flat_map(|samples| samples.iter().copied())
                .fold(0.0_f64, f64::max);
            let series = tags
                .iter()
                .enumerate()
                .map(|(ordinal, (key, samples))| {
                    let style = styled.then(|| {
                        let (fill, line) = colour_for_index(ordinal);
                        SeriesStyle {
                            fill,
                            line,
                            line_width: 1,
                        }
                    });
                    SeriesSpec {
                        key: key.as_str(),
                        samples: samples.as_slice(),
                        style,
                    }
                })
                .collect();
            HistogramSpec {
                title: stat,
                grid: BucketGrid::covering(max_value),
                series,
            }
        })
        .collect()
}

/// Format a frequency tick with no decimal places.
#[must_use]
pub fn format_frequency_tick(value: f64) -> String {
    format!("{value:.0}")
}

/// Format a time tick: fractional milliseconds below 500, whole
/// milliseconds below 1100, then bare seconds with two decimals (the
/// seconds regime carries no unit suffix).
#[must_use]
pub fn format_time_tick(value: f64) -> String {
    if value < 500.0 {
        format!("{value:.1}ms")
    } else if value < 1100.0 {
        format!("{value:.0}ms")
    } else {
        format!("{:.2}", value / 1000.0)
    }
}
