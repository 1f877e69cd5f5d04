//! Histogram construction and the three rendering backends.
mod buckets;
mod driver;
mod palette;
mod panel;
mod raster;
mod spec;
mod text;
mod vector;


pub use buckets::BucketGrid;
pub use driver::{Destination, render_histograms};
pub use palette::{Rgb, colour_for_index};
pub use spec::{
    HistogramSpec, SeriesSpec, SeriesStyle, build_histogram_specs, format_frequency_tick,
    format_time_tick,
};
