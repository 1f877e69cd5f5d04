use serde::Deserialize;

/// Construction parameters for a collector: where rendered histograms go
/// and which metric names are recorded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Destination descriptor: empty or `"stdout"` for terminal text, a
    /// `.png` path for raster output, any other path for SVG.
    pub destination: String,
    /// Metric names to record; empty accepts every metric.
    pub whitelist: Vec<String>,
}
