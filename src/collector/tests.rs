use std::time::Duration;

use tempfile::tempdir;

use super::*;
use crate::error::SinkError;

fn expectation(message: &'static str) -> SinkError {
    SinkError::TestExpectation { message }
}

fn float_eq(left: f64, right: f64) -> bool {
    left.to_bits() == right.to_bits()
}

#[test]
fn normalize_converts_nanoseconds_to_milliseconds() -> SinkResult<()> {
    if !float_eq(normalize_timing(Duration::from_millis(5)), 5.0) {
        return Err(expectation("5ms should normalize to 5.0"));
    }
    if !float_eq(normalize_timing(Duration::from_nanos(1_500_000)), 1.5) {
        return Err(expectation("1.5ms should keep its fraction"));
    }
    if !float_eq(normalize_timing(Duration::from_millis(1)), 1.0) {
        return Err(expectation("1ms sits exactly on the clamp boundary"));
    }
    Ok(())
}

#[test]
fn normalize_clamps_sub_millisecond_to_zero() -> SinkResult<()> {
    if !float_eq(normalize_timing(Duration::from_micros(999)), 0.0) {
        return Err(expectation("999us should clamp to 0.0"));
    }
    if !float_eq(normalize_timing(Duration::ZERO), 0.0) {
        return Err(expectation("Zero duration should stay 0.0"));
    }
    Ok(())
}

#[test]
fn whitelist_gates_metric_names() -> SinkResult<()> {
    let mut collector =
        StdoutCollector::new("", vec!["a".to_owned(), "b".to_owned()]);
    collector.timing("c", Duration::from_millis(5), &[]);
    collector.timing("a", Duration::from_millis(5), &[]);
    collector.timing("b", Duration::from_millis(5), &[]);
    if collector.store.metric_series("c").is_some() {
        return Err(expectation("Non-whitelisted metric should be dropped"));
    }
    if collector.store.metric_series("a").is_none() || collector.store.metric_series("b").is_none()
    {
        return Err(expectation("Whitelisted metrics should be recorded"));
    }
    Ok(())
}

#[test]
fn empty_whitelist_accepts_every_metric() -> SinkResult<()> {
    let mut collector = StdoutCollector::new("", vec![]);
    collector.timing("anything", Duration::from_millis(2), &["tag"]);
    if collector.store.metric_series("anything").is_none() {
        return Err(expectation("Empty whitelist should accept all"));
    }
    Ok(())
}

#[test]
fn tag_order_separates_series_through_the_collector() -> SinkResult<()> {
    let mut collector = StdoutCollector::new("", vec![]);
    collector.timing("m", Duration::from_millis(1), &["x", "y"]);
    collector.timing("m", Duration::from_millis(2), &["x", "y"]);
    collector.timing("m", Duration::from_millis(3), &["y", "x"]);
    let series = collector
        .store
        .metric_series("m")
        .ok_or_else(|| expectation("Missing metric"))?;
    let same_order = series
        .get("x,y")
        .ok_or_else(|| expectation("Missing x,y series"))?;
    if same_order.len() != 2 {
        return Err(expectation("Identical tag order should share a series"));
    }
    if series.get("y,x").map(Vec::len) != Some(1) {
        return Err(expectation("Reversed tag order should be its own series"));
    }
    Ok(())
}

#[test]
fn unsupported_kinds_are_silent_no_ops() -> SinkResult<()> {
    let mut collector = StdoutCollector::new("", vec![]);
    collector.count("m", 1.0, &[]);
    collector.gauge("m", 2.0, &[]);
    collector.histogram("m", 3.0, &[]);
    collector.inform("title", "text", &[]);
    let event = std::io::Error::other("boom");
    collector.error(&event, &[]);
    if !collector.store.is_empty() {
        return Err(expectation("Non-timing kinds must not aggregate"));
    }
    collector.close()?;
    Ok(())
}

#[test]
fn close_with_empty_store_creates_nothing() -> SinkResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("unused.svg");
    let path_str = path
        .to_str()
        .ok_or_else(|| expectation("Path was not UTF-8"))?;
    let mut collector = StdoutCollector::new(path_str, vec![]);
    collector.close()?;
    if path.exists() {
        return Err(expectation("Empty store should produce no file"));
    }
    Ok(())
}

#[test]
fn close_renders_svg_once_and_ignores_later_events() -> SinkResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("latency.svg");
    let path_str = path
        .to_str()
        .ok_or_else(|| expectation("Path was not UTF-8"))?;

    let mut collector = StdoutCollector::new(path_str, vec![]);
    collector.timing("request.duration", Duration::from_millis(12), &["get"]);
    collector.timing("request.duration", Duration::from_millis(20), &["get"]);
    collector.timing("request.duration", Duration::from_millis(7), &["post"]);
    collector.close()?;

    let metadata = std::fs::metadata(&path)?;
    if metadata.len() == 0 {
        return Err(expectation("Expected a non-empty SVG"));
    }

    collector.timing("late.metric", Duration::from_millis(5), &[]);
    if !collector.store.is_empty() {
        return Err(expectation("Closed collector should drop new samples"));
    }
    collector.close()?;
    Ok(())
}

#[test]
fn close_renders_png_destinations() -> SinkResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("latency.png");
    let path_str = path
        .to_str()
        .ok_or_else(|| expectation("Path was not UTF-8"))?;

    let mut collector = StdoutCollector::new(path_str, vec![]);
    collector.timing("db.query", Duration::from_millis(150), &[]);
    collector.close()?;

    let metadata = std::fs::metadata(&path)?;
    if metadata.len() == 0 {
        return Err(expectation("Expected a non-empty PNG"));
    }
    Ok(())
}

#[test]
fn from_config_wires_destination_and_whitelist() -> SinkResult<()> {
    let config = SinkConfig {
        destination: "charts.png".to_owned(),
        whitelist: vec!["request.duration".to_owned()],
    };
    let mut collector = StdoutCollector::from_config(&config);
    collector.timing("other.metric", Duration::from_millis(3), &[]);
    if !collector.store.is_empty() {
        return Err(expectation("Config whitelist should gate ingestion"));
    }
    if collector.destination != Destination::Raster("charts.png".to_owned()) {
        return Err(expectation("Config destination should select raster"));
    }
    Ok(())
}
