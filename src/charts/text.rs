//! Text backend: fixed-size ASCII histogram panels.

use std::io::Write;

use crate::error::RenderError;

use super::spec::{HistogramSpec, X_AXIS_LABEL, Y_AXIS_LABEL, format_time_tick};

pub(crate) const TEXT_WIDTH: usize = 100;
pub(crate) const TEXT_HEIGHT: usize = 40;
const TICK_COLUMN: usize = 9;
const BAR_COLUMN: usize = 60;

/// Render every histogram to `out` as fixed 100x40 character panels, one
/// per metric in first-seen order, each preceded by a divider line.
/// Content past the panel height is clipped, like a fixed text canvas.
pub(crate) fn render_text<W: Write>(
    specs: &[HistogramSpec<'_>],
    out: &mut W,
) -> Result<(), RenderError> {
    for spec in specs {
        for line in panel_lines(spec) {
            writeln!(out, "{line}").map_err(|err| RenderError::WriteText { source: err })?;
        }
    }
    Ok(())
}

fn panel_lines(spec: &HistogramSpec<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(TEXT_HEIGHT);
    lines.push("-".repeat(TEXT_WIDTH));
    lines.push(String::new());
    lines.push(clip(spec.title.to_owned()));
    lines.push(clip(format!("{Y_AXIS_LABEL} by {X_AXIS_LABEL}")));
    let max_count = spec.max_count().max(1);
    for series in &spec.series {
        if lines.len() >= TEXT_HEIGHT {
            break;
        }
        lines.push(clip(format!("  {}", series.key)));
        for (bucket, count) in spec.grid.counts(series.samples).iter().enumerate() {
            if lines.len() >= TEXT_HEIGHT {
                break;
            }
            let tick = format_time_tick(spec.grid.lower_edge(bucket));
            lines.push(clip(format!(
                "{tick:>tick_width$} |{bar:<bar_width$}| {count}",
                bar = bar(*count, max_count),
                tick_width = TICK_COLUMN,
                bar_width = BAR_COLUMN,
            )));
        }
    }
    lines
}

fn bar(count: u64, max_count: u64) -> String {
    if count == 0 {
        return String::new();
    }
    let scaled = count
        .saturating_mul(BAR_COLUMN as u64)
        .checked_div(max_count)
        .unwrap_or(0);
    let length = usize::try_from(scaled)
        .unwrap_or(BAR_COLUMN)
        .clamp(1, BAR_COLUMN);
    "#".repeat(length)
}

fn clip(line: String) -> String {
    if line.len() > TEXT_WIDTH {
        line.chars().take(TEXT_WIDTH).collect()
    } else {
        line
    }
}
