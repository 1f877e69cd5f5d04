//! One histogram panel drawn onto a plotters drawing area, shared by the
//! SVG and raster backends.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::RenderError;

use super::palette::{COLOUR_MAIN, FONT_FAMILY_TITLE, LEGEND_FONT_SIZE, Rgb, TITLE_FONT_SIZE, colour_for_index};
use super::spec::{HistogramSpec, X_AXIS_LABEL, Y_AXIS_LABEL, format_frequency_tick, format_time_tick};

// 100x40 character canvas at the x10 pixel scale.
pub(crate) const PANEL_WIDTH: u32 = 1000;
pub(crate) const PANEL_HEIGHT: u32 = 400;

const fn rgb(colour: Rgb) -> RGBColor {
    RGBColor(colour.0, colour.1, colour.2)
}

/// Paint one histogram: unstacked side-by-side frequency bars per series,
/// tight axes anchored at zero, sorted-series legend in a single column.
pub(crate) fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    spec: &HistogramSpec<'_>,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let x_max = spec.grid.upper_edge();
    let max_count = spec.max_count().max(1);
    let y_max = max_count as f64;
    let y_ticks = usize::try_from(max_count.min(10)).unwrap_or(10).max(1);

    let title_font = (FONT_FAMILY_TITLE, TITLE_FONT_SIZE)
        .into_font()
        .color(&rgb(COLOUR_MAIN));
    let mut chart = ChartBuilder::on(area)
        .caption(spec.title, title_font)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|err| RenderError::draw("build histogram chart", err))?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_labels(10)
        .y_labels(y_ticks)
        .x_label_formatter(&|value| format_time_tick(*value))
        .y_label_formatter(&|value| format_frequency_tick(*value))
        .draw()
        .map_err(|err| RenderError::draw("draw histogram mesh", err))?;

    let series_count = spec.series.len().max(1);
    let slot = spec.grid.width() / series_count as f64;

    for (ordinal, series) in spec.series.iter().enumerate() {
        let (fill, line) = series
            .style
            .map_or_else(|| colour_for_index(ordinal), |style| (style.fill, style.line));
        let line_width = series.style.map_or(1, |style| style.line_width);
        let fill_colour = rgb(fill);
        let line_colour = rgb(line);

        let offset = slot * ordinal as f64;
        let bars: Vec<(f64, f64, f64)> = spec
            .grid
            .counts(series.samples)
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(bucket, count)| {
                let lower = spec.grid.lower_edge(bucket) + offset;
                (lower, lower + slot, *count as f64)
            })
            .collect();

        chart
            .draw_series(bars.iter().map(|&(x0, x1, count)| {
                Rectangle::new([(x0, 0.0), (x1, count)], fill_colour.filled())
            }))
            .map_err(|err| RenderError::draw("draw series bars", err))?
            .label(series.key)
            .legend(move |(x, y)| {
                Rectangle::new(
                    [
                        (x, y.saturating_sub(5)),
                        (x.saturating_add(10), y.saturating_add(5)),
                    ],
                    fill_colour.filled(),
                )
            });

        chart
            .draw_series(bars.iter().map(|&(x0, x1, count)| {
                Rectangle::new([(x0, 0.0), (x1, count)], line_colour.stroke_width(line_width))
            }))
            .map_err(|err| RenderError::draw("draw series outlines", err))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(
            (FONT_FAMILY_TITLE, LEGEND_FONT_SIZE)
                .into_font()
                .color(&rgb(COLOUR_MAIN)),
        )
        .border_style(rgb(COLOUR_MAIN))
        .draw()
        .map_err(|err| RenderError::draw("draw histogram legend", err))?;

    Ok(())
}
