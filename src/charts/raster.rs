//! Raster backend: panels composed vertically into one PNG, staged in a
//! sibling temp file and renamed over the destination on success.

use std::fs;

use plotters::prelude::*;

use crate::error::RenderError;

use super::panel::{PANEL_HEIGHT, PANEL_WIDTH, draw_panel};
use super::spec::HistogramSpec;

pub(crate) fn render_raster(specs: &[HistogramSpec<'_>], path: &str) -> Result<(), RenderError> {
    if specs.is_empty() {
        return Ok(());
    }
    let staging = format!("{path}.tmp");
    match draw_to_file(specs, &staging) {
        Ok(()) => fs::rename(&staging, path).map_err(|err| {
            drop(fs::remove_file(&staging));
            RenderError::PersistOutput {
                path: path.to_owned(),
                source: err,
            }
        }),
        Err(err) => {
            drop(fs::remove_file(&staging));
            Err(err)
        }
    }
}

fn draw_to_file(specs: &[HistogramSpec<'_>], path: &str) -> Result<(), RenderError> {
    let panels = u32::try_from(specs.len()).unwrap_or(u32::MAX);
    let height = PANEL_HEIGHT.saturating_mul(panels);
    let root = BitMapBackend::new(path, (PANEL_WIDTH, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|err| RenderError::draw("fill raster background", err))?;
    for (area, spec) in root.split_evenly((specs.len(), 1)).iter().zip(specs) {
        draw_panel(area, spec)?;
    }
    root.present()
        .map_err(|err| RenderError::draw("encode raster output", err))?;
    Ok(())
}
