//! SVG backend: panels composed vertically into one in-memory document,
//! written to the destination only after the whole render succeeds.

use std::fs;

use plotters::prelude::*;

use crate::error::RenderError;

use super::panel::{PANEL_HEIGHT, PANEL_WIDTH, draw_panel};
use super::spec::HistogramSpec;

pub(crate) fn render_svg(specs: &[HistogramSpec<'_>], path: &str) -> Result<(), RenderError> {
    if specs.is_empty() {
        return Ok(());
    }
    let panels = u32::try_from(specs.len()).unwrap_or(u32::MAX);
    let height = PANEL_HEIGHT.saturating_mul(panels);
    let mut document = String::new();
    {
        let root = SVGBackend::with_string(&mut document, (PANEL_WIDTH, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|err| RenderError::draw("fill vector background", err))?;
        for (area, spec) in root.split_evenly((specs.len(), 1)).iter().zip(specs) {
            draw_panel(area, spec)?;
        }
        root.present()
            .map_err(|err| RenderError::draw("finish vector document", err))?;
    }
    persist(path, inject_title(&document, path).as_bytes())
}

/// Insert a document title right after the opening `<svg ...>` tag.
pub(crate) fn inject_title(document: &str, title: &str) -> String {
    let Some(svg_start) = document.find("<svg") else {
        return document.to_owned();
    };
    let Some(tag_end) = document.get(svg_start..).and_then(|rest| rest.find('>')) else {
        return document.to_owned();
    };
    let insert_at = svg_start.saturating_add(tag_end).saturating_add(1);
    let escaped = escape_text(title);
    let mut out = String::with_capacity(
        document
            .len()
            .saturating_add(escaped.len())
            .saturating_add("<title></title>".len()),
    );
    out.push_str(document.get(..insert_at).unwrap_or_default());
    out.push_str("<title>");
    out.push_str(&escaped);
    out.push_str("</title>");
    out.push_str(document.get(insert_at..).unwrap_or_default());
    out
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn persist(path: &str, bytes: &[u8]) -> Result<(), RenderError> {
    let staging = format!("{path}.tmp");
    fs::write(&staging, bytes).map_err(|err| RenderError::CreateOutput {
        path: path.to_owned(),
        source: err,
    })?;
    fs::rename(&staging, path).map_err(|err| {
        drop(fs::remove_file(&staging));
        RenderError::PersistOutput {
            path: path.to_owned(),
            source: err,
        }
    })
}
