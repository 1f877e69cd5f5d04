//! Backend selection and the shutdown render pass.

use tracing::info;

use crate::error::SinkResult;
use crate::store::SampleStore;

use super::raster::render_raster;
use super::spec::build_histogram_specs;
use super::text::render_text;
use super::vector::render_svg;

/// Rendering target decoded from a destination descriptor string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// ASCII panels on standard output (empty descriptor or `"stdout"`).
    Stdout,
    /// One PNG file with all panels stacked vertically (`.png` suffix).
    Raster(String),
    /// One SVG document with all panels stacked vertically (anything else).
    Vector(String),
}

impl Destination {
    /// Decode `raw` case-insensitively; the original casing is kept for
    /// file creation.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let test = raw.to_lowercase();
        if test.is_empty() || test == "stdout" {
            Self::Stdout
        } else if test.ends_with(".png") {
            Self::Raster(raw.to_owned())
        } else {
            Self::Vector(raw.to_owned())
        }
    }

    #[must_use]
    pub const fn is_graphical(&self) -> bool {
        !matches!(self, Self::Stdout)
    }
}

/// Render every buffered metric to `destination`.
///
/// An empty store renders nothing and is not an error. Series are styled
/// from the palette only for graphical destinations.
///
/// # Errors
///
/// Returns an error if the destination file cannot be created or written;
/// no partial file is left visible in that case.
pub fn render_histograms(store: &SampleStore, destination: &Destination) -> SinkResult<()> {
    if store.is_empty() {
        return Ok(());
    }
    let specs = build_histogram_specs(store, destination.is_graphical());
    match destination {
        Destination::Stdout => {
            info!("Rendering {} histogram(s) to stdout", specs.len());
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            render_text(&specs, &mut lock)?;
        }
        Destination::Raster(path) => {
            info!("Rendering {} histogram(s) to raster file '{}'", specs.len(), path);
            render_raster(&specs, path)?;
        }
        Destination::Vector(path) => {
            info!("Rendering {} histogram(s) to SVG file '{}'", specs.len(), path);
            render_svg(&specs, path)?;
        }
    }
    Ok(())
}
