//! Fixed series palette and shared chart styling.
//!
//! Palette values follow the Sunlight Foundation data-viz style guide: a
//! lighter fill tone paired with a matching darker line tone per slot.
//! The tables are process-wide constants and never mutated.

pub type Rgb = (u8, u8, u8);

pub(crate) const FONT_FAMILY_TITLE: &str = "monospace";
pub(crate) const TITLE_FONT_SIZE: i32 = 20;
pub(crate) const LEGEND_FONT_SIZE: i32 = 11;

pub(crate) const COLOUR_MAIN: Rgb = (0x63, 0x5F, 0x5D);

pub(crate) const SERIES_FILL: [Rgb; 10] = [
    (0x33, 0xB6, 0xD0),
    (0xF2, 0xDA, 0x57),
    (0xB3, 0x96, 0xAD),
    (0x7A, 0xBF, 0xCC),
    (0xF6, 0xB6, 0x56),
    (0xE2, 0x5A, 0x42),
    (0xA0, 0xB7, 0x00),
    (0xDC, 0xBD, 0xCF),
    (0xC8, 0xD7, 0xA1),
    (0xB0, 0xCB, 0xDB),
];

pub(crate) const SERIES_LINE: [Rgb; 10] = [
    (0x42, 0xA5, 0xB3),
    (0xE3, 0xBA, 0x22),
    (0x8E, 0x6C, 0x8A),
    (0x0F, 0x8C, 0x79),
    (0xE5, 0x84, 0x29),
    (0xBD, 0x2D, 0x28),
    (0x5C, 0x81, 0x00),
    (0xD1, 0x5A, 0x86),
    (0x6B, 0x99, 0xA1),
    (0x6B, 0xBB, 0xA1),
];

/// Fill and line colours for the series at `index`, cycling through the
/// ten palette slots.
#[must_use]
pub fn colour_for_index(index: usize) -> (Rgb, Rgb) {
    let slot = index.checked_rem(SERIES_FILL.len()).unwrap_or(0);
    (
        SERIES_FILL.get(slot).copied().unwrap_or(COLOUR_MAIN),
        SERIES_LINE.get(slot).copied().unwrap_or(COLOUR_MAIN),
    )
}
