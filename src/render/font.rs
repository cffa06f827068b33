//! Caption fonts.
//!
//! Uses the Spleen bitmap font family, so caption pixels are strictly on or
//! off and the canvas stays two-tone.

use serde::{Deserialize, Serialize};
use spleen_font::{FONT_6X12, FONT_8X16, FONT_12X24, PSF2Font};

use crate::error::{Code39Error, Result};

/// Bitmap font used for the human-readable caption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionFont {
    /// Spleen 6×12
    #[default]
    Small,
    /// Spleen 8×16
    Medium,
    /// Spleen 12×24
    Large,
}

impl CaptionFont {
    /// Glyph cell size as (width, height).
    pub const fn cell(self) -> (u32, u32) {
        match self {
            CaptionFont::Small => (6, 12),
            CaptionFont::Medium => (8, 16),
            CaptionFont::Large => (12, 24),
        }
    }

    fn data(self) -> &'static [u8] {
        match self {
            CaptionFont::Small => FONT_6X12,
            CaptionFont::Medium => FONT_8X16,
            CaptionFont::Large => FONT_12X24,
        }
    }

    /// Bounding box of `text` as (width, height). Monospaced, one cell per char.
    pub fn measure(self, text: &str) -> (u32, u32) {
        let (cw, ch) = self.cell();
        let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        (count.saturating_mul(cw), ch)
    }

    /// Visit every "on" pixel of `text` laid out from the origin.
    ///
    /// Coordinates are relative to the top-left of the first cell. Chars
    /// missing from the font leave an empty cell.
    pub fn rasterize(self, text: &str, mut plot: impl FnMut(i64, i64)) -> Result<()> {
        let mut font = PSF2Font::new(self.data())
            .map_err(|_| Code39Error::Font(format!("failed to load {:?} caption font", self)))?;
        let (cw, ch) = self.cell();
        let mut buf = [0u8; 4];

        for (i, c) in text.chars().enumerate() {
            let cell_x = i as i64 * cw as i64;
            let utf8 = c.encode_utf8(&mut buf);
            let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) else {
                continue;
            };
            // Rows may be padded to whole bytes
            for (row_y, row) in glyph.enumerate().take(ch as usize) {
                for (col_x, on) in row.enumerate().take(cw as usize) {
                    if on {
                        plot(cell_x + col_x as i64, row_y as i64);
                    }
                }
            }
        }

        Ok(())
    }
}
