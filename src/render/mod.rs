//! # Barcode Rasterizer
//!
//! Turns an encoded unit sequence into bars on a two-tone surface.
//!
//! ## Architecture
//!
//! ```text
//! Barcode ─→ Layout::compute ─→ Canvas::new ─→ draw ─→ Canvas
//!              (validate,          (fallible      ├─ fill white
//!               width/height)       allocation)   ├─ caption band (optional)
//!                                                 └─ one rect per unit
//! ```
//!
//! ## Geometry
//!
//! ```text
//! ├─ padding ─┼──── units × bar_width ────┼─ padding ─┤
//! │           │ █ █ ██ █ ██ █ █ ██ ██ █ █ │           │  height − band
//! │           │          CAPTION          │           │  band
//! ```
//!
//! Drawing goes through the [`Surface`] trait so the geometry can be checked
//! without a pixel buffer.

pub mod canvas;
pub mod font;

use serde::{Deserialize, Serialize};

use crate::barcode::Barcode;
use crate::error::{Code39Error, Result};

pub use canvas::Canvas;
pub use font::CaptionFont;

/// Largest canvas, in pixels, the renderer will allocate (256 MiB of Luma8).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Two-tone pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// 8-bit luma value (0 = black, 255 = white).
    pub const fn luma(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::White => 255,
        }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Drawing capabilities the renderer needs from a backend.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill `rect`, clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Bounding box of `text` in `font` as (width, height).
    fn measure_text(&self, text: &str, font: CaptionFont) -> (u32, u32);

    /// Draw `text` with its top-left corner at (x, y), clipped to the surface.
    fn draw_text(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        font: CaptionFont,
        color: Color,
    ) -> Result<()>;
}

/// Rendering options. Height is passed per call.
///
/// ## Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `padding` | 0 |
/// | `bar_width` | 1 |
/// | `include_code` | false |
/// | `caption_font` | [`CaptionFont::Small`] |
///
/// ## Example
///
/// ```
/// use code39::RenderOptions;
///
/// let options = RenderOptions::default()
///     .padding(10)
///     .bar_width(2)
///     .include_code(true);
/// assert_eq!(options.bar_width, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Horizontal margin in pixels, applied on both sides
    pub padding: u32,
    /// Pixel width of one unit
    pub bar_width: u32,
    /// Draw the content as a caption below the bars
    pub include_code: bool,
    /// Caption font
    pub caption_font: CaptionFont,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: 0,
            bar_width: 1,
            include_code: false,
            caption_font: CaptionFont::default(),
        }
    }
}

impl RenderOptions {
    /// Set the horizontal margin on each side.
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the pixel width of one unit.
    pub fn bar_width(mut self, bar_width: u32) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Enable or disable the caption.
    pub fn include_code(mut self, include_code: bool) -> Self {
        self.include_code = include_code;
        self
    }

    /// Set the caption font.
    pub fn caption_font(mut self, font: CaptionFont) -> Self {
        self.caption_font = font;
        self
    }
}

/// Validated canvas dimensions for one barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// Left edge of the first unit
    pub offset_x: u32,
    pub bar_width: u32,
}

impl Layout {
    /// Validate parameters and compute the canvas size.
    ///
    /// `width = units × bar_width + 2 × padding`. Fails with
    /// [`Code39Error::InvalidParameter`] for a zero height or bar width and
    /// [`Code39Error::Allocation`] when the canvas would be too large.
    pub fn compute(units: usize, height: u32, options: &RenderOptions) -> Result<Self> {
        if height == 0 {
            return Err(Code39Error::InvalidParameter(
                "height must be greater than 0".into(),
            ));
        }
        if options.bar_width == 0 {
            return Err(Code39Error::InvalidParameter(
                "bar width must be greater than 0".into(),
            ));
        }

        let wide = (units as u64)
            .checked_mul(options.bar_width as u64)
            .and_then(|w| w.checked_add(2 * options.padding as u64));
        let too_large = || Code39Error::Allocation {
            width: wide.unwrap_or(u64::MAX),
            height: height as u64,
        };

        let width = wide
            .and_then(|w| u32::try_from(w).ok())
            .ok_or_else(too_large)?;
        match (width as u64).checked_mul(height as u64) {
            Some(pixels) if pixels <= MAX_CANVAS_PIXELS => {}
            _ => return Err(too_large()),
        }

        log::debug!("layout {}x{} for {} units", width, height, units);
        Ok(Self {
            width,
            height,
            offset_x: options.padding,
            bar_width: options.bar_width,
        })
    }
}

/// Draw `barcode` onto `surface` using a precomputed layout.
///
/// `layout` must come from [`Barcode::layout`] for the same barcode and
/// options; a layout for a different unit count draws bars that do not match
/// its width. Fails without touching the surface when the surface is smaller
/// than the layout or the caption leaves no room for bars.
///
/// Returns the height of the caption band (0 without a caption).
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    barcode: &Barcode,
    layout: &Layout,
    options: &RenderOptions,
) -> Result<u32> {
    let (width, height) = (layout.width, layout.height);
    if surface.width() < width || surface.height() < height {
        return Err(Code39Error::InvalidParameter(format!(
            "surface {}x{} is smaller than the {}x{} barcode",
            surface.width(),
            surface.height(),
            width,
            height
        )));
    }

    let caption = if options.include_code {
        let (text_w, text_h) = surface.measure_text(barcode.content(), options.caption_font);
        if text_h >= height {
            return Err(Code39Error::InvalidParameter(format!(
                "height {} leaves no room for bars below a {}px caption",
                height, text_h
            )));
        }
        Some((text_w, text_h))
    } else {
        None
    };

    surface.fill_rect(Rect::new(0, 0, width, height), Color::White);

    let mut band = 0;
    if let Some((text_w, text_h)) = caption {
        band = text_h;

        let x = (width / 2) as i64 - (text_w / 2) as i64;
        let y = (height - band) as i64;
        log::trace!("caption {}x{} at ({}, {})", text_w, text_h, x, y);
        surface.draw_text(barcode.content(), x, y, options.caption_font, Color::Black)?;
    }

    let bar_height = height - band;
    let mut x = layout.offset_x;
    for unit in barcode.bits().units() {
        let color = if unit { Color::Black } else { Color::White };
        surface.fill_rect(Rect::new(x, 0, layout.bar_width, bar_height), color);
        x += layout.bar_width;
    }

    Ok(band)
}
