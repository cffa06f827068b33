//! # Barcode
//!
//! Binds the content to its encoding, so a caption always matches the bars.

use std::fmt;
use std::str::FromStr;

use crate::error::{Code39Error, Result};
use crate::render::{self, Canvas, Layout, RenderOptions, Surface};
use crate::symbology::{self, EncodedBits};

/// An encoded Code 39 barcode.
///
/// ## Example
///
/// ```
/// use code39::{Barcode, RenderOptions};
///
/// let barcode = Barcode::new("Hello-39")?;
/// let canvas = barcode.render(40, &RenderOptions::default().padding(4))?;
/// assert_eq!(canvas.width(), barcode.len() as u32 + 8);
/// # Ok::<(), code39::Code39Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    content: String,
    bits: EncodedBits,
}

impl Barcode {
    /// Encode `content`. Case-insensitive.
    pub fn new(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        let bits = symbology::encode(&content)?;
        Ok(Self { content, bits })
    }

    /// The content as given, used for the caption.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn bits(&self) -> &EncodedBits {
        &self.bits
    }

    /// Width in units.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Never true: the sentinels are always present.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Canvas dimensions for this barcode.
    pub fn layout(&self, height: u32, options: &RenderOptions) -> Result<Layout> {
        Layout::compute(self.len(), height, options)
    }

    /// Render onto a freshly allocated [`Canvas`].
    pub fn render(&self, height: u32, options: &RenderOptions) -> Result<Canvas> {
        let layout = self.layout(height, options)?;
        let mut canvas = Canvas::new(layout.width, layout.height)?;
        render::draw(&mut canvas, self, &layout, options)?;
        Ok(canvas)
    }

    /// Render onto an existing surface. Returns the caption band height.
    ///
    /// The surface must be at least as large as [`Barcode::layout`];
    /// a smaller one is rejected with [`Code39Error::InvalidParameter`].
    /// On any error the surface is left untouched.
    pub fn render_onto<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        height: u32,
        options: &RenderOptions,
    ) -> Result<u32> {
        let layout = self.layout(height, options)?;
        render::draw(surface, self, &layout, options)
    }
}

impl FromStr for Barcode {
    type Err = Code39Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Encode `content` and render it in one step.
///
/// ```
/// use code39::{create, RenderOptions};
///
/// let canvas = create(50, "CODE39", &RenderOptions::default().include_code(true))?;
/// assert_eq!(canvas.height(), 50);
/// # Ok::<(), code39::Code39Error>(())
/// ```
pub fn create(height: u32, content: &str, options: &RenderOptions) -> Result<Canvas> {
    Barcode::new(content)?.render(height, options)
}
