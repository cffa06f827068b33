//! `image`-backed two-tone canvas.

use image::{GrayImage, Luma};

use super::{Color, Rect, Surface, font::CaptionFont};
use crate::error::{Code39Error, Result};

/// Two-tone raster owned by the caller once rendering finishes.
///
/// Every pixel is either 0 (black) or 255 (white).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: GrayImage,
}

impl Canvas {
    /// Allocate a white canvas.
    ///
    /// The pixel buffer is reserved fallibly; failure is reported as
    /// [`Code39Error::Allocation`] instead of aborting.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let too_large = || Code39Error::Allocation {
            width: width as u64,
            height: height as u64,
        };
        let len = usize::try_from(width as u64 * height as u64).map_err(|_| too_large())?;

        let mut buffer = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| too_large())?;
        buffer.resize(len, Color::White.luma());

        let image = GrayImage::from_raw(width, height, buffer).ok_or_else(too_large)?;
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel color, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|&Luma([v])| {
            if v < 128 { Color::Black } else { Color::White }
        })
    }

    /// One row of pixels, `true` = black. Empty outside the canvas.
    pub fn row(&self, y: u32) -> Vec<bool> {
        if y >= self.height() {
            return Vec::new();
        }
        (0..self.width())
            .map(|x| self.image.get_pixel(x, y).0[0] < 128)
            .collect()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    /// Hand the underlying image to the caller (e.g. to save or encode it).
    pub fn into_image(self) -> GrayImage {
        self.image
    }
}

impl From<Canvas> for GrayImage {
    fn from(canvas: Canvas) -> Self {
        canvas.into_image()
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x_end = rect.x.saturating_add(rect.width).min(self.image.width());
        let y_end = rect.y.saturating_add(rect.height).min(self.image.height());
        let px = Luma([color.luma()]);

        for y in rect.y..y_end {
            for x in rect.x..x_end {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    fn measure_text(&self, text: &str, font: CaptionFont) -> (u32, u32) {
        font.measure(text)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        font: CaptionFont,
        color: Color,
    ) -> Result<()> {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        let px = Luma([color.luma()]);
        let image = &mut self.image;

        font.rasterize(text, |gx, gy| {
            let (cx, cy) = (x + gx, y + gy);
            if (0..w).contains(&cx) && (0..h).contains(&cy) {
                image.put_pixel(cx as u32, cy as u32, px);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_white() {
        let canvas = Canvas::new(7, 3).unwrap();
        assert_eq!(canvas.width(), 7);
        assert_eq!(canvas.height(), 3);
        assert!(canvas.as_image().pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill_rect(Rect::new(2, 2, 10, 10), Color::Black);
        assert_eq!(canvas.get(1, 1), Some(Color::White));
        assert_eq!(canvas.get(2, 2), Some(Color::Black));
        assert_eq!(canvas.get(3, 3), Some(Color::Black));
        assert_eq!(canvas.get(4, 4), None);
    }

    #[test]
    fn test_fill_rect_white_over_black() {
        let mut canvas = Canvas::new(3, 1).unwrap();
        canvas.fill_rect(Rect::new(0, 0, 3, 1), Color::Black);
        canvas.fill_rect(Rect::new(1, 0, 1, 1), Color::White);
        assert_eq!(canvas.row(0), vec![true, false, true]);
    }

    #[test]
    fn test_row_out_of_bounds() {
        let canvas = Canvas::new(3, 1).unwrap();
        assert!(canvas.row(1).is_empty());
    }

    #[test]
    fn test_draw_text_clips_negative_origin() {
        let mut canvas = Canvas::new(10, 12).unwrap();
        canvas
            .draw_text("W", -3, 0, CaptionFont::Small, Color::Black)
            .unwrap();
        canvas
            .draw_text("W", 8, 6, CaptionFont::Small, Color::Black)
            .unwrap();
        assert!(canvas.as_image().pixels().any(|p| p.0[0] == 0));
        assert!(canvas.as_image().pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_into_image() {
        let image: GrayImage = Canvas::new(2, 2).unwrap().into();
        assert_eq!(image.dimensions(), (2, 2));
    }
}
