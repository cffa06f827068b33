//! # code39 - Code 39 Barcode Rasterizer
//!
//! Encodes text as a Code 39 linear barcode and renders it to a two-tone
//! raster image. It provides:
//!
//! - **Symbology**: the 43-character alphabet and start/stop sentinel
//! - **Rendering**: bar geometry with optional human-readable caption
//! - **Canvas**: an `image::GrayImage` holding only black and white pixels
//!
//! ## Quick Start
//!
//! ```
//! use code39::{create, RenderOptions};
//!
//! let options = RenderOptions::default()
//!     .padding(10)
//!     .bar_width(2)
//!     .include_code(true);
//!
//! let canvas = create(60, "CODE39", &options)?;
//! let image = canvas.into_image(); // save or encode as needed
//! assert_eq!(image.height(), 60);
//!
//! # Ok::<(), code39::Code39Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbology`] | Alphabet table and encoder |
//! | [`render`] | Layout, drawing surface trait, canvas, caption fonts |
//! | [`barcode`] | Content bound to its encoding, one-step `create` |
//! | [`error`] | Error types |

pub mod barcode;
pub mod error;
pub mod render;
pub mod symbology;

// Re-exports for convenience
pub use barcode::{Barcode, create};
pub use error::{Code39Error, Result};
pub use render::{Canvas, CaptionFont, Color, Layout, Rect, RenderOptions, Surface};
pub use symbology::{EncodedBits, encode};
