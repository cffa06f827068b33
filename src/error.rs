//! # Error Types
//!
//! This module defines the error type shared by the encoder and the renderer.

use thiserror::Error;

/// Main error type for code39 operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Code39Error {
    /// A character (after uppercasing) has no Code 39 pattern
    #[error("Unsupported character {character:?} at position {position}")]
    UnsupportedCharacter {
        /// The character as it appeared in the input
        character: char,
        /// Index of the character in the input, counted in chars
        position: usize,
    },

    /// Geometry parameter that cannot produce a drawable barcode
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Canvas dimensions that cannot be allocated
    #[error("Cannot allocate a {width}x{height} canvas")]
    Allocation { width: u64, height: u64 },

    /// Embedded bitmap font could not be loaded
    #[error("Font error: {0}")]
    Font(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Code39Error>;
