//! Error types for palette construction.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// Every variant is a precondition failure reported before any pixel is
/// touched; there is no partial palette.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided
    #[error("palette cannot be empty")]
    Empty,

    /// More colors than the display's color-code table can address
    #[error("palette has {count} colors, display supports at most {max}")]
    TooManyColors {
        /// Number of colors provided
        count: usize,
        /// Display ceiling (16)
        max: usize,
    },

    /// Flat RGB buffer length is not a multiple of 3
    #[error("RGB buffer length {len} is not a multiple of 3")]
    BufferNotRgb {
        /// Length of the offending buffer
        len: usize,
    },

    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
