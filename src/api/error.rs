//! Unified error type for the block-blit public API.
//!
//! [`BlitError`] wraps the crate's error types into a single enum for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::convert::EncodeError;
use crate::palette::PaletteError;

/// Unified error type for the block-blit public API.
///
/// # Example
///
/// ```
/// use block_blit::{BlitError, Palette};
///
/// fn build_palette() -> Result<Palette, BlitError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlitError {
    /// Palette construction failed (empty, too many colors, bad buffer)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// A conversion precondition failed (alignment, sizing, pixel range)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}
