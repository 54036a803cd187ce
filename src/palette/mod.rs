//! Palette handling: precomputed Lab coordinates and display color codes.
//!
//! A [`Palette`] is built once per conversion from the quantizer's RGB
//! colors. Construction performs all sRGB -> Lab conversions and validates
//! the 16-color display ceiling, so the per-block hot path only ever does
//! table lookups.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, MAX_COLORS};
