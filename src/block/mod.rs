//! Block-level primitives: geometry, color selection, glyph encoding.
//!
//! A block is the 2-pixel-wide by 3-pixel-tall region one display glyph
//! cell covers. Everything in this module is block-local: the selector
//! looks only at a block's six palette indices, the encoder only at their
//! two-color classification.

mod glyph;
mod selector;

pub use glyph::{encode_glyph, Glyph, GLYPH_BASE};
pub use selector::{contrasting_color, dominant_color};

/// Block width in pixels.
pub const BLOCK_WIDTH: usize = 2;

/// Block height in pixels.
pub const BLOCK_HEIGHT: usize = 3;

/// Pixels per block.
pub const BLOCK_CELLS: usize = BLOCK_WIDTH * BLOCK_HEIGHT;

/// Index of cell (x, y) within a block, row-major.
#[inline]
pub(crate) const fn cell_index(x: usize, y: usize) -> usize {
    y * BLOCK_WIDTH + x
}
