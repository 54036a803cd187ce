//! BlitFrame struct with row access and wire-packet serialization.

use crate::palette::Palette;

/// The canonical owned output of a conversion.
///
/// Holds three parallel buffers, one byte per glyph cell in row-major
/// order, along with the cell-grid dimensions and the palette used:
///
/// - **text**: glyph ids in `128..=159`
/// - **fg**: foreground color codes (`'0'..'9','a'..'f'`)
/// - **bg**: background color codes (same table)
///
/// A `blit`-style terminal draws one display line from the three
/// equal-length byte strings [`row()`](BlitFrame::row) yields.
///
/// # Example
///
/// ```
/// use block_blit::{BlitEncoder, Palette, Srgb};
///
/// let palette = Palette::new(&[
///     Srgb::from_u8(0, 0, 0),
///     Srgb::from_u8(255, 255, 255),
/// ]).unwrap();
///
/// let mut image = vec![0u8; 4 * 6]; // 4x6 pixels = 2x2 cells
/// let frame = BlitEncoder::new(palette).encode(&mut image, 4, 6).unwrap();
///
/// assert_eq!((frame.cols(), frame.rows()), (2, 2));
/// let (text, fg, bg) = frame.row(0);
/// assert_eq!(text.len(), 2);
/// assert_eq!(fg, b"00");
/// assert_eq!(bg, b"00");
/// ```
#[derive(Debug)]
pub struct BlitFrame {
    /// Glyph ids, one per cell, row-major.
    text: Vec<u8>,
    /// Foreground color codes, parallel to `text`.
    fg: Vec<u8>,
    /// Background color codes, parallel to `text`.
    bg: Vec<u8>,
    /// Grid width in cells.
    cols: usize,
    /// Grid height in cells.
    rows: usize,
    /// The palette the image was encoded against.
    palette: Palette,
}

impl BlitFrame {
    /// Create a frame from filled buffers.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that all three buffers hold exactly `cols * rows`
    /// bytes.
    pub(crate) fn new(
        text: Vec<u8>,
        fg: Vec<u8>,
        bg: Vec<u8>,
        cols: usize,
        rows: usize,
        palette: Palette,
    ) -> Self {
        debug_assert_eq!(text.len(), cols * rows);
        debug_assert_eq!(fg.len(), cols * rows);
        debug_assert_eq!(bg.len(), cols * rows);
        Self {
            text,
            fg,
            bg,
            cols,
            rows,
            palette,
        }
    }

    /// Grid width in cells (`image width / 2`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells (`image height / 3`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The glyph-id buffer, row-major.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// The foreground color-code buffer, parallel to [`text()`](Self::text).
    #[inline]
    pub fn fg(&self) -> &[u8] {
        &self.fg
    }

    /// The background color-code buffer, parallel to [`text()`](Self::text).
    #[inline]
    pub fn bg(&self) -> &[u8] {
        &self.bg
    }

    /// The palette the image was encoded against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// One display line: `(text, fg, bg)` slices of `cols()` bytes each.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    pub fn row(&self, row: usize) -> (&[u8], &[u8], &[u8]) {
        let start = row * self.cols;
        let end = start + self.cols;
        (
            &self.text[start..end],
            &self.fg[start..end],
            &self.bg[start..end],
        )
    }

    /// Serialize the frame into the streaming wire packet.
    ///
    /// Layout, all multi-byte fields little-endian:
    ///
    /// ```text
    /// [u16 palette length in bytes]
    /// [u16 cells per buffer]
    /// [u16 grid columns]
    /// [u16 grid rows]
    /// [palette R,G,B bytes]
    /// [text buffer][fg buffer][bg buffer]
    /// ```
    ///
    /// Pure serialization; the transport that carries it is out of scope.
    pub fn to_packet(&self) -> Vec<u8> {
        let palette_bytes = self.palette.rgb_bytes();
        let cells = self.text.len();

        let mut packet = Vec::with_capacity(8 + palette_bytes.len() + cells * 3);
        for field in [
            palette_bytes.len() as u16,
            cells as u16,
            self.cols as u16,
            self.rows as u16,
        ] {
            packet.extend_from_slice(&field.to_le_bytes());
        }
        packet.extend_from_slice(&palette_bytes);
        packet.extend_from_slice(&self.text);
        packet.extend_from_slice(&self.fg);
        packet.extend_from_slice(&self.bg);
        packet
    }
}
