//! block-blit: two-color glyph-cell quantization for character displays
//!
//! This library converts a palette-indexed raster image into the three
//! parallel buffers a `blit`-style character terminal consumes: glyph
//! ids, foreground color codes, and background color codes. The target
//! display draws nothing but fixed glyph cells, each covering a 2x3
//! pixel block and each limited to two colors from a shared palette of
//! at most 16 entries. For every block the pipeline picks the best
//! two-color approximation and the glyph whose on/off pattern most
//! closely reproduces the block's true layout.
//!
//! # Quick Start
//!
//! [`BlitEncoder`] is the primary entry point:
//!
//! ```
//! use block_blit::{BlitEncoder, Palette, Srgb};
//!
//! let palette = Palette::new(&[
//!     Srgb::from_u8(0, 0, 0),
//!     Srgb::from_u8(255, 255, 255),
//! ]).unwrap();
//! let encoder = BlitEncoder::new(palette);
//!
//! // A 2x3 image is exactly one glyph cell.
//! let mut image = vec![1u8, 0, 1, 0, 1, 1];
//! let frame = encoder.encode(&mut image, 2, 3).unwrap();
//!
//! assert_eq!(frame.cols(), 1);
//! assert!(frame.text()[0] >= 128 && frame.text()[0] <= 159);
//! ```
//!
//! The source image is an already-quantized palette index buffer; image
//! decoding, palette construction and transport to the display are the
//! caller's business. Note that encoding **rewrites the image in place**
//! with each block's two chosen colors.
//!
//! # Pipeline Overview
//!
//! ```text
//! RGB palette (<=16 colors)
//!     |
//!     v
//! Lab palette              (sRGB -> XYZ -> L*a*b*, once per palette)
//!     |
//!     v
//! ╔══════════════════════════════════════════════╗
//! ║  Block loop (2x3 blocks, row-major order)    ║
//! ║                                              ║
//! ║  dominant color     (candidate-count scan)   ║
//! ║      |                                       ║
//! ║  contrasting color  (max CIE94 distance)     ║
//! ║      |                                       ║
//! ║  classify + rewrite each pixel (CIE94)       ║
//! ║      |                                       ║
//! ║  glyph id + invert flag (5-bit pattern)      ║
//! ╚══════════════════════════════════════════════╝
//!     |
//!     v
//! BlitFrame: text / fg / bg buffers, one byte per cell
//! ```
//!
//! # Color Science
//!
//! All color comparisons happen in CIE L*a*b* with the CIE94
//! graphic-arts distance (kL=2). Computing distances in raw RGB
//! over-weights differences the eye barely sees and under-weights ones
//! it does; on a 16-color palette that routinely picks the wrong
//! "contrasting" color for a block. The Lab conversion runs once per
//! palette entry at [`Palette`] construction, so the per-pixel work is
//! two table lookups and a handful of multiplications.
//!
//! The per-block color selection is deliberately approximate: the
//! dominant color comes from a Boyer-Moore-style counting pass that does
//! not guarantee a true mode for six pixels. That trade-off is part of
//! the output contract -- see [`block::dominant_color`].
//!
//! # Concurrency
//!
//! The conversion is one synchronous pass. Each block touches only its
//! own six pixels and one output slot, and the palette is read-only, so
//! the loop is trivially data-parallel; the implementation keeps it
//! sequential and leaves dispatch strategy to callers with bigger
//! frames than a terminal's.

pub mod api;
pub mod block;
pub mod color;
pub mod convert;
pub mod output;
pub mod palette;


pub use api::{BlitEncoder, BlitError};
pub use block::{Glyph, BLOCK_CELLS, BLOCK_HEIGHT, BLOCK_WIDTH};
pub use color::{Lab, Srgb};
pub use convert::EncodeError;
pub use output::BlitFrame;
pub use palette::{Palette, PaletteError, ParseColorError, MAX_COLORS};
