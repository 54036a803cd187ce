//! Output types for the conversion pipeline.
//!
//! This module provides [`BlitFrame`], the canonical owned output of a
//! conversion: three parallel byte buffers (glyph ids, foreground color
//! codes, background color codes) plus the palette, with per-row access
//! for `blit`-style terminal calls and a wire-packet serialization for
//! streaming transports.

mod blit_frame;

pub use blit_frame::BlitFrame;
