//! Error types for conversion preconditions.

use thiserror::Error;

/// Precondition failures for a conversion.
///
/// All variants are reported before any block is processed; a failed
/// conversion leaves the source image and output buffers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Image width is not a multiple of the block width (2)
    #[error("image width {width} is not a multiple of the block width 2")]
    UnalignedWidth {
        /// Offending width
        width: usize,
    },

    /// Image height is not a multiple of the block height (3)
    #[error("image height {height} is not a multiple of the block height 3")]
    UnalignedHeight {
        /// Offending height
        height: usize,
    },

    /// Image buffer length does not match width * height
    #[error("image buffer holds {actual} pixels, dimensions require {expected}")]
    ImageSizeMismatch {
        /// width * height
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },

    /// A pixel references a palette entry that does not exist
    #[error("pixel value {index} is out of range for a {palette_len}-color palette")]
    PixelOutOfRange {
        /// Offending palette index
        index: u8,
        /// Palette length
        palette_len: usize,
    },

    /// A caller-provided output buffer has the wrong size
    #[error("{buffer} buffer holds {actual} cells, block grid requires {expected}")]
    OutputSizeMismatch {
        /// Which buffer ("text", "foreground" or "background")
        buffer: &'static str,
        /// (width / 2) * (height / 3)
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },
}
