//! BlitEncoder -- the primary entry point for the crate.

use super::error::BlitError;
use crate::block::{BLOCK_HEIGHT, BLOCK_WIDTH};
use crate::convert::{process_blocks, validate_image, EncodeError};
use crate::output::BlitFrame;
use crate::palette::Palette;

/// Converts palette-indexed images into glyph/color blit buffers.
///
/// `BlitEncoder` owns the [`Palette`] (with its precomputed Lab
/// coordinates) and is reusable across frames: encoding takes `&self`,
/// so one encoder serves a whole video stream against a fixed palette.
///
/// Both encode methods **mutate the source image in place**: every pixel
/// is rewritten to whichever of its block's two selected colors it is
/// closer to. The quantized image is a deliberate secondary artifact;
/// callers that need the original must keep their own copy.
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
/// let encoder = BlitEncoder::new(palette);
///
/// let mut image = vec![1u8, 0, 1, 0, 1, 1]; // one 2x3 block
/// let frame = encoder.encode(&mut image, 2, 3).unwrap();
///
/// assert_eq!((frame.cols(), frame.rows()), (1, 1));
/// assert_eq!(frame.text(), &[138]);
/// ```
pub struct BlitEncoder {
    palette: Palette,
}

impl BlitEncoder {
    /// Create an encoder for the given palette.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The encoder's palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Encode an image into an owned [`BlitFrame`].
    ///
    /// `image` is a row-major buffer of palette indices, one byte per
    /// pixel; `width` must be a multiple of 2 and `height` a multiple
    /// of 3. The image is quantized in place as a side effect.
    ///
    /// # Errors
    ///
    /// Any [`EncodeError`] precondition failure, reported before the
    /// image is touched.
    pub fn encode(
        &self,
        image: &mut [u8],
        width: usize,
        height: usize,
    ) -> Result<BlitFrame, BlitError> {
        validate_image(image, width, height, &self.palette)?;

        let cols = width / BLOCK_WIDTH;
        let rows = height / BLOCK_HEIGHT;
        let cells = cols * rows;
        tracing::debug!(width, height, cols, rows, palette = self.palette.len(), "encoding image");

        let mut text = vec![0u8; cells];
        let mut fg = vec![0u8; cells];
        let mut bg = vec![0u8; cells];
        process_blocks(
            image,
            width,
            height,
            &self.palette,
            &mut text,
            &mut fg,
            &mut bg,
        );

        Ok(BlitFrame::new(text, fg, bg, cols, rows, self.palette.clone()))
    }

    /// Encode an image into caller-provided output buffers.
    ///
    /// The boundary contract for pre-allocated pipelines: `text`, `fg`
    /// and `bg` must each hold exactly `(width / 2) * (height / 3)`
    /// bytes. The image is quantized in place as a side effect.
    ///
    /// # Errors
    ///
    /// Any [`EncodeError`] precondition failure, including a size
    /// mismatch on any of the three output buffers. Nothing is written
    /// on error.
    pub fn encode_into(
        &self,
        image: &mut [u8],
        width: usize,
        height: usize,
        text: &mut [u8],
        fg: &mut [u8],
        bg: &mut [u8],
    ) -> Result<(), BlitError> {
        validate_image(image, width, height, &self.palette)?;

        let cells = (width / BLOCK_WIDTH) * (height / BLOCK_HEIGHT);
        for (name, buffer) in [
            ("text", &*text),
            ("foreground", &*fg),
            ("background", &*bg),
        ] {
            if buffer.len() != cells {
                tracing::trace!(buffer = name, expected = cells, actual = buffer.len(), "output buffer rejected");
                return Err(EncodeError::OutputSizeMismatch {
                    buffer: name,
                    expected: cells,
                    actual: buffer.len(),
                }
                .into());
            }
        }

        process_blocks(image, width, height, &self.palette, text, fg, bg);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;
    use pretty_assertions::assert_eq;

    fn encoder() -> BlitEncoder {
        let palette =
            Palette::new(&[Srgb::from_u8(0, 0, 0), Srgb::from_u8(255, 255, 255)]).unwrap();
        BlitEncoder::new(palette)
    }

    #[test]
    fn test_encode_and_encode_into_agree() {
        let encoder = encoder();
        let original = [1u8, 0, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0];

        let mut image = original;
        let frame = encoder.encode(&mut image, 4, 3).unwrap();

        let mut image2 = original;
        let (mut text, mut fg, mut bg) = ([0u8; 2], [0u8; 2], [0u8; 2]);
        encoder
            .encode_into(&mut image2, 4, 3, &mut text, &mut fg, &mut bg)
            .unwrap();

        assert_eq!(frame.text(), &text[..]);
        assert_eq!(frame.fg(), &fg[..]);
        assert_eq!(frame.bg(), &bg[..]);
        assert_eq!(image, image2);
    }

    #[test]
    fn test_encode_into_rejects_undersized_buffers() {
        let encoder = encoder();
        let mut image = [0u8; 12];
        let mut good = [0u8; 2];
        let mut short = [0u8; 1];

        let err = encoder
            .encode_into(&mut image, 4, 3, &mut good.clone(), &mut short, &mut good)
            .unwrap_err();
        assert_eq!(
            err,
            BlitError::Encode(EncodeError::OutputSizeMismatch {
                buffer: "foreground",
                expected: 2,
                actual: 1
            })
        );
        // Failed validation leaves the image untouched.
        assert_eq!(image, [0u8; 12]);
    }

    #[test]
    fn test_encode_rejects_unaligned_dimensions() {
        let encoder = encoder();
        let mut image = [0u8; 6];
        let err = encoder.encode(&mut image, 3, 2).unwrap_err();
        assert_eq!(
            err,
            BlitError::Encode(EncodeError::UnalignedWidth { width: 3 })
        );
    }
}
