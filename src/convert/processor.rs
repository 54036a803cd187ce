//! The block processor: walks the image block by block and fills the
//! three parallel output buffers.

use super::error::EncodeError;
use crate::block::{
    contrasting_color, dominant_color, encode_glyph, BLOCK_CELLS, BLOCK_HEIGHT, BLOCK_WIDTH,
};
use crate::palette::Palette;

/// Linear index of pixel (x, y) in a row-major image of the given width.
#[inline]
const fn pixel_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Check every conversion precondition against the source image.
///
/// Runs before any pixel is read or written, so a failing conversion has
/// no side effects. The out-of-range scan is O(pixels) but branch-light;
/// it replaces what would otherwise surface as a panic mid-conversion.
pub(crate) fn validate_image(
    image: &[u8],
    width: usize,
    height: usize,
    palette: &Palette,
) -> Result<(), EncodeError> {
    if width % BLOCK_WIDTH != 0 {
        return Err(EncodeError::UnalignedWidth { width });
    }
    if height % BLOCK_HEIGHT != 0 {
        return Err(EncodeError::UnalignedHeight { height });
    }
    let expected = width * height;
    if image.len() != expected {
        return Err(EncodeError::ImageSizeMismatch {
            expected,
            actual: image.len(),
        });
    }

    let palette_len = palette.len();
    if let Some(&index) = image.iter().find(|&&p| (p as usize) >= palette_len) {
        return Err(EncodeError::PixelOutOfRange { index, palette_len });
    }

    Ok(())
}

/// Process every block of a validated image.
///
/// For each 2x3 block, in row-major block order:
/// 1. gather the six palette indices,
/// 2. select the dominant and contrasting colors,
/// 3. classify each pixel against the two (ties go to the contrasting
///    color, the strict `<` comparison) and rewrite it in place,
/// 4. encode the glyph, swapping color roles when it flags `invert`,
/// 5. write glyph id and the two color codes at the block's linear slot.
///
/// Callers must have run [`validate_image`] and sized the output buffers
/// to `(width / 2) * (height / 3)`; this function indexes on that basis.
///
/// Each block reads and writes only its own six pixels and its own output
/// slot; the palette is read-only. Blocks are processed sequentially.
pub(crate) fn process_blocks(
    image: &mut [u8],
    width: usize,
    height: usize,
    palette: &Palette,
    text: &mut [u8],
    fg: &mut [u8],
    bg: &mut [u8],
) {
    let mut out = 0usize;

    for block_y in (0..height).step_by(BLOCK_HEIGHT) {
        for block_x in (0..width).step_by(BLOCK_WIDTH) {
            let mut cells = [0u8; BLOCK_CELLS];
            let mut cell = 0;
            for dy in 0..BLOCK_HEIGHT {
                for dx in 0..BLOCK_WIDTH {
                    cells[cell] = image[pixel_index(block_x + dx, block_y + dy, width)];
                    cell += 1;
                }
            }

            let mut dominant = dominant_color(&cells);
            let mut contrasting = contrasting_color(&cells, dominant, palette);

            // Binarize the block: every pixel snaps to whichever of the
            // two selected colors it is perceptually closer to. The
            // rewrite is the documented lossy side effect on the image.
            let mut classes = [false; BLOCK_CELLS];
            let mut cell = 0;
            for dy in 0..BLOCK_HEIGHT {
                for dx in 0..BLOCK_WIDTH {
                    let p = pixel_index(block_x + dx, block_y + dy, width);
                    let to_dominant = palette.distance(image[p], dominant);
                    let to_contrasting = palette.distance(image[p], contrasting);
                    let is_dominant = to_dominant < to_contrasting;

                    classes[cell] = is_dominant;
                    image[p] = if is_dominant { dominant } else { contrasting };
                    cell += 1;
                }
            }

            let glyph = encode_glyph(classes);
            if glyph.invert {
                std::mem::swap(&mut dominant, &mut contrasting);
            }

            text[out] = glyph.id;
            fg[out] = palette.color_code(dominant as usize);
            bg[out] = palette.color_code(contrasting as usize);
            out += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;
    use pretty_assertions::assert_eq;

    fn bw() -> Palette {
        Palette::new(&[Srgb::from_u8(0, 0, 0), Srgb::from_u8(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_validate_alignment() {
        let palette = bw();
        assert_eq!(
            validate_image(&[0; 9], 3, 3, &palette),
            Err(EncodeError::UnalignedWidth { width: 3 })
        );
        assert_eq!(
            validate_image(&[0; 8], 2, 4, &palette),
            Err(EncodeError::UnalignedHeight { height: 4 })
        );
        assert_eq!(validate_image(&[0; 6], 2, 3, &palette), Ok(()));
    }

    #[test]
    fn test_validate_buffer_size() {
        let palette = bw();
        assert_eq!(
            validate_image(&[0; 5], 2, 3, &palette),
            Err(EncodeError::ImageSizeMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_validate_pixel_range() {
        let palette = bw();
        assert_eq!(
            validate_image(&[0, 0, 2, 0, 0, 0], 2, 3, &palette),
            Err(EncodeError::PixelOutOfRange {
                index: 2,
                palette_len: 2
            })
        );
    }

    #[test]
    fn test_uniform_block() {
        let palette = bw();
        let mut image = [1u8; 6];
        let (mut text, mut fg, mut bg) = ([0u8; 1], [0u8; 1], [0u8; 1]);

        process_blocks(&mut image, 2, 3, &palette, &mut text, &mut fg, &mut bg);

        // One color only: empty pattern, no inversion, fg == bg.
        assert_eq!(text, [128]);
        assert_eq!(fg, [b'1']);
        assert_eq!(bg, [b'1']);
        assert_eq!(image, [1; 6]);
    }

    #[test]
    fn test_single_block_scenario() {
        let palette = bw();
        // Row-major 2x3: four white pixels, two black.
        let mut image = [1u8, 0, 1, 0, 1, 1];
        let (mut text, mut fg, mut bg) = ([0u8; 1], [0u8; 1], [0u8; 1]);

        process_blocks(&mut image, 2, 3, &palette, &mut text, &mut fg, &mut bg);

        // Dominant is white (index 1), contrasting black. The anchor cell
        // (1, 2) is white, so the glyph inverts: complemented bits at
        // weights 2 and 8 give id 138 with roles swapped.
        assert_eq!(text, [138]);
        assert_eq!(fg, [b'0']);
        assert_eq!(bg, [b'1']);
        // Already two-color: binarization leaves the pixels unchanged.
        assert_eq!(image, [1, 0, 1, 0, 1, 1]);
    }

    #[test]
    fn test_block_order_and_output_slots() {
        let palette = bw();
        // 4x3 = two blocks side by side: left all black, right all white.
        #[rustfmt::skip]
        let mut image = [
            0u8, 0, 1, 1,
            0,   0, 1, 1,
            0,   0, 1, 1,
        ];
        let (mut text, mut fg, mut bg) = ([0u8; 2], [0u8; 2], [0u8; 2]);

        process_blocks(&mut image, 4, 3, &palette, &mut text, &mut fg, &mut bg);

        assert_eq!(text, [128, 128]);
        assert_eq!(fg, [b'0', b'1']);
        assert_eq!(bg, [b'0', b'1']);
    }

    #[test]
    fn test_block_binarized_to_two_colors() {
        let palette = Palette::new(&[
            Srgb::from_u8(0, 0, 0),
            Srgb::from_u8(255, 255, 255),
            Srgb::from_u8(120, 120, 120),
        ])
        .unwrap();
        // Mostly black with one white and one mid-grey pixel: the grey
        // must snap to one of the two selected colors.
        let mut image = [0u8, 0, 2, 0, 1, 0];
        let (mut text, mut fg, mut bg) = ([0u8; 1], [0u8; 1], [0u8; 1]);

        process_blocks(&mut image, 2, 3, &palette, &mut text, &mut fg, &mut bg);

        for &pixel in &image {
            assert!(pixel == 0 || pixel == 1, "pixel {pixel} not binarized");
        }
    }
}
