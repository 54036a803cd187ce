//! Per-block color role selection.
//!
//! Each block gets two color roles: the *dominant* color (a fast
//! approximate mode of the six pixels) and the *contrasting* color (the
//! pixel perceptually farthest from the dominant one).

use super::BLOCK_CELLS;
use crate::palette::Palette;

/// Pick the block's dominant color by Boyer-Moore-style candidate counting.
///
/// Seeds with the first pixel at count 1, then for each subsequent pixel
/// increments on a match and decrements otherwise; when the count hits
/// zero the current pixel becomes the candidate at count 1.
///
/// This is a single O(6) pass and deliberately NOT an exact mode: when no
/// color reaches four occurrences the result depends on scan order. The
/// approximation is part of the algorithm's contract; computing the true
/// mode would change which pixels get rewritten.
pub fn dominant_color(cells: &[u8; BLOCK_CELLS]) -> u8 {
    let mut candidate = cells[0];
    let mut count = 1u8;

    for &pixel in &cells[1..] {
        if pixel == candidate {
            count += 1;
        } else {
            count -= 1;
            if count == 0 {
                candidate = pixel;
                count = 1;
            }
        }
    }

    candidate
}

/// Pick the pixel perceptually farthest from the dominant color.
///
/// Scans left to right with a strict `>` comparison, so the first maximum
/// wins. Seeded with the dominant color itself at distance zero: a block
/// of one color yields `contrasting == dominant`.
pub fn contrasting_color(cells: &[u8; BLOCK_CELLS], dominant: u8, palette: &Palette) -> u8 {
    let mut contrasting = dominant;
    let mut max_distance = 0.0f32;

    for &pixel in cells {
        let distance = palette.distance(pixel, dominant);
        if distance > max_distance {
            max_distance = distance;
            contrasting = pixel;
        }
    }

    contrasting
}
