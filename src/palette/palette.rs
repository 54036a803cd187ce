//! Palette struct with precomputed Lab coordinates and color-code lookup.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{Lab, Srgb};

/// Maximum number of palette entries the display can address.
///
/// The downstream protocol identifies colors by a single character drawn
/// from a 16-entry table, so this is a hard ceiling, enforced at
/// construction rather than discovered as an out-of-bounds lookup later.
pub const MAX_COLORS: usize = 16;

/// Display color codes by palette position: digits '0'-'9' then 'a'-'f'.
///
/// This is the single-character wire encoding the terminal-style blit
/// protocol uses for its 16 colors.
const COLOR_CODES: [u8; MAX_COLORS] = *b"0123456789abcdef";

/// A display palette with precomputed perceptual coordinates.
///
/// Stores the sRGB colors as provided plus their CIE L*a*b* coordinates,
/// computed once at construction. Immutable for the duration of a
/// conversion; the block processor only reads from it.
///
/// # Example
///
/// ```
/// use block_blit::{Palette, Srgb};
///
/// let palette = Palette::new(&[
///     Srgb::from_u8(0, 0, 0),
///     Srgb::from_u8(255, 255, 255),
/// ]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color_code(1), b'1');
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    srgb: Vec<Srgb>,
    lab: Vec<Lab>,
}

impl Palette {
    /// Create a palette from sRGB colors.
    ///
    /// Converts every entry to Lab up front (O(palette size), done once).
    /// Duplicate entries are allowed: quantizers routinely emit palettes
    /// with repeated colors and each index must keep its own slot.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::Empty`] when `colors` is empty
    /// - [`PaletteError::TooManyColors`] when `colors` exceeds [`MAX_COLORS`]
    pub fn new(colors: &[Srgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
                max: MAX_COLORS,
            });
        }

        let lab = colors.iter().map(|&c| Lab::from(c)).collect();
        Ok(Self {
            srgb: colors.to_vec(),
            lab,
        })
    }

    /// Create a palette from a flat `[R, G, B, R, G, B, ...]` byte buffer,
    /// the form palette-mode image decoders hand over.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::BufferNotRgb`] when the length is not a multiple of 3
    /// - plus everything [`Palette::new`] reports
    pub fn from_rgb_bytes(bytes: &[u8]) -> Result<Self, PaletteError> {
        if bytes.len() % 3 != 0 {
            return Err(PaletteError::BufferNotRgb { len: bytes.len() });
        }
        let colors: Vec<Srgb> = bytes
            .chunks_exact(3)
            .map(|c| Srgb::from_u8(c[0], c[1], c[2]))
            .collect();
        Self::new(&colors)
    }

    /// Create a palette from hex color strings (`"#RRGGBB"` or `"#RGB"`).
    ///
    /// # Example
    ///
    /// ```
    /// use block_blit::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "#fff", "#d01000"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex(hex: &[&str]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .map(|s| Srgb::from_str(s))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Number of palette entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.srgb.len()
    }

    /// Returns true if the palette has no entries (never true for a
    /// constructed palette; present for clippy's `len` convention).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.srgb.is_empty()
    }

    /// The sRGB color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn srgb(&self, index: usize) -> Srgb {
        self.srgb[index]
    }

    /// The Lab coordinates of the color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn lab(&self, index: usize) -> Lab {
        self.lab[index]
    }

    /// The display color code for palette position `index`
    /// (`'0'..'9','a'..'f'`).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn color_code(&self, index: usize) -> u8 {
        // index < len() <= MAX_COLORS, so the table access cannot miss
        // for any constructed palette.
        assert!(index < self.srgb.len());
        COLOR_CODES[index]
    }

    /// CIE94 distance between two palette entries.
    ///
    /// Short-circuits to exactly 0.0 for equal indices; this also skips
    /// the zero-chroma corner of the formula for self-comparison.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn distance(&self, i1: u8, i2: u8) -> f32 {
        if i1 == i2 {
            return 0.0;
        }
        self.lab[i1 as usize].delta_e(self.lab[i2 as usize])
    }

    /// The palette as a flat `[R, G, B, ...]` byte buffer, the layout the
    /// wire packet carries.
    pub fn rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.srgb.len() * 3);
        for color in &self.srgb {
            bytes.extend_from_slice(&color.to_bytes());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bw() -> Palette {
        Palette::new(&[Srgb::from_u8(0, 0, 0), Srgb::from_u8(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_empty_palette_rejected() {
        let err = Palette::new(&[]).unwrap_err();
        assert_eq!(err, PaletteError::Empty);
    }

    #[test]
    fn test_too_many_colors_rejected() {
        let colors: Vec<Srgb> = (0..17).map(|i| Srgb::from_u8(i as u8, 0, 0)).collect();
        let err = Palette::new(&colors).unwrap_err();
        assert_eq!(err, PaletteError::TooManyColors { count: 17, max: 16 });

        // Exactly 16 is fine
        let colors: Vec<Srgb> = (0..16).map(|i| Srgb::from_u8(i as u8, 0, 0)).collect();
        assert!(Palette::new(&colors).is_ok());
    }

    #[test]
    fn test_from_rgb_bytes() {
        let palette = Palette::from_rgb_bytes(&[0, 0, 0, 255, 255, 255, 255, 0, 0]).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.srgb(2), Srgb::from_u8(255, 0, 0));

        let err = Palette::from_rgb_bytes(&[0, 0, 0, 255]).unwrap_err();
        assert_eq!(err, PaletteError::BufferNotRgb { len: 4 });
    }

    #[test]
    fn test_duplicates_allowed() {
        // Quantizer output often repeats colors; each index keeps its slot.
        let palette =
            Palette::new(&[Srgb::from_u8(0, 0, 0), Srgb::from_u8(0, 0, 0)]).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.distance(0, 1), 0.0);
    }

    #[test]
    fn test_color_codes() {
        let colors: Vec<Srgb> = (0..16).map(|i| Srgb::from_u8(i as u8 * 16, 0, 0)).collect();
        let palette = Palette::new(&colors).unwrap();
        let codes: Vec<u8> = (0..16).map(|i| palette.color_code(i)).collect();
        assert_eq!(codes, b"0123456789abcdef".to_vec());
    }

    #[test]
    fn test_distance_zero_on_equal_index() {
        let palette = bw();
        assert_eq!(palette.distance(0, 0), 0.0);
        assert_eq!(palette.distance(1, 1), 0.0);
        assert!(palette.distance(0, 1) > 0.0);
    }

    /// For achromatic palettes the CIE94 weighting terms collapse to 1,
    /// making the metric symmetric. The grey ramp is the worst case for
    /// the quantizers this feeds, so symmetry is worth pinning there.
    #[test]
    fn test_distance_symmetric_on_grey_ramp() {
        let colors: Vec<Srgb> = [0u8, 64, 128, 192, 255]
            .iter()
            .map(|&v| Srgb::from_u8(v, v, v))
            .collect();
        let palette = Palette::new(&colors).unwrap();
        for i in 0..palette.len() as u8 {
            for j in 0..palette.len() as u8 {
                let d_ij = palette.distance(i, j);
                let d_ji = palette.distance(j, i);
                assert!(
                    (d_ij - d_ji).abs() < 1e-3,
                    "distance({i},{j})={d_ij} vs distance({j},{i})={d_ji}"
                );
            }
        }
    }

    #[test]
    fn test_rgb_bytes_round_trip() {
        let bytes = [10u8, 20, 30, 200, 100, 50];
        let palette = Palette::from_rgb_bytes(&bytes).unwrap();
        assert_eq!(palette.rgb_bytes(), bytes.to_vec());
    }
}
