//! CIE L*a*b* perceptual color space
//!
//! Lab is a perceptually uniform color space: numerical differences
//! correspond roughly to perceived differences. It is used for deciding
//! which of a block's two candidate colors each pixel is closer to, and
//! for finding the color most distant from a block's dominant color.
//!
//! # References
//!
//! CIE 15:2004, Colorimetry. The distance metric is the CIE94
//! graphic-arts variant (kL=2).

use super::srgb::Srgb;

/// A color in CIE L*a*b* color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Converted from [`Srgb`] via the D65 XYZ transform. Conversion happens
/// once per palette entry at [`Palette`](crate::Palette) construction,
/// never per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

/// sRGB inverse gamma, scaled to the 0..100 range the XYZ transform expects.
#[inline]
fn gamma_expand(v: f32) -> f32 {
    let v = if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    };
    v * 100.0
}

/// XYZ -> Lab per-component nonlinearity.
///
/// Cube root above the CIE threshold, linear approximation below it
/// (avoids the cube root's infinite slope at zero).
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Srgb> for Lab {
    /// Convert from sRGB using the D65 reference white.
    ///
    /// Pipeline: inverse gamma per channel, linear RGB -> XYZ matrix,
    /// normalization by the D65 white point, then the Lab nonlinearity.
    fn from(srgb: Srgb) -> Self {
        let r = gamma_expand(srgb.r);
        let g = gamma_expand(srgb.g);
        let b = gamma_expand(srgb.b);

        let x = lab_f((r * 0.4124 + g * 0.3576 + b * 0.1805) / 95.047);
        let y = lab_f((r * 0.2126 + g * 0.7152 + b * 0.0722) / 100.0);
        let z = lab_f((r * 0.0193 + g * 0.1192 + b * 0.9505) / 108.883);

        Self {
            l: 116.0 * y - 16.0,
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Chroma magnitude `sqrt(a² + b²)`.
    ///
    /// Zero for achromatic colors (greys).
    #[inline]
    pub fn chroma(self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Perceptual distance to another color, CIE94 graphic-arts formula.
    ///
    /// Weighting functions use `self`'s chroma (the formula treats `self`
    /// as the reference color), with kL=2, kC=1, kH=1. The hue-difference
    /// radicand is clamped to zero when floating-point cancellation drives
    /// it negative.
    ///
    /// Always non-negative; exactly zero for identical coordinates.
    pub fn delta_e(self, other: Lab) -> f32 {
        const K1: f32 = 0.048;
        const K2: f32 = 0.014;
        const KL: f32 = 2.0;
        const KC: f32 = 1.0;
        const KH: f32 = 1.0;

        let c1 = self.chroma();
        let c2 = other.chroma();

        let s_l = 1.0;
        let s_c = 1.0 + K1 * c1;
        let s_h = 1.0 + K2 * c1;

        let delta_l = self.l - other.l;
        let delta_c = c1 - c2;
        let delta_a = self.a - other.a;
        let delta_b = self.b - other.b;

        let inside = delta_a * delta_a + delta_b * delta_b - delta_c * delta_c;
        let delta_h = if inside <= 0.0 { 0.0 } else { inside.sqrt() };

        let l = (delta_l / (KL * s_l)).powi(2);
        let c = (delta_c / (KC * s_c)).powi(2);
        let h = (delta_h / (KH * s_h)).powi(2);

        (l + c + h).sqrt()
    }
}
