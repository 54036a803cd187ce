//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between the gamma-encoded sRGB input space and the perceptual Lab space
//! used for all distance calculations.
//!
//! # Color Spaces
//!
//! - **sRGB**: The standard color space for image storage and palette
//!   definitions. Use for I/O.
//! - **Lab**: CIE L*a*b*, a perceptually uniform space. Use for comparing
//!   colors.
//!
//! # Example
//!
//! ```
//! use block_blit::{Srgb, Lab};
//!
//! // A palette entry as it arrives from the quantizer (sRGB)
//! let srgb = Srgb::from_u8(128, 64, 32);
//!
//! // Convert once, up front, for perceptual math
//! let lab = Lab::from(srgb);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod lab;
mod srgb;

pub use lab::Lab;
pub use srgb::Srgb;
