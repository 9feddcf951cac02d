//! Ready-made color functions for the mappers.
//!
//! RGB functions plug into [`map_unary`](crate::mapper::map_unary), HSV
//! functions into [`map_unary_hsv`](crate::mapper::map_unary_hsv), and
//! [`BlendMode`] into [`map_binary`](crate::mapper::map_binary) through
//! [`blend`].
//!
//! # Example
//!
//! ```rust
//! use pix_core::RgbImage;
//! use pix_ops::adjust::{blend, grayscale, hue_shift, BlendMode};
//! use pix_ops::mapper::{map_unary, map_unary_hsv};
//!
//! let img = RgbImage::filled(2, 2, 0xFF0000);
//! let gray = map_unary(&img, grayscale);
//! assert_eq!(gray.pixel(0, 0), 0x4C4C4C);
//!
//! let green = map_unary_hsv(&img, hue_shift(1.0 / 3.0));
//! assert_eq!(green.pixel(0, 0), 0x00FF00);
//!
//! let diff = blend(&img, &green, BlendMode::Difference);
//! assert_eq!(diff.pixel(0, 0), 0xFFFF00);
//! ```

use crate::mapper::map_binary;
use pix_color::luminance;
use pix_core::RgbImage;
use pix_math::ColorVector;
use std::fmt;
use std::str::FromStr;

/// Replaces every channel with the pixel's luma.
#[inline]
pub fn grayscale(c: ColorVector) -> ColorVector {
    ColorVector::splat(luminance(c))
}

/// Photographic negative.
#[inline]
pub fn invert(c: ColorVector) -> ColorVector {
    ColorVector::ONE - c
}

/// Scales all channels by `k`.
pub fn brightness(k: f32) -> impl Fn(ColorVector) -> ColorVector + Sync + Copy {
    move |c| c * k
}

/// White where luma is at least `t`, black elsewhere.
pub fn threshold(t: f32) -> impl Fn(ColorVector) -> ColorVector + Sync + Copy {
    move |c| {
        if luminance(c) >= t {
            ColorVector::ONE
        } else {
            ColorVector::ZERO
        }
    }
}

/// HSV function scaling saturation by `k`.
pub fn saturate(k: f32) -> impl Fn(ColorVector) -> ColorVector + Sync + Copy {
    move |hsv| ColorVector::new(hsv.x, hsv.y * k, hsv.z)
}

/// HSV function rotating hue by `d` turns.
pub fn hue_shift(d: f32) -> impl Fn(ColorVector) -> ColorVector + Sync + Copy {
    move |hsv| ColorVector::new(hsv.x + d, hsv.y, hsv.z)
}

/// Per-pixel combination of two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Mean of both colors.
    #[default]
    Average,
    /// Absolute difference.
    Difference,
    /// Product (darken).
    Multiply,
    /// Sum (linear dodge).
    Add,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 4] = [Self::Average, Self::Difference, Self::Multiply, Self::Add];

    /// Combines two RGB vectors. The result is not clamped.
    #[inline]
    pub fn apply(self, a: ColorVector, b: ColorVector) -> ColorVector {
        match self {
            Self::Average => (a + b) * 0.5,
            Self::Difference => (a - b).abs(),
            Self::Multiply => a * b,
            Self::Add => a + b,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Difference => "difference",
            Self::Multiply => "multiply",
            Self::Add => "add",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown blend mode '{}'", s))
    }
}

/// Blends the overlapping region of two images.
pub fn blend(a: &RgbImage, b: &RgbImage, mode: BlendMode) -> RgbImage {
    map_binary(a, b, |x, y| mode.apply(x, y))
}
