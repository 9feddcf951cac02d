//! Packed RGB <-> RGB vector conversion.

use pix_core::{pack_rgb, unpack_rgb, PackedRgb};
use pix_math::ColorVector;

/// Perceptual luma weights (ITU-R BT.601): R, G, B.
pub const LUMA_WEIGHTS: ColorVector = ColorVector::new(0.299, 0.587, 0.114);

/// Decodes a packed color into a normalized RGB vector.
///
/// ```rust
/// use pix_color::to_vector;
///
/// let v = to_vector(0xFF0000);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v.y, 0.0);
/// ```
#[inline]
pub fn to_vector(rgb: PackedRgb) -> ColorVector {
    let [r, g, b] = unpack_rgb(rgb);
    ColorVector::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Quantizes one normalized component to 8 bits.
///
/// Clamps to [0, 1], then rounds half up: `floor(v * 255 + 0.5)`.
/// NaN maps to 0.
#[inline]
pub fn quantize8(v: f32) -> u8 {
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    (v * 255.0 + 0.5).floor() as u8
}

/// Encodes an RGB vector as a packed color, clamping each channel.
///
/// ```rust
/// use pix_color::to_packed_rgb;
/// use pix_math::ColorVector;
///
/// assert_eq!(to_packed_rgb(ColorVector::new(2.0, -1.0, 0.5)), 0xFF0080);
/// ```
#[inline]
pub fn to_packed_rgb(v: ColorVector) -> PackedRgb {
    pack_rgb(quantize8(v.x), quantize8(v.y), quantize8(v.z))
}

/// Luma of an RGB vector: `dot(v, LUMA_WEIGHTS)`.
#[inline]
pub fn luminance(v: ColorVector) -> f32 {
    v.dot(LUMA_WEIGHTS)
}
