//! Tolerance-based equality for normalized color values.

use pix_math::ColorVector;

/// One 8-bit quantization step.
pub const DEFAULT_EPSILON: f32 = 1.0 / 256.0;

/// Returns `true` if `|a - b| <= eps`.
#[inline]
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

/// Component-wise [`approx_eq`].
#[inline]
pub fn vectors_approx_eq(a: ColorVector, b: ColorVector, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}
