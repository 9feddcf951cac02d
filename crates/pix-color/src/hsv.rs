//! RGB <-> HSV conversion.
//!
//! All three HSV components are normalized to [0, 1]. Hue is a fraction of a
//! full turn: 0 is red, 1/3 green, 2/3 blue.
//!
//! Hue is never clamped when encoding. [`from_hsv`] wraps it modulo 1, so a
//! hue pushed slightly past 1 (or below 0) by arithmetic lands back on the
//! color wheel instead of saturating at red.

use crate::convert::to_packed_rgb;
use pix_core::{unpack_rgb, PackedRgb};
use pix_math::ColorVector;

/// Converts a packed color to HSV.
///
/// Achromatic colors (r == g == b) get hue 0 and saturation 0.
///
/// ```rust
/// use pix_color::to_hsv;
///
/// let hsv = to_hsv(0x00FF00);
/// assert!((hsv.x - 1.0 / 3.0).abs() < 1e-6);
/// assert_eq!(hsv.y, 1.0);
/// assert_eq!(hsv.z, 1.0);
/// ```
pub fn to_hsv(rgb: PackedRgb) -> ColorVector {
    let [r, g, b] = unpack_rgb(rgb).map(i32::from);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let value = max as f32 / 255.0;
    let saturation = if max != 0 {
        (max - min) as f32 / max as f32
    } else {
        0.0
    };

    let hue = if saturation == 0.0 {
        0.0
    } else {
        let delta = (max - min) as f32;
        let rc = (max - r) as f32 / delta;
        let gc = (max - g) as f32 / delta;
        let bc = (max - b) as f32 / delta;
        let sextant = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        let h = sextant / 6.0;
        if h < 0.0 { h + 1.0 } else { h }
    };

    ColorVector::new(hue, saturation, value)
}

/// Converts an HSV vector to an RGB vector.
///
/// Saturation and value are clamped to [0, 1]; hue wraps modulo 1.
pub fn from_hsv(hsv: ColorVector) -> ColorVector {
    let s = hsv.y.clamp(0.0, 1.0);
    let v = hsv.z.clamp(0.0, 1.0);
    if s == 0.0 {
        return ColorVector::splat(v);
    }

    let h = (hsv.x - hsv.x.floor()) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    // h - floor(h) can round up to exactly 1.0 for tiny negative hues
    match (sector as i32).rem_euclid(6) {
        0 => ColorVector::new(v, t, p),
        1 => ColorVector::new(q, v, p),
        2 => ColorVector::new(p, v, t),
        3 => ColorVector::new(p, q, v),
        4 => ColorVector::new(t, p, v),
        _ => ColorVector::new(v, p, q),
    }
}

/// Encodes an HSV vector straight to a packed color.
#[inline]
pub fn hsv_to_packed(hsv: ColorVector) -> PackedRgb {
    to_packed_rgb(from_hsv(hsv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{to_vector, vectors_approx_eq, DEFAULT_EPSILON};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        let red = to_hsv(0xFF0000);
        assert_eq!(red, ColorVector::new(0.0, 1.0, 1.0));

        let blue = to_hsv(0x0000FF);
        assert_abs_diff_eq!(blue.x, 2.0 / 3.0, epsilon = 1e-6);

        let magenta = to_hsv(0xFF00FF);
        assert_abs_diff_eq!(magenta.x, 5.0 / 6.0, epsilon = 1e-6);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(to_hsv(0x000000), ColorVector::ZERO);
        let gray = to_hsv(0x808080);
        assert_eq!(gray.x, 0.0);
        assert_eq!(gray.y, 0.0);
        assert_abs_diff_eq!(gray.z, 128.0 / 255.0, epsilon = 1e-6);
        assert_eq!(hsv_to_packed(gray), 0x808080);
    }

    #[test]
    fn test_roundtrip_sampled_grid() {
        for r in (0..=255u32).step_by(15) {
            for g in (0..=255u32).step_by(17) {
                for b in (0..=255u32).step_by(51) {
                    let rgb = (r << 16) | (g << 8) | b;
                    let back = hsv_to_packed(to_hsv(rgb));
                    assert!(
                        vectors_approx_eq(to_vector(back), to_vector(rgb), DEFAULT_EPSILON),
                        "{:06X} -> {:06X}",
                        rgb,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_hue_wraps_past_one() {
        let red = ColorVector::new(1.0, 1.0, 1.0);
        assert_eq!(hsv_to_packed(red), 0xFF0000);

        let just_over = ColorVector::new(1.0 + 1.0 / 3.0, 1.0, 1.0);
        assert_eq!(hsv_to_packed(just_over), 0x00FF00);

        let negative = ColorVector::new(-1e-9, 1.0, 1.0);
        assert_eq!(hsv_to_packed(negative), 0xFF0000);
    }

    #[test]
    fn test_saturation_value_clamped() {
        let over = ColorVector::new(0.0, 3.0, 2.0);
        assert_eq!(hsv_to_packed(over), 0xFF0000);

        let under = ColorVector::new(0.5, -1.0, 0.5);
        assert_eq!(hsv_to_packed(under), 0x808080);
    }
}
