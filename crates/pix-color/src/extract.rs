//! Scalar extractors.
//!
//! Each function maps a packed color to one 8-bit channel or HSV metric in
//! `0..=255`. They are the canonical histogram mappers:
//!
//! ```rust
//! use pix_color::{hue8, red_channel8, value8};
//!
//! assert_eq!(red_channel8(0xC08040), 0xC0);
//! assert_eq!(value8(0xC08040), 0xC0);
//! assert_eq!(hue8(0x00FF00), 85);
//! ```

use crate::convert::quantize8;
use crate::hsv::to_hsv;
use pix_core::{blue, green, red, PackedRgb};

/// Red channel, 0..=255.
#[inline]
pub fn red_channel8(rgb: PackedRgb) -> i32 {
    red(rgb) as i32
}

/// Green channel, 0..=255.
#[inline]
pub fn green_channel8(rgb: PackedRgb) -> i32 {
    green(rgb) as i32
}

/// Blue channel, 0..=255.
#[inline]
pub fn blue_channel8(rgb: PackedRgb) -> i32 {
    blue(rgb) as i32
}

/// HSV hue quantized to 0..=255.
#[inline]
pub fn hue8(rgb: PackedRgb) -> i32 {
    quantize8(to_hsv(rgb).x) as i32
}

/// HSV saturation quantized to 0..=255.
#[inline]
pub fn saturation8(rgb: PackedRgb) -> i32 {
    quantize8(to_hsv(rgb).y) as i32
}

/// HSV value quantized to 0..=255.
#[inline]
pub fn value8(rgb: PackedRgb) -> i32 {
    quantize8(to_hsv(rgb).z) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = 0x123456;
        assert_eq!(red_channel8(c), 0x12);
        assert_eq!(green_channel8(c), 0x34);
        assert_eq!(blue_channel8(c), 0x56);
    }

    #[test]
    fn test_hsv_metrics_in_range() {
        for rgb in (0..=0xFF_FFFFu32).step_by(4099) {
            for f in [hue8, saturation8, value8] {
                let v = f(rgb);
                assert!((0..=255).contains(&v), "{:06X} -> {}", rgb, v);
            }
        }
    }

    #[test]
    fn test_value_is_max_channel() {
        assert_eq!(value8(0x203040), 0x40);
        assert_eq!(saturation8(0x808080), 0);
        assert_eq!(saturation8(0xFF0000), 255);
    }
}
