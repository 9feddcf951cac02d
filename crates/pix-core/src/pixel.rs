//! Packed 24-bit RGB colors.
//!
//! A [`PackedRgb`] stores one color as `0x00RRGGBB`. The top byte is ignored
//! everywhere: codecs may leave alpha there and the engines never read it.

/// A 24-bit color packed as `0x00RRGGBB`.
pub type PackedRgb = u32;

/// Black (`0x000000`).
pub const BLACK: PackedRgb = 0x000000;

/// White (`0xFFFFFF`).
pub const WHITE: PackedRgb = 0xFFFFFF;

/// Mask selecting the 24 color bits.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Packs three 8-bit channels.
///
/// ```rust
/// use pix_core::pack_rgb;
///
/// assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x123456);
/// ```
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> PackedRgb {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Splits a packed color into `[r, g, b]`.
#[inline]
pub const fn unpack_rgb(rgb: PackedRgb) -> [u8; 3] {
    [red(rgb), green(rgb), blue(rgb)]
}

/// Red channel.
#[inline]
pub const fn red(rgb: PackedRgb) -> u8 {
    (rgb >> 16) as u8
}

/// Green channel.
#[inline]
pub const fn green(rgb: PackedRgb) -> u8 {
    (rgb >> 8) as u8
}

/// Blue channel.
#[inline]
pub const fn blue(rgb: PackedRgb) -> u8 {
    rgb as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let c = pack_rgb(200, 100, 50);
        assert_eq!(unpack_rgb(c), [200, 100, 50]);
        assert_eq!(red(c), 200);
        assert_eq!(green(c), 100);
        assert_eq!(blue(c), 50);
    }

    #[test]
    fn test_alpha_byte_ignored() {
        let c = 0xFF00_80FF;
        assert_eq!(unpack_rgb(c), [0x00, 0x80, 0xFF]);
        assert_eq!(c & RGB_MASK, 0x0080FF);
    }
}
