//! Shared inputs for the pix-rs benchmarks.
//!
//! Run with: `cargo bench -p pix-bench`

use pix_core::{pack_rgb, RgbImage};

/// Deterministic color noise with a smooth gradient underneath.
pub fn test_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let h = x.wrapping_mul(0x9E37_79B1) ^ y.wrapping_mul(0x85EB_CA77);
        let n = (h >> 24) as u8 / 4;
        pack_rgb(
            ((x * 255) / width.max(1)) as u8 / 2 + n,
            ((y * 255) / height.max(1)) as u8 / 2 + n,
            n * 2,
        )
    })
}

/// Square sizes used across benchmark groups.
pub const SIZES: [u32; 3] = [64, 256, 1024];
