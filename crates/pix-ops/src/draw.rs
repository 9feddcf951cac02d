//! Minimal rasterization used for chart rendering.

use pix_core::{PackedRgb, RgbImage, RGB_MASK};

/// Paints the vertical segment `x, y0..=y1` (either order) into `image`.
///
/// Parts of the segment outside the image are clipped; a column outside the
/// image paints nothing.
///
/// ```rust
/// use pix_core::RgbImage;
/// use pix_ops::draw::draw_vertical_line;
///
/// let mut img = RgbImage::new(3, 4);
/// draw_vertical_line(&mut img, 1, 10, 2, 0xFFFFFF);
/// assert_eq!(img.pixel(1, 1), 0x000000);
/// assert_eq!(img.pixel(1, 2), 0xFFFFFF);
/// assert_eq!(img.pixel(1, 3), 0xFFFFFF);
/// ```
pub fn draw_vertical_line(image: &mut RgbImage, x: i64, y0: i64, y1: i64, color: PackedRgb) {
    let (width, height) = (image.width() as i64, image.height() as i64);
    if x < 0 || x >= width || height == 0 {
        return;
    }
    let top = y0.min(y1).max(0);
    let bottom = y0.max(y1).min(height - 1);
    if top > bottom {
        return;
    }

    let data = image.data_mut();
    for y in top..=bottom {
        data[(y * width + x) as usize] = color & RGB_MASK;
    }
}
