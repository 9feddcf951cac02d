//! Pointwise color mapping over one or two images.
//!
//! Every function decodes each pixel into a [`ColorVector`], hands it to the
//! caller's closure and encodes the result into a freshly allocated image.
//! Inputs are never modified.
//!
//! # Example
//!
//! ```rust
//! use pix_core::RgbImage;
//! use pix_ops::mapper::{map_binary, map_unary};
//!
//! let a = RgbImage::filled(4, 4, 0x204060);
//! let darker = map_unary(&a, |c| c * 0.5);
//! assert_eq!(darker.pixel(0, 0), 0x102030);
//!
//! let b = RgbImage::filled(2, 8, 0x000000);
//! let avg = map_binary(&a, &b, |x, y| (x + y) * 0.5);
//! assert_eq!(avg.dimensions(), (2, 4));
//! ```

use pix_color::{hsv_to_packed, to_hsv, to_packed_rgb, to_vector};
use pix_core::RgbImage;
use pix_math::ColorVector;
use tracing::{debug, trace};

/// Applies `f` to the RGB vector of every pixel.
///
/// The output has the same dimensions as the input.
pub fn map_unary<F>(image: &RgbImage, f: F) -> RgbImage
where
    F: Fn(ColorVector) -> ColorVector + Sync,
{
    trace!(width = image.width(), height = image.height(), "map_unary");
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        to_packed_rgb(f(to_vector(image.pixel(x, y))))
    })
}

/// Applies `f` to the HSV vector of every pixel.
///
/// `f` receives `(hue, saturation, value)` and must return an HSV triple.
/// Hue may leave [0, 1]; it wraps on encoding.
pub fn map_unary_hsv<F>(image: &RgbImage, f: F) -> RgbImage
where
    F: Fn(ColorVector) -> ColorVector + Sync,
{
    trace!(width = image.width(), height = image.height(), "map_unary_hsv");
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        hsv_to_packed(f(to_hsv(image.pixel(x, y))))
    })
}

/// Combines two images pixel by pixel.
///
/// The output covers only the overlapping top-left rectangle:
/// `min(width_a, width_b) x min(height_a, height_b)`. Images of different
/// sizes are accepted; the excess of the larger one is ignored.
pub fn map_binary<F>(a: &RgbImage, b: &RgbImage, f: F) -> RgbImage
where
    F: Fn(ColorVector, ColorVector) -> ColorVector + Sync,
{
    let width = a.width().min(b.width());
    let height = a.height().min(b.height());
    trace!(width, height, "map_binary");
    if a.dimensions() != b.dimensions() {
        debug!(
            a = ?a.dimensions(),
            b = ?b.dimensions(),
            width,
            height,
            "Size mismatch, processing overlap only"
        );
    }

    RgbImage::from_fn(width, height, |x, y| {
        to_packed_rgb(f(to_vector(a.pixel(x, y)), to_vector(b.pixel(x, y))))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_core::pack_rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            pack_rgb((x * 37 % 256) as u8, (y * 53 % 256) as u8, ((x + y) * 11 % 256) as u8)
        })
    }

    #[test]
    fn test_identity_unary() {
        let img = gradient(7, 5);
        let out = map_unary(&img, |c| c);
        assert_eq!(out, img);
        assert!(!out.shares_buffer(&img));
    }

    #[test]
    fn test_unary_clamps() {
        let img = RgbImage::filled(2, 2, 0x808080);
        let out = map_unary(&img, |c| c * 10.0);
        assert!(out.data().iter().all(|&p| p == 0xFFFFFF));
    }

    #[test]
    fn test_hsv_mapper_sees_hsv() {
        let img = RgbImage::filled(1, 1, 0xFF0000);
        let out = map_unary_hsv(&img, |hsv| {
            assert_eq!(hsv, ColorVector::new(0.0, 1.0, 1.0));
            ColorVector::new(hsv.x + 2.0 / 3.0, hsv.y, hsv.z)
        });
        assert_eq!(out.pixel(0, 0), 0x0000FF);
    }

    #[test]
    fn test_binary_overlap_region() {
        let a = RgbImage::filled(5, 2, 0x102030);
        let b = RgbImage::filled(3, 4, 0x010101);
        let out = map_binary(&a, &b, |x, y| x + y);
        assert_eq!(out.dimensions(), (3, 2));
        assert!(out.data().iter().all(|&p| p == 0x112131));
    }

    #[test]
    fn test_binary_receives_same_position() {
        let a = gradient(4, 4);
        let b = gradient(6, 6);
        let out = map_binary(&a, &b, |x, y| {
            assert_eq!(x, y);
            x
        });
        assert_eq!(out, a);
    }

    #[test]
    fn test_empty_images() {
        let a = RgbImage::new(0, 3);
        let b = gradient(3, 3);
        assert!(map_binary(&a, &b, |x, _| x).is_empty());
        assert!(map_unary(&a, |c| c).is_empty());
    }
}
