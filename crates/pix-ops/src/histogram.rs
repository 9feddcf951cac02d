//! Histogram extraction and rendering.
//!
//! A [`Histogram`] counts pixels per 8-bit bucket of a caller-chosen metric.
//! The metric comes from a scalar mapper `Fn(PackedRgb) -> i32`; the
//! extractors in `pix-color` (`red_channel8`, `hue8`, `value8`, ...) are the
//! usual choices.
//!
//! # Example
//!
//! ```rust
//! use pix_color::value8;
//! use pix_core::RgbImage;
//! use pix_ops::histogram::{accumulate, histogram, render_histogram};
//!
//! let img = RgbImage::filled(4, 4, 0x404040);
//! let hist = histogram(&img, value8).unwrap();
//! assert_eq!(hist[0x40], 16);
//!
//! let cumulative = accumulate(&hist);
//! assert_eq!(cumulative[255], 16);
//!
//! let chart = render_histogram(&hist);
//! assert_eq!(chart.dimensions(), (512, 600));
//! ```

use crate::mapper::map_unary_hsv;
use crate::{OpsError, OpsResult};
use pix_color::{quantize8, to_hsv};
use pix_core::{green, PackedRgb, RgbImage, BLACK, WHITE};
use pix_math::ColorVector;
use std::ops::Index;
use tracing::{debug, trace};

use crate::draw::draw_vertical_line;

/// Number of buckets.
pub const HISTOGRAM_BINS: usize = 256;

/// Width of a rendered chart (two columns per bucket).
pub const RENDER_WIDTH: u32 = 512;

/// Height of a rendered chart.
pub const RENDER_HEIGHT: u32 = 600;

/// Chart background color.
pub const HISTOGRAM_BACKGROUND: PackedRgb = WHITE;

/// Chart bar color.
pub const HISTOGRAM_FOREGROUND: PackedRgb = BLACK;

/// 256 pixel counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; HISTOGRAM_BINS],
}

impl Histogram {
    /// Creates an all-zero histogram.
    pub const fn new() -> Self {
        Self {
            bins: [0; HISTOGRAM_BINS],
        }
    }

    /// Wraps existing counts.
    pub const fn from_bins(bins: [u64; HISTOGRAM_BINS]) -> Self {
        Self { bins }
    }

    /// Returns the counts.
    #[inline]
    pub fn bins(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.bins
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Largest count.
    pub fn max(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Mean bucket index, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &n)| i as f64 * n as f64)
            .sum();
        Some(weighted / total as f64)
    }

    /// Iterates over the counts.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.bins.iter().copied()
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Histogram {
    type Output = u64;

    #[inline]
    fn index(&self, i: usize) -> &u64 {
        &self.bins[i]
    }
}

/// Counts `mapper(pixel)` over every pixel.
///
/// # Errors
///
/// Returns [`OpsError::MapperOutOfRange`] on the first pixel for which the
/// mapper leaves `0..=255`. Counts are never clamped.
pub fn histogram<F>(image: &RgbImage, mapper: F) -> OpsResult<Histogram>
where
    F: Fn(PackedRgb) -> i32,
{
    trace!(width = image.width(), height = image.height(), "histogram");
    let mut hist = Histogram::new();
    for (x, y, px) in image.pixels() {
        let value = mapper(px);
        let bucket = usize::try_from(value)
            .ok()
            .filter(|&b| b < HISTOGRAM_BINS)
            .ok_or(OpsError::MapperOutOfRange { value, x, y })?;
        hist.bins[bucket] += 1;
    }
    Ok(hist)
}

/// Counts a byte-valued metric, which cannot leave the bucket range.
fn count_bytes<F>(image: &RgbImage, metric: F) -> Histogram
where
    F: Fn(PackedRgb) -> u8,
{
    let mut hist = Histogram::new();
    for &px in image.data() {
        hist.bins[metric(px) as usize] += 1;
    }
    hist
}

/// Histogram of the green channel.
pub fn histogram_default(image: &RgbImage) -> Histogram {
    count_bytes(image, green)
}

/// Running prefix sum: `out[i] = hist[0] + ... + hist[i]`.
pub fn accumulate(hist: &Histogram) -> Histogram {
    let mut out = Histogram::new();
    let mut running = 0u64;
    for (dst, &n) in out.bins.iter_mut().zip(hist.bins.iter()) {
        running += n;
        *dst = running;
    }
    out
}

/// Renders a 512x600 bar chart.
///
/// Column `c` shows bucket `c / 2`. Bars are scaled so the largest count
/// reaches the top row; each bar runs from `600 - round(count * 600 / max)`
/// down to the bottom row, so even an empty bucket paints the bottom pixel.
/// An all-zero histogram renders as a flat line.
pub fn render_histogram(hist: &Histogram) -> RgbImage {
    let max = hist.max();
    let scale = if max == 0 {
        debug!("Empty histogram, rendering flat chart");
        0.0
    } else {
        RENDER_HEIGHT as f64 / max as f64
    };

    let mut chart = RgbImage::filled(RENDER_WIDTH, RENDER_HEIGHT, HISTOGRAM_BACKGROUND);
    let bottom = RENDER_HEIGHT as i64 - 1;
    for column in 0..RENDER_WIDTH as usize {
        let count = hist[column / 2];
        let bar = (count as f64 * scale + 0.5).floor() as i64;
        let top = RENDER_HEIGHT as i64 - bar;
        draw_vertical_line(&mut chart, column as i64, top, bottom, HISTOGRAM_FOREGROUND);
    }
    chart
}

/// Spreads the HSV value channel over the full range.
///
/// Builds the value histogram, maps each value through the normalized
/// cumulative histogram and leaves hue and saturation untouched. Images
/// with a single value level are returned unchanged (as a fresh buffer).
pub fn equalize_value(image: &RgbImage) -> RgbImage {
    let hist = count_bytes(image, |px| quantize8(to_hsv(px).z));
    let cdf = accumulate(&hist);
    let total = cdf[HISTOGRAM_BINS - 1];
    let cdf_min = cdf.iter().find(|&n| n > 0).unwrap_or(0);

    if total == cdf_min {
        debug!("Uniform value channel, nothing to equalize");
        return RgbImage::from_fn(image.width(), image.height(), |x, y| image.pixel(x, y));
    }

    let range = (total - cdf_min) as f32;
    let lut: Vec<f32> = cdf
        .iter()
        .map(|n| n.saturating_sub(cdf_min) as f32 / range)
        .collect();

    map_unary_hsv(image, |hsv| {
        ColorVector::new(hsv.x, hsv.y, lut[quantize8(hsv.z) as usize])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_color::{green_channel8, hue8, red_channel8, value8};
    use pix_core::pack_rgb;

    fn noise(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let v = x.wrapping_mul(2654435761).wrapping_add(y.wrapping_mul(40503));
            v >> 8
        })
    }

    #[test]
    fn test_sum_equals_pixel_count() {
        let img = noise(37, 23);
        for mapper in [red_channel8, green_channel8, hue8, value8] {
            let hist = histogram(&img, mapper).unwrap();
            assert_eq!(hist.total(), 37 * 23);
        }
    }

    #[test]
    fn test_default_is_green() {
        let img = noise(16, 9);
        assert_eq!(histogram_default(&img), histogram(&img, green_channel8).unwrap());
    }

    #[test]
    fn test_out_of_range_mapper_fails() {
        let img = RgbImage::new(3, 3);
        let err = histogram(&img, |_| 256).unwrap_err();
        assert!(matches!(err, OpsError::MapperOutOfRange { value: 256, x: 0, y: 0 }));
        assert!(histogram(&img, |_| -1).is_err());
    }

    #[test]
    fn test_accumulate() {
        let mut bins = [0u64; HISTOGRAM_BINS];
        bins[0] = 2;
        bins[10] = 3;
        bins[255] = 1;
        let cdf = accumulate(&Histogram::from_bins(bins));
        assert_eq!(cdf[0], 2);
        assert_eq!(cdf[9], 2);
        assert_eq!(cdf[10], 5);
        assert_eq!(cdf[255], 6);
        assert!(cdf.bins().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_mean() {
        assert_eq!(Histogram::new().mean(), None);
        let mut bins = [0u64; HISTOGRAM_BINS];
        bins[10] = 1;
        bins[20] = 1;
        assert_eq!(Histogram::from_bins(bins).mean(), Some(15.0));
    }

    #[test]
    fn test_render_zero_histogram() {
        let chart = render_histogram(&Histogram::new());
        assert_eq!(chart.dimensions(), (RENDER_WIDTH, RENDER_HEIGHT));
        for x in 0..RENDER_WIDTH {
            assert_eq!(chart.pixel(x, RENDER_HEIGHT - 1), HISTOGRAM_FOREGROUND);
            assert_eq!(chart.pixel(x, RENDER_HEIGHT - 2), HISTOGRAM_BACKGROUND);
        }
    }

    #[test]
    fn test_render_bar_heights() {
        let mut bins = [0u64; HISTOGRAM_BINS];
        bins[0] = 4;
        bins[1] = 2;
        bins[2] = 1;
        let chart = render_histogram(&Histogram::from_bins(bins));

        // full-height bar, two columns wide
        assert_eq!(chart.pixel(0, 0), HISTOGRAM_FOREGROUND);
        assert_eq!(chart.pixel(1, 0), HISTOGRAM_FOREGROUND);
        // half height: top at 600 - 300 = 300
        assert_eq!(chart.pixel(2, 299), HISTOGRAM_BACKGROUND);
        assert_eq!(chart.pixel(3, 300), HISTOGRAM_FOREGROUND);
        // quarter height: top at 450
        assert_eq!(chart.pixel(4, 449), HISTOGRAM_BACKGROUND);
        assert_eq!(chart.pixel(5, 450), HISTOGRAM_FOREGROUND);
    }

    #[test]
    fn test_equalize_stretches_values() {
        let img = RgbImage::from_fn(4, 1, |x, _| {
            let v = 100 + x as u8 * 10;
            pack_rgb(v, v, v)
        });
        let out = equalize_value(&img);
        let values: Vec<i32> = out.data().iter().map(|&p| value8(p)).collect();
        assert_eq!(values[0], 0);
        assert_eq!(values[3], 255);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_byte_count_matches_checked_histogram() {
        let img = RgbImage::from_fn(9, 7, |x, y| pack_rgb((x * 29) as u8, (y * 37) as u8, (x * y) as u8));
        let value = count_bytes(&img, |px| quantize8(to_hsv(px).z));
        assert_eq!(value, histogram(&img, value8).unwrap());
        assert_eq!(value.total(), 63);
    }

    #[test]
    fn test_equalize_uniform_is_copy() {
        let img = RgbImage::filled(3, 3, 0x405060);
        let out = equalize_value(&img);
        assert_eq!(out, img);
        assert!(!out.shares_buffer(&img));
    }
}
