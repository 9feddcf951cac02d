//! Algebraic properties of the pixel engines.
//!
//! Each test checks a law that must hold for any input, using small
//! synthetic images whose expected output can be derived by hand or by a
//! brute-force reference.

use pix_color::{
    from_hsv, green_channel8, hue8, luminance, red_channel8, saturation8, to_hsv, to_packed_rgb,
    to_vector, value8, vectors_approx_eq, DEFAULT_EPSILON,
};
use pix_core::{pack_rgb, unpack_rgb, PackedRgb, RgbImage, BLACK, WHITE};
use pix_ops::histogram::{HISTOGRAM_BINS, RENDER_HEIGHT, RENDER_WIDTH};
use pix_ops::{
    accumulate, convolve, dilate, erode, histogram, open, render_histogram, Histogram, Kernel3,
    StructuringElement,
};

/// Deterministic pseudo-random image.
fn noise(width: u32, height: u32, seed: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let mut h = x.wrapping_mul(0x9E37_79B1) ^ y.wrapping_mul(0x85EB_CA77) ^ seed;
        h ^= h >> 15;
        h = h.wrapping_mul(0x2C1B_3C6D);
        h ^= h >> 12;
        h
    })
}

/// Pure black/white pattern with blobs and isolated specks.
fn binary_pattern(width: u32, height: u32) -> RgbImage {
    let n = noise(width, height, 7);
    RgbImage::from_fn(width, height, |x, y| {
        let blob = (x / 4 + y / 3) % 2 == 0;
        let speck = n.pixel(x, y) % 11 == 0;
        if blob ^ speck { WHITE } else { BLACK }
    })
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn packed_vector_round_trip_is_exact() {
    for rgb in (0..=0xFF_FFFFu32).step_by(97) {
        assert_eq!(to_packed_rgb(to_vector(rgb)), rgb);
    }
    assert_eq!(to_packed_rgb(to_vector(0xFF_FFFF)), 0xFF_FFFF);
}

#[test]
fn hsv_round_trip_within_one_step() {
    for rgb in (0..=0xFF_FFFFu32).step_by(1013) {
        let back = from_hsv(to_hsv(rgb));
        assert!(
            vectors_approx_eq(back, to_vector(rgb), DEFAULT_EPSILON),
            "{:06X} -> {:?}",
            rgb,
            back
        );
    }
}

// ============================================================================
// Convolution
// ============================================================================

#[test]
fn identity_kernel_reproduces_image() {
    let img = noise(13, 7, 1);
    let kernel = Kernel3::from_nested(&[[0.0f32, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]).unwrap();
    assert_eq!(convolve(&img, &kernel).unwrap(), img);
}

#[test]
fn mirror_border_reads_second_pixel() {
    let columns = [0xFF0000, 0x00FF00, 0x0000FF];
    let img = RgbImage::from_fn(3, 4, |x, _| columns[x as usize]);

    // only the left neighbor contributes: out(x, y) = in(x - 1, y)
    let left = Kernel3::from_rows([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
    let out = convolve(&img, &left).unwrap();
    for y in 0..4 {
        assert_eq!(out.pixel(0, y), columns[1], "(-1, {}) must read (1, {})", y, y);
        assert_eq!(out.pixel(1, y), columns[0]);
        assert_eq!(out.pixel(2, y), columns[1]);
    }

    // only the right neighbor contributes: out(x, y) = in(x + 1, y)
    let right = Kernel3::from_rows([[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]]);
    let out = convolve(&img, &right).unwrap();
    for y in 0..4 {
        assert_eq!(out.pixel(2, y), columns[1], "(3, {}) must read (1, {})", y, y);
    }
}

#[test]
fn mirror_border_vertical() {
    let rows = [0x111111, 0x222222, 0x333333];
    let img = RgbImage::from_fn(4, 3, |_, y| rows[y as usize]);
    let up = Kernel3::from_rows([[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
    let out = convolve(&img, &up).unwrap();
    assert_eq!(out.pixel(0, 0), rows[1]);
    assert_eq!(out.pixel(3, 2), rows[1]);
}

// ============================================================================
// Morphology
// ============================================================================

/// Straightforward min/max-luma search used as a reference.
fn reference_select(image: &RgbImage, element: &StructuringElement, darkest: bool) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let mut candidates: Vec<PackedRgb> = Vec::new();
        for ky in 0..3 {
            for kx in 0..3 {
                let sx = x as i64 + kx as i64 - 1;
                let sy = y as i64 + ky as i64 - 1;
                if element.contains(kx, ky) && image.contains(sx, sy) {
                    candidates.push(image.pixel(sx as u32, sy as u32));
                }
            }
        }
        let key = |p: &PackedRgb| luminance(to_vector(*p));
        let pick = if darkest {
            candidates.iter().min_by(|a, b| key(a).total_cmp(&key(b)))
        } else {
            candidates.iter().max_by(|a, b| key(a).total_cmp(&key(b)))
        };
        pick.copied().unwrap_or(BLACK)
    })
}

/// Gray ramp with a distinct luma per pixel, so there are no ties.
fn distinct_luma(width: u32, height: u32) -> RgbImage {
    let order = noise(width, height, 3);
    let mut ranks: Vec<(u32, u32)> = order.data().iter().copied().zip(0..).collect();
    ranks.sort_unstable();
    let mut data = vec![0; (width * height) as usize];
    for (rank, &(_, idx)) in ranks.iter().enumerate() {
        let v = (rank * 255 / ranks.len().max(1)) as u8;
        data[idx as usize] = pack_rgb(v, v, v);
    }
    RgbImage::from_data(width, height, data).unwrap()
}

#[test]
fn erode_and_dilate_match_reference() {
    let img = distinct_luma(11, 9);
    for element in [
        StructuringElement::cross(),
        StructuringElement::square(),
        StructuringElement::diagonal(),
    ] {
        assert_eq!(erode(&img, Some(&element)), reference_select(&img, &element, true));
        assert_eq!(dilate(&img, Some(&element)), reference_select(&img, &element, false));
    }
}

#[test]
fn erode_dilate_hand_built_3x3() {
    // center is the brightest pixel; its cross neighbors are 50, 10, 70, 30
    let v = [40, 50, 60, 10, 90, 70, 20, 30, 80];
    let img = RgbImage::from_fn(3, 3, |x, y| {
        let g = v[(y * 3 + x) as usize];
        pack_rgb(g, g, g)
    });
    assert_eq!(unpack_rgb(erode(&img, None).pixel(1, 1))[0], 10);
    assert_eq!(unpack_rgb(dilate(&img, None).pixel(1, 1))[0], 90);

    let square = StructuringElement::square();
    assert_eq!(unpack_rgb(erode(&img, Some(&square)).pixel(1, 1))[0], 10);
    assert_eq!(unpack_rgb(dilate(&img, Some(&square)).pixel(2, 0))[0], 90);
    assert_eq!(unpack_rgb(erode(&img, Some(&square)).pixel(2, 2))[0], 30);
}

#[test]
fn opening_is_idempotent_on_binary_images() {
    let img = binary_pattern(24, 17);
    for element in [StructuringElement::cross(), StructuringElement::square()] {
        for n in 1..=2 {
            let once = open(&img, n, Some(&element));
            let twice = open(&once, n, Some(&element));
            assert_eq!(twice, once, "n = {}, element = {:?}", n, element);
        }
    }
}

// ============================================================================
// Histogram
// ============================================================================

#[test]
fn histogram_sums_to_pixel_count() {
    for (w, h) in [(1, 1), (7, 3), (32, 20)] {
        let img = noise(w, h, w ^ h);
        for mapper in [red_channel8, green_channel8, hue8, saturation8, value8] {
            let hist = histogram(&img, mapper).unwrap();
            assert_eq!(hist.total(), (w * h) as u64);
        }
    }
}

#[test]
fn accumulated_histogram_is_monotone() {
    let img = noise(40, 25, 9);
    let hist = histogram(&img, hue8).unwrap();
    let cdf = accumulate(&hist);
    assert_eq!(cdf[HISTOGRAM_BINS - 1], hist.total());
    assert!(cdf.bins().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn rendering_empty_histogram_does_not_fault() {
    let chart = render_histogram(&Histogram::new());
    assert_eq!(chart.dimensions(), (RENDER_WIDTH, RENDER_HEIGHT));
}
