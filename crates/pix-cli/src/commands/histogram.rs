//! Histogram chart command

use crate::{HistogramArgs, Metric};
use anyhow::Result;
use pix_color::{blue_channel8, green_channel8, hue8, red_channel8, saturation8, value8};
use pix_core::PackedRgb;
use pix_ops::histogram::{accumulate, histogram, render_histogram};

/// Scalar extractor behind each metric.
pub fn mapper_for(metric: Metric) -> fn(PackedRgb) -> i32 {
    match metric {
        Metric::Red => red_channel8,
        Metric::Green => green_channel8,
        Metric::Blue => blue_channel8,
        Metric::Hue => hue8,
        Metric::Saturation => saturation8,
        Metric::Value => value8,
    }
}

pub fn run(args: HistogramArgs, verbose: bool) -> Result<()> {
    let image = super::load_image(&args.input)?;

    let mut hist = histogram(&image, mapper_for(args.metric))?;
    if args.cumulative {
        hist = accumulate(&hist);
    }

    if verbose {
        println!(
            "{} {:?} histogram of {} ({} pixels, peak {})",
            if args.cumulative { "Cumulative" } else { "Per-bucket" },
            args.metric,
            args.input.display(),
            image.pixel_count(),
            hist.max()
        );
    }

    let chart = render_histogram(&hist);
    super::save_image(&args.output, &chart)?;

    if verbose {
        println!("Wrote {}x{} chart to {}", chart.width(), chart.height(), args.output.display());
    }

    Ok(())
}
