//! Image info command.
//!
//! Prints dimensions and a per-metric histogram summary.

use crate::{InfoArgs, Metric};
use anyhow::{Context, Result};
use clap::ValueEnum;
use pix_io::Format;
use pix_ops::histogram::histogram;
use std::fs;

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)
            .with_context(|| format!("Failed to stat: {}", path.display()))?
            .len();
        let format = Format::detect(path).unwrap_or(Format::Unknown);
        let image = super::load_image(path)?;

        println!("{}", path.display());
        println!("  Format:     {:?}", format);
        println!("  Resolution: {}x{}", image.width(), image.height());
        println!("  Pixels:     {}", image.pixel_count());
        println!("  File size:  {} B", file_size);

        println!("  {:<11} {:>7} {:>5} {:>5} {:>9}", "Metric", "Mean", "Min", "Max", "Peak");
        for &metric in Metric::value_variants() {
            let hist = histogram(&image, super::histogram::mapper_for(metric))?;
            let occupied = || hist.iter().enumerate().filter(|&(_, n)| n > 0).map(|(i, _)| i);
            let (min, max) = (occupied().next(), occupied().last());
            let name = metric
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default();
            match (hist.mean(), min, max) {
                (Some(mean), Some(min), Some(max)) => println!(
                    "  {:<11} {:>7.2} {:>5} {:>5} {:>9}",
                    name,
                    mean,
                    min,
                    max,
                    hist.max()
                ),
                _ => println!("  {:<11} {:>7} {:>5} {:>5} {:>9}", name, "-", "-", "-", 0),
            }

            if verbose {
                let busiest = hist
                    .iter()
                    .enumerate()
                    .max_by_key(|&(i, n)| (n, std::cmp::Reverse(i)))
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                println!("  {:<11} most common bucket: {}", "", busiest);
            }
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}
