//! Convolve command

use crate::{ConvolveArgs, KernelKind};
use anyhow::Result;
use pix_ops::filter::{convolve, Kernel3};

fn kernel_for(kind: KernelKind, amount: f32) -> Kernel3 {
    match kind {
        KernelKind::Identity => Kernel3::identity(),
        KernelKind::Box => Kernel3::box_blur(),
        KernelKind::Gaussian => Kernel3::gaussian(),
        KernelKind::Sharpen => Kernel3::sharpen(amount),
        KernelKind::Edge => Kernel3::edge_detect(),
        KernelKind::Emboss => Kernel3::emboss(),
    }
}

pub fn run(args: ConvolveArgs, verbose: bool) -> Result<()> {
    let mut image = super::load_image(&args.input)?;
    let kernel = kernel_for(args.kernel, args.amount);

    if verbose {
        println!(
            "Convolving {} with {:?} kernel ({} pass{})",
            args.input.display(),
            args.kernel,
            args.times,
            if args.times == 1 { "" } else { "es" }
        );
    }

    for _ in 0..args.times {
        image = convolve(&image, &kernel)?;
    }

    super::save_image(&args.output, &image)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
