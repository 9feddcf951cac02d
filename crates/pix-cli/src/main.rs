//! pix - RGB image filters, morphology and histograms from the command line

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pix_ops::BlendMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pix")]
#[command(author, version, about = "RGB image filters, morphology and histograms")]
#[command(long_about = "
Pointwise mapping, 3x3 convolution, luminance-ordered morphology and
histogram charts over 24-bit RGB images.

Examples:
  pix info photo.png                         # Size and channel statistics
  pix convolve photo.png -o soft.png -k gaussian
  pix morph scan.png -o clean.png --op open -n 2
  pix histogram photo.png -o hist.png -m value --cumulative
  pix adjust photo.png -o out.png --saturation 1.4 --hue-shift 0.1
  pix blend a.png b.png -o diff.png --mode difference
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image size and channel statistics
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Apply a 3x3 convolution kernel
    #[command(visible_alias = "c")]
    Convolve(ConvolveArgs),

    /// Luminance-ordered erosion, dilation, opening, closing
    #[command(visible_alias = "m")]
    Morph(MorphArgs),

    /// Render a histogram chart (512x600)
    #[command(visible_alias = "h")]
    Histogram(HistogramArgs),

    /// Pointwise color adjustments
    Adjust(AdjustArgs),

    /// Combine two images pixel by pixel
    Blend(BlendArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum KernelKind {
    Identity,
    Box,
    Gaussian,
    Sharpen,
    Edge,
    Emboss,
}

#[derive(Args)]
struct ConvolveArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel preset
    #[arg(short, long, value_enum, default_value = "box")]
    kernel: KernelKind,

    /// Sharpening strength (sharpen kernel only)
    #[arg(short, long, default_value = "1.0")]
    amount: f32,

    /// Apply the kernel this many times
    #[arg(short = 'n', long, default_value = "1")]
    times: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum MorphOp {
    Erode,
    Dilate,
    Open,
    Close,
    Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum ElementKind {
    Cross,
    Square,
    Diagonal,
}

#[derive(Args)]
struct MorphArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Operation
    #[arg(long, value_enum, default_value = "open")]
    op: MorphOp,

    /// Number of iterations (ignored by gradient)
    #[arg(short = 'n', long, default_value = "1")]
    times: usize,

    /// Structuring element
    #[arg(short, long, value_enum, default_value = "cross")]
    element: ElementKind,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Metric {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
}

#[derive(Args)]
struct HistogramArgs {
    /// Input image
    input: PathBuf,

    /// Output chart
    #[arg(short, long)]
    output: PathBuf,

    /// Quantity to count
    #[arg(short, long, value_enum, default_value = "green")]
    metric: Metric,

    /// Plot the running total instead of per-bucket counts
    #[arg(long)]
    cumulative: bool,
}

#[derive(Args)]
struct AdjustArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Convert to luma gray
    #[arg(long)]
    grayscale: bool,

    /// Photographic negative
    #[arg(long)]
    invert: bool,

    /// Multiply all channels by this factor
    #[arg(long)]
    brightness: Option<f32>,

    /// Multiply HSV saturation by this factor
    #[arg(long)]
    saturation: Option<f32>,

    /// Rotate hue by this many turns (wraps)
    #[arg(long, allow_hyphen_values = true)]
    hue_shift: Option<f32>,

    /// Black/white split at this luma (0-1)
    #[arg(long)]
    threshold: Option<f32>,

    /// Equalize the HSV value channel
    #[arg(long)]
    equalize: bool,
}

#[derive(Args)]
struct BlendArgs {
    /// First image
    a: PathBuf,

    /// Second image
    b: PathBuf,

    /// Output image (size of the overlap)
    #[arg(short, long)]
    output: PathBuf,

    /// Blend mode: average, difference, multiply, add
    #[arg(short, long, default_value = "average")]
    mode: BlendMode,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Convolve(args) => commands::convolve::run(args, cli.verbose),
        Commands::Morph(args) => commands::morph::run(args, cli.verbose),
        Commands::Histogram(args) => commands::histogram::run(args, cli.verbose),
        Commands::Adjust(args) => commands::adjust::run(args, cli.verbose),
        Commands::Blend(args) => commands::blend::run(args, cli.verbose),
    }
}
