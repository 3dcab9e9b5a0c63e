use clap::Parser;
use fourier_conv::{
    Result, convolve_with, convolve2d_with, dft::NaiveDft, fft::Radix2Dft,
    transform::FourierTransform,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{info, info_span};
use tracing_forest::{ForestLayer, util::LevelFilter};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Convolves random data with both backends and compares the results.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'n', long, default_value = "1024")]
    signal_len: usize,

    #[arg(short = 'k', long, default_value = "16")]
    kernel_len: usize,

    /// Lay the signal out as rows of this width and run a 2D convolution.
    #[arg(short = 'w', long, requires = "kernel_width")]
    signal_width: Option<usize>,

    /// Row width of the kernel in 2D mode.
    #[arg(long, requires = "signal_width")]
    kernel_width: Option<usize>,

    #[arg(short = 's', long, default_value = "0")]
    seed: u64,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let signal: Vec<f64> = (0..args.signal_len)
        .map(|_| rng.random_range(-100.0..100.0))
        .collect();
    let kernel: Vec<f64> = (0..args.kernel_len)
        .map(|_| rng.random_range(-100.0..100.0))
        .collect();

    let fast = info_span!("radix-2").in_scope(|| run(&Radix2Dft, &args, &signal, &kernel))?;
    let naive = info_span!("naive").in_scope(|| run(&NaiveDft, &args, &signal, &kernel))?;

    let max_deviation = fast
        .iter()
        .zip(&naive)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    info!(len = fast.len(), max_deviation, "convolution finished");

    println!("=========================================");
    match (args.signal_width, args.kernel_width) {
        (Some(width), Some(kernel_width)) => println!(
            "2D: {}x{} signal, {}x{} kernel",
            args.signal_len / width.max(1),
            width,
            args.kernel_len / kernel_width.max(1),
            kernel_width
        ),
        _ => println!("1D: {} samples, {}-tap kernel", args.signal_len, args.kernel_len),
    }
    println!("Max deviation between backends: {max_deviation:e}");
    Ok(())
}

fn run<D: FourierTransform>(dft: &D, args: &Args, signal: &[f64], kernel: &[f64]) -> Result<Vec<f64>> {
    match (args.signal_width, args.kernel_width) {
        (Some(width), Some(kernel_width)) => {
            convolve2d_with(dft, signal, width, kernel, kernel_width)
        }
        _ => convolve_with(dft, signal, kernel),
    }
}
