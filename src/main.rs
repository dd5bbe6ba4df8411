//! Waveprep command-line interface
//!
//! - Generating framed data streams and their transmit waveforms
//! - Generating noise reference bursts
//! - Inspecting and correlating sample files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use waveprep::io::read_waveform_file;
use waveprep::{
    cross_correlate, find_peak, mean_power, peak_magnitude, power_to_db, run_data_experiment,
    run_noise_experiment, ExperimentConfig,
};

#[derive(Parser)]
#[command(name = "waveprep")]
#[command(author, version, about = "Baseband waveform preparation", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate data_<n>.txt and send_<n>.bin for every MIMO stream
    Data {
        /// JSON experiment configuration (defaults if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory (overrides the configuration)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Generate noise_<k>.bin and noise_<k>_transmit.bin for every burst
    Noise {
        /// JSON experiment configuration (defaults if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory (overrides the configuration)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Print sample count, mean power and peak of a waveform file
    Inspect {
        /// Binary waveform file
        #[arg(short, long)]
        input: PathBuf,

        /// Only read the first N samples
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Locate a reference waveform inside a signal
    Correlate {
        /// Waveform to search
        #[arg(short, long)]
        signal: PathBuf,

        /// Reference waveform
        #[arg(short, long)]
        reference: PathBuf,
    },

    /// Print the default configuration as JSON
    Defaults,
}

fn load_config(path: Option<&Path>) -> Result<ExperimentConfig> {
    match path {
        Some(path) => ExperimentConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration {:?}", path)),
        None => Ok(ExperimentConfig::default()),
    }
}

fn cmd_data(config: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());

    info!("Writing data streams to {:?}", out_dir);
    let reports = run_data_experiment(&config, &out_dir).context("Data experiment failed")?;

    for report in reports {
        println!(
            "stream {}: {} bits, {} samples -> {}",
            report.mimo_index,
            report.bits,
            report.samples,
            report.send_path.display()
        );
    }
    Ok(())
}

fn cmd_noise(config: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());

    info!("Writing noise bursts to {:?}", out_dir);
    let reports = run_noise_experiment(&config, &out_dir).context("Noise experiment failed")?;

    for report in reports {
        println!(
            "burst {}: {} samples -> {}, {} samples -> {}",
            report.index,
            report.samples,
            report.path.display(),
            report.transmit_samples,
            report.transmit_path.display()
        );
    }
    Ok(())
}

fn cmd_inspect(input: PathBuf, count: Option<usize>) -> Result<()> {
    let waveform = read_waveform_file(&input, count)
        .with_context(|| format!("Failed to read waveform {:?}", input))?;

    println!("File:       {}", input.display());
    println!("Samples:    {}", waveform.len());

    if waveform.is_empty() {
        warn!("Waveform is empty");
        return Ok(());
    }

    let power = mean_power(waveform.samples());
    println!("Mean power: {:.6e} ({:.2} dB)", power, power_to_db(power));
    if let Some((index, magnitude)) = peak_magnitude(waveform.samples()) {
        println!("Peak:       {:.6} at sample {}", magnitude, index);
    }
    Ok(())
}

fn cmd_correlate(signal: PathBuf, reference: PathBuf) -> Result<()> {
    let signal_wave = read_waveform_file(&signal, None)
        .with_context(|| format!("Failed to read signal {:?}", signal))?;
    let reference_wave = read_waveform_file(&reference, None)
        .with_context(|| format!("Failed to read reference {:?}", reference))?;

    info!(
        "Correlating {} samples against {} reference samples",
        signal_wave.len(),
        reference_wave.len()
    );
    let corr = cross_correlate(signal_wave.samples(), reference_wave.samples())
        .context("Correlation failed")?;

    match find_peak(&corr, reference_wave.len()) {
        Some(peak) => {
            println!("Peak lag:       {}", peak.lag);
            println!("Peak magnitude: {:.6}", peak.magnitude);
        }
        None => warn!("Correlation produced no output"),
    }
    Ok(())
}

fn cmd_defaults() -> Result<()> {
    let json = ExperimentConfig::default()
        .to_json_pretty()
        .context("Failed to serialize default configuration")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Data { config, out_dir } => cmd_data(config, out_dir),
        Commands::Noise { config, out_dir } => cmd_noise(config, out_dir),
        Commands::Inspect { input, count } => cmd_inspect(input, count),
        Commands::Correlate { signal, reference } => cmd_correlate(signal, reference),
        Commands::Defaults => cmd_defaults(),
    }
}
