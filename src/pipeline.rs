//! Experiment runners
//!
//! Drive the generators, formatter and serializers over an
//! `ExperimentConfig` and leave the resulting files in one directory.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::formatter::WaveformFormatter;
use crate::io::{write_levels_file, write_waveform_file};
use crate::sequence::{generate_bits, place_bursts, shape_burst, NoiseBurstGenerator, Placement};

/// Files written for one MIMO data stream
#[derive(Debug, Clone, PartialEq)]
pub struct StreamReport {
    pub mimo_index: usize,
    /// Framed bit count
    pub bits: usize,
    /// Complex samples in the send file
    pub samples: usize,
    pub data_path: PathBuf,
    pub send_path: PathBuf,
}

/// Files written for one noise burst
#[derive(Debug, Clone, PartialEq)]
pub struct BurstReport {
    /// 1-based burst number, as used in file names
    pub index: usize,
    pub samples: usize,
    pub transmit_samples: usize,
    pub path: PathBuf,
    pub transmit_path: PathBuf,
}

/// Generate, format and write every configured data stream
///
/// Writes `data_<n>.txt` (framed bits) and `send_<n>.bin` (formatted
/// waveform) per stream, `n` being the 1-based MIMO index. Every stream
/// is formatted before the first file is created.
pub fn run_data_experiment(config: &ExperimentConfig, out_dir: &Path) -> Result<Vec<StreamReport>> {
    config.validate()?;

    let data = &config.data;
    let pulse = data.pulse.build(data.samples_per_symbol)?;
    let precoding = data.precoding_vector();

    let mut formatted = Vec::with_capacity(data.streams.len());
    for stream in &data.streams {
        let bits = generate_bits(
            stream.seed,
            data.data_length,
            &data.start_sequence,
            &data.stop_sequence,
        )?;

        let formatter = WaveformFormatter::new(data.amplitude, data.samples_per_symbol)
            .with_precoding(precoding.gain(stream.mimo_index)?);
        let waveform = formatter.format_bits(&bits, pulse.as_ref())?;
        formatted.push((stream, bits, waveform));
    }

    std::fs::create_dir_all(out_dir)?;

    let mut reports = Vec::with_capacity(formatted.len());
    for (stream, bits, waveform) in formatted {
        let data_path = out_dir.join(format!("data_{}.txt", stream.mimo_index));
        let send_path = out_dir.join(format!("send_{}.bin", stream.mimo_index));
        write_levels_file(&bits.levels(), &data_path)?;
        write_waveform_file(&waveform, &send_path)?;

        info!(
            mimo_index = stream.mimo_index,
            seed = stream.seed,
            bits = bits.len(),
            samples = waveform.len(),
            path = %send_path.display(),
            "wrote data stream"
        );

        reports.push(StreamReport {
            mimo_index: stream.mimo_index,
            bits: bits.len(),
            samples: waveform.len(),
            data_path,
            send_path,
        });
    }

    Ok(reports)
}

/// Draw, shape and write every configured noise burst
///
/// All bursts come from one generator seeded once, in configuration
/// order. Writes `noise_<k>.bin` (shaped burst) and `noise_<k>_transmit.bin`
/// (burst preceded by its leading gap of zeros). Every burst is computed
/// before the first file is created.
pub fn run_noise_experiment(config: &ExperimentConfig, out_dir: &Path) -> Result<Vec<BurstReport>> {
    let noise = &config.noise;
    let pulse = noise.pulse.build(noise.samples_per_symbol)?;
    let mut generator = NoiseBurstGenerator::from_seed(noise.seed);

    let mut shaped_bursts = Vec::with_capacity(noise.bursts.len());
    for burst_config in &noise.bursts {
        let burst = generator.generate_burst(burst_config.length, burst_config.level)?;
        let shaped = shape_burst(&burst, noise.samples_per_symbol, pulse.as_ref())?;
        let transmit = place_bursts(&[Placement {
            leading_gap: burst_config.leading_gap,
            waveform: &shaped,
        }]);
        shaped_bursts.push((shaped, transmit));
    }

    std::fs::create_dir_all(out_dir)?;

    let mut reports = Vec::with_capacity(shaped_bursts.len());
    for (i, (burst_config, (shaped, transmit))) in
        noise.bursts.iter().zip(&shaped_bursts).enumerate()
    {
        let index = i + 1;
        let path = out_dir.join(format!("noise_{}.bin", index));
        let transmit_path = out_dir.join(format!("noise_{}_transmit.bin", index));
        write_waveform_file(shaped, &path)?;
        write_waveform_file(transmit, &transmit_path)?;

        info!(
            burst = index,
            level = burst_config.level,
            samples = shaped.len(),
            gap = burst_config.leading_gap,
            "wrote noise burst"
        );

        reports.push(BurstReport {
            index,
            samples: shaped.len(),
            transmit_samples: transmit.len(),
            path,
            transmit_path,
        });
    }

    Ok(reports)
}
