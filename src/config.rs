//! Experiment configuration
//!
//! JSON-serializable parameters for the data-stream and noise-burst runs.
//! `Default` reproduces the two-stream MIMO experiment and its noise bursts.

use rustfft::num_complex::Complex32;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WaveformError};
use crate::precoding::PrecodingVector;
use crate::pulse_shapes::{PulseKernel, RaisedCosine, Rectangular, DEFAULT_PULSE_WIDTH};
use crate::traits::PulseShape;

/// Complex value as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexGain {
    pub re: f32,
    #[serde(default)]
    pub im: f32,
}

impl ComplexGain {
    pub fn real(re: f32) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<ComplexGain> for Complex32 {
    fn from(g: ComplexGain) -> Self {
        Complex32::new(g.re, g.im)
    }
}

/// Pulse shape selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum PulseConfig {
    /// All-ones pulse of `width` samples
    Rectangular { width: usize },
    /// Raised cosine sampled at the run's samples-per-symbol
    RaisedCosine { span: usize, rolloff: f64 },
    /// Explicit taps
    Custom { taps: Vec<ComplexGain> },
}

impl PulseConfig {
    /// Build the kernel for a run with the given samples per symbol
    pub fn build(&self, samples_per_symbol: usize) -> Result<Box<dyn PulseShape>> {
        Ok(match self {
            PulseConfig::Rectangular { width } => Box::new(Rectangular::new(*width)?),
            PulseConfig::RaisedCosine { span, rolloff } => {
                Box::new(RaisedCosine::new(*span, samples_per_symbol, *rolloff)?)
            }
            PulseConfig::Custom { taps } => Box::new(PulseKernel::new(
                taps.iter().map(|&t| Complex32::from(t)).collect(),
            )),
        })
    }
}

/// One MIMO stream of the data experiment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// 1-based index into the precoding vector, also used in file names
    pub mimo_index: usize,
    pub seed: u64,
}

/// Framed random data streams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub amplitude: f32,
    pub samples_per_symbol: usize,
    pub pulse: PulseConfig,
    pub data_length: i64,
    pub start_sequence: Vec<u8>,
    pub stop_sequence: Vec<u8>,
    /// The V vector, one gain per stream
    pub precoding: Vec<ComplexGain>,
    pub streams: Vec<StreamConfig>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            samples_per_symbol: 400,
            pulse: PulseConfig::Rectangular { width: DEFAULT_PULSE_WIDTH },
            data_length: 20,
            start_sequence: vec![1; 8],
            stop_sequence: vec![0; 8],
            precoding: vec![ComplexGain::real(1.0); 2],
            streams: vec![
                StreamConfig { mimo_index: 1, seed: 10 },
                StreamConfig { mimo_index: 2, seed: 11 },
            ],
        }
    }
}

impl DataConfig {
    pub fn precoding_vector(&self) -> PrecodingVector {
        PrecodingVector::new(self.precoding.iter().map(|&g| g.into()).collect())
    }
}

/// One noise burst and its placement on the transmit timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstConfig {
    pub length: i64,
    pub level: f32,
    /// Zero samples before the shaped burst in the transmit file
    #[serde(default)]
    pub leading_gap: usize,
}

/// Noise reference bursts, all drawn from one seeded stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub seed: u64,
    pub samples_per_symbol: usize,
    pub pulse: PulseConfig,
    pub bursts: Vec<BurstConfig>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 45,
            samples_per_symbol: 10,
            pulse: PulseConfig::Rectangular { width: 10 },
            bursts: vec![
                BurstConfig { length: 20000, level: 0.5, leading_gap: 0 },
                // Starts right after the first shaped burst's last full symbol
                BurstConfig { length: 10000, level: 0.05, leading_gap: 100_000 },
            ],
        }
    }
}

/// Top-level experiment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub output_dir: PathBuf,
    pub data: DataConfig,
    pub noise: NoiseConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            data: DataConfig::default(),
            noise: NoiseConfig::default(),
        }
    }
}

impl ExperimentConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WaveformError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| WaveformError::Config(e.to_string()))
    }

    /// Cross-field checks that individual stages cannot see
    pub fn validate(&self) -> Result<()> {
        let precoding = self.data.precoding_vector();
        for stream in &self.data.streams {
            precoding.gain(stream.mimo_index)?;
        }

        let mut indices: Vec<usize> = self.data.streams.iter().map(|s| s.mimo_index).collect();
        indices.sort_unstable();
        if indices.windows(2).any(|w| w[0] == w[1]) {
            return Err(WaveformError::Config(
                "duplicate mimo_index would overwrite stream files".into(),
            ));
        }

        Ok(())
    }
}
