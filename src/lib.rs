//! Waveprep - Baseband waveform preparation for MIMO channel experiments
//!
//! Generates framed random bit streams and seeded noise bursts, shapes them
//! into complex baseband waveforms and writes them as flat sample files for
//! the transmit hardware and the correlation tooling.

pub mod config;
pub mod correlate;
pub mod error;
pub mod formatter;
pub mod io;
pub mod pipeline;
pub mod precoding;
pub mod pulse_shapes;
pub mod sequence;
pub mod traits;
pub mod waveform;
mod utils;

#[cfg(test)]
mod pipeline_tests;

// Re-export core types for convenience
pub use config::{ExperimentConfig, PulseConfig};
pub use correlate::{cross_correlate, find_peak, Peak};
pub use error::{Result, WaveformError};
pub use formatter::WaveformFormatter;
pub use pipeline::{run_data_experiment, run_noise_experiment, BurstReport, StreamReport};
pub use precoding::PrecodingVector;
pub use pulse_shapes::{PulseKernel, RaisedCosine, Rectangular};
pub use sequence::{BitSequence, BitSequenceGenerator, NoiseBurstGenerator};
pub use traits::PulseShape;
pub use utils::{mean_power, peak_magnitude, power_to_db};
pub use waveform::Waveform;
