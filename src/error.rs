//! Error types for waveform preparation.

use thiserror::Error;

/// Waveform preparation error type
#[derive(Error, Debug)]
pub enum WaveformError {
    /// Requested sequence length is negative
    #[error("invalid sequence length: {0}")]
    InvalidLength(i64),

    /// Samples per symbol must be at least 1
    #[error("invalid samples per symbol: {0}")]
    InvalidT(usize),

    /// Pulse kernel has no taps
    #[error("pulse kernel is empty")]
    EmptyKernel,

    /// Input sequence has no samples
    #[error("input sequence is empty")]
    EmptyInput,

    /// Amplitude or noise level is not a finite positive value
    #[error("invalid amplitude: {0}")]
    InvalidAmplitude(f32),

    /// Marker sequence holds something other than 0 or 1
    #[error("marker value {0} is not a bit")]
    InvalidMarker(u8),

    /// Pulse design parameters out of range
    #[error("invalid pulse parameters: {0}")]
    InvalidPulse(String),

    /// MIMO stream index outside the precoding table (1-based)
    #[error("stream index {index} outside precoding table of {streams} streams")]
    InvalidStreamIndex { index: usize, streams: usize },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for waveform operations
pub type Result<T> = std::result::Result<T, WaveformError>;
