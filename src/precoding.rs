//! MIMO precoding table
//!
//! One complex gain per transmit stream. The vector itself comes from an
//! external SVD of the channel; here it is only looked up.
//!
//! Stream indices are 1-based: stream 1 uses the first entry.

use rustfft::num_complex::Complex32;

use crate::error::{Result, WaveformError};

/// Per-stream precoding gains (the V vector)
#[derive(Debug, Clone, PartialEq)]
pub struct PrecodingVector {
    gains: Vec<Complex32>,
}

impl PrecodingVector {
    pub fn new(gains: Vec<Complex32>) -> Self {
        Self { gains }
    }

    /// Unit gain on every one of `streams` streams
    pub fn identity(streams: usize) -> Self {
        Self {
            gains: vec![Complex32::new(1.0, 0.0); streams],
        }
    }

    /// Number of streams in the table
    pub fn streams(&self) -> usize {
        self.gains.len()
    }

    /// Gain for a 1-based MIMO stream index
    pub fn gain(&self, mimo_index: usize) -> Result<Complex32> {
        mimo_index
            .checked_sub(1)
            .and_then(|idx| self.gains.get(idx))
            .copied()
            .ok_or(WaveformError::InvalidStreamIndex {
                index: mimo_index,
                streams: self.gains.len(),
            })
    }
}
