//! Rectangular (boxcar) pulse
//!
//! Constant all-ones kernel. Convolved with the impulse train it holds each
//! symbol value for `width` samples.

use rustfft::num_complex::Complex32;

use crate::error::{Result, WaveformError};
use crate::traits::PulseShape;

/// All-ones pulse of fixed width
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangular {
    taps: Vec<Complex32>,
}

impl Rectangular {
    /// Create a rectangular pulse
    ///
    /// # Arguments
    /// * `width` - Pulse width in samples, at least 1
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(WaveformError::EmptyKernel);
        }
        Ok(Self {
            taps: vec![Complex32::new(1.0, 0.0); width],
        })
    }

    /// Pulse width in samples
    pub fn width(&self) -> usize {
        self.taps.len()
    }
}

impl PulseShape for Rectangular {
    fn taps(&self) -> &[Complex32] {
        &self.taps
    }

    fn span_symbols(&self) -> usize {
        0
    }
}
