//! Complex baseband waveform produced by the formatter

use rustfft::num_complex::Complex32;

/// Immutable sequence of single-precision complex samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waveform {
    samples: Vec<Complex32>,
}

impl Waveform {
    pub fn new(samples: Vec<Complex32>) -> Self {
        Self { samples }
    }

    /// Build from real samples with zero imaginary part
    pub fn from_real(samples: &[f32]) -> Self {
        Self {
            samples: samples.iter().map(|&s| Complex32::new(s, 0.0)).collect(),
        }
    }

    pub fn samples(&self) -> &[Complex32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
