//! Caller-supplied pulse kernel

use rustfft::num_complex::Complex32;

use crate::traits::PulseShape;

/// Arbitrary pulse kernel built from explicit taps
///
/// No validation happens here; the formatter rejects an empty kernel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PulseKernel {
    taps: Vec<Complex32>,
}

impl PulseKernel {
    /// Wrap complex taps
    pub fn new(taps: Vec<Complex32>) -> Self {
        Self { taps }
    }

    /// Build from real-valued taps
    pub fn from_real(taps: &[f32]) -> Self {
        Self {
            taps: taps.iter().map(|&t| Complex32::new(t, 0.0)).collect(),
        }
    }

    /// Copy the taps of any other pulse shape
    pub fn from_shape<P: PulseShape + ?Sized>(shape: &P) -> Self {
        Self {
            taps: shape.taps().to_vec(),
        }
    }
}

impl PulseShape for PulseKernel {
    fn taps(&self) -> &[Complex32] {
        &self.taps
    }

    fn span_symbols(&self) -> usize {
        0
    }
}
