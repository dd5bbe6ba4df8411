//! FFT cross-correlation
//!
//! Locates a reference noise burst inside a received or combined timeline.
//! Full-mode correlation: `signal` convolved with the time-reversed
//! conjugate of `reference`, `N + M - 1` output samples.

use rustfft::num_complex::Complex32;
use rustfft::FftPlanner;
use tracing::debug;

use crate::error::{Result, WaveformError};

/// Correlation peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Index into the full correlation output
    pub index: usize,
    /// Offset of the reference start within the signal
    pub lag: i64,
    pub magnitude: f32,
}

/// Full linear convolution via zero-padded FFTs
pub fn fft_convolve(a: &[Complex32], b: &[Complex32]) -> Result<Vec<Complex32>> {
    if a.is_empty() || b.is_empty() {
        return Err(WaveformError::EmptyInput);
    }

    let out_len = a.len() + b.len() - 1;
    let fft_size = out_len.next_power_of_two();

    let mut planner = FftPlanner::<f32>::new();
    let forward = planner.plan_fft_forward(fft_size);
    let inverse = planner.plan_fft_inverse(fft_size);

    let zero = Complex32::new(0.0, 0.0);
    let mut fa = a.to_vec();
    fa.resize(fft_size, zero);
    let mut fb = b.to_vec();
    fb.resize(fft_size, zero);

    forward.process(&mut fa);
    forward.process(&mut fb);

    for (x, y) in fa.iter_mut().zip(&fb) {
        *x *= *y;
    }

    inverse.process(&mut fa);

    // rustfft's inverse is unscaled
    let norm = 1.0 / fft_size as f32;
    fa.truncate(out_len);
    for x in fa.iter_mut() {
        *x *= norm;
    }

    Ok(fa)
}

/// Full cross-correlation of `signal` against `reference`
pub fn cross_correlate(signal: &[Complex32], reference: &[Complex32]) -> Result<Vec<Complex32>> {
    let matched: Vec<Complex32> = reference.iter().rev().map(|r| r.conj()).collect();
    let corr = fft_convolve(signal, &matched)?;
    debug!(
        signal = signal.len(),
        reference = reference.len(),
        "cross-correlated"
    );
    Ok(corr)
}

/// Largest-magnitude correlation sample
///
/// `reference_len` converts the output index into a lag; a lag of `g`
/// means the reference starts `g` samples into the signal.
pub fn find_peak(corr: &[Complex32], reference_len: usize) -> Option<Peak> {
    let (index, magnitude) = crate::utils::peak_magnitude(corr)?;
    Some(Peak {
        index,
        lag: index as i64 - (reference_len as i64 - 1),
        magnitude,
    })
}
