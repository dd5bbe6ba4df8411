//! Individual formatting stages
//!
//! Each stage allocates a new output and leaves its input untouched.
//! The formatter chains all five; noise shaping only uses upsampling
//! and convolution.

use rustfft::num_complex::Complex32;

use crate::error::{Result, WaveformError};

/// Map binary levels onto bipolar ones: 0 → -1, every other value unchanged
pub fn bipolar_map(values: &[f32]) -> Vec<f32> {
    values
        .iter()
        .map(|&v| if v == 0.0 { -1.0 } else { v })
        .collect()
}

/// Multiply every value by `amplitude`
pub fn scale(values: &[f32], amplitude: f32) -> Vec<f32> {
    values.iter().map(|&v| v * amplitude).collect()
}

/// Largest sample count a single waveform buffer can hold
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<Complex32>();

/// Impulse train: value `i` at index `i * samples_per_symbol`, zero elsewhere
///
/// Fails with `InvalidT` when `values.len() * samples_per_symbol` does not
/// fit in one buffer.
pub fn upsample(values: &[f32], samples_per_symbol: usize) -> Result<Vec<Complex32>> {
    let len = values
        .len()
        .checked_mul(samples_per_symbol)
        .filter(|&n| n <= MAX_SAMPLES)
        .ok_or(WaveformError::InvalidT(samples_per_symbol))?;

    let mut train = vec![Complex32::new(0.0, 0.0); len];
    for (i, &v) in values.iter().enumerate() {
        train[i * samples_per_symbol] = Complex32::new(v, 0.0);
    }
    Ok(train)
}

/// Full discrete convolution, output length `input.len() + kernel.len() - 1`
///
/// Computed by scattering each non-zero input sample across the kernel.
/// Zero inputs contribute nothing, so skipping them is exact and keeps the
/// cost proportional to the number of symbols for an impulse train.
/// Returns an empty vector if either argument is empty.
pub fn convolve_full(input: &[Complex32], kernel: &[Complex32]) -> Vec<Complex32> {
    if input.is_empty() || kernel.is_empty() {
        return Vec::new();
    }

    let zero = Complex32::new(0.0, 0.0);
    let mut output = vec![zero; input.len() + kernel.len() - 1];

    for (k, &x) in input.iter().enumerate() {
        if x == zero {
            continue;
        }
        for (out, &h) in output[k..k + kernel.len()].iter_mut().zip(kernel) {
            *out += x * h;
        }
    }

    output
}

/// Apply a single precoding gain to every sample
pub fn apply_precoding(mut samples: Vec<Complex32>, gain: Complex32) -> Vec<Complex32> {
    for s in samples.iter_mut() {
        *s *= gain;
    }
    samples
}
