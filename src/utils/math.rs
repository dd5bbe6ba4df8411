//! Small DSP math helpers

use rustfft::num_complex::Complex32;
use std::f64::consts::PI;

/// Normalized sinc: sin(πx) / (πx), 1 at the origin
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Convert linear power to dB
#[inline]
pub fn power_to_db(power: f64) -> f64 {
    10.0 * power.log10()
}

/// Mean power of a complex sample block (0 for an empty block)
pub fn mean_power(samples: &[Complex32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|s| s.norm_sqr() as f64).sum();
    sum / samples.len() as f64
}

/// Largest sample magnitude and its index
pub fn peak_magnitude(samples: &[Complex32]) -> Option<(usize, f32)> {
    samples
        .iter()
        .map(|s| s.norm())
        .enumerate()
        .fold(None, |best, (idx, mag)| match best {
            Some((_, best_mag)) if best_mag >= mag => best,
            _ => Some((idx, mag)),
        })
}
