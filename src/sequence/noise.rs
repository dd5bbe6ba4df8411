//! Bipolar noise bursts
//!
//! Reference signals for correlation-based detection. Each burst is a
//! random ±level sequence shaped by the same impulse-train and pulse
//! convolution as the data waveform, without bipolar mapping or precoding.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustfft::num_complex::Complex32;
use tracing::debug;

use super::checked_length;
use crate::error::{Result, WaveformError};
use crate::formatter::{convolve_full, upsample};
use crate::traits::PulseShape;
use crate::waveform::Waveform;

/// Noise burst generator with an owned, seeded RNG
///
/// Bursts drawn one after another from the same instance continue one
/// random stream, so a low-level burst drawn second depends on the seed
/// and on the length of the first.
pub struct NoiseBurstGenerator {
    rng: ChaCha8Rng,
}

impl NoiseBurstGenerator {
    /// Create a generator with the specified seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw `length` values uniformly from {+level, -level}
    pub fn generate_burst(&mut self, length: i64, level: f32) -> Result<Vec<f32>> {
        let length = checked_length(length)?;
        if !level.is_finite() || level <= 0.0 {
            return Err(WaveformError::InvalidAmplitude(level));
        }

        let burst: Vec<f32> = (0..length)
            .map(|_| if self.rng.gen::<bool>() { level } else { -level })
            .collect();

        debug!(length, level, "generated noise burst");
        Ok(burst)
    }
}

/// Draw a single burst from a fresh generator seeded with `seed`
pub fn generate_burst(seed: u64, length: i64, level: f32) -> Result<Vec<f32>> {
    NoiseBurstGenerator::from_seed(seed).generate_burst(length, level)
}

/// Upsample a burst and convolve it with the pulse
pub fn shape_burst<P: PulseShape + ?Sized>(
    burst: &[f32],
    samples_per_symbol: usize,
    pulse: &P,
) -> Result<Waveform> {
    if samples_per_symbol < 1 {
        return Err(WaveformError::InvalidT(samples_per_symbol));
    }
    if pulse.taps().is_empty() {
        return Err(WaveformError::EmptyKernel);
    }
    if burst.is_empty() {
        return Err(WaveformError::EmptyInput);
    }

    let train = upsample(burst, samples_per_symbol)?;
    Ok(Waveform::new(convolve_full(&train, pulse.taps())))
}

/// A burst and the number of zero samples that precede it on the timeline
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub leading_gap: usize,
    pub waveform: &'a Waveform,
}

/// Lay bursts out on one timeline: gap, burst, gap, burst, ...
pub fn place_bursts(placements: &[Placement<'_>]) -> Waveform {
    let total: usize = placements
        .iter()
        .map(|p| p.leading_gap + p.waveform.len())
        .sum();

    let mut timeline = Vec::with_capacity(total);
    for placement in placements {
        timeline.resize(timeline.len() + placement.leading_gap, Complex32::new(0.0, 0.0));
        timeline.extend_from_slice(placement.waveform.samples());
    }

    Waveform::new(timeline)
}
