//! Raised Cosine (RC) pulse shaping kernel
//!
//! Full Nyquist pulse: zero ISI at symbol centers without a matched
//! receive filter. Not the default pulse for the experiment.

use rustfft::num_complex::Complex32;
use std::f64::consts::PI;

use crate::error::{Result, WaveformError};
use crate::traits::PulseShape;
use crate::utils::sinc;

/// Raised Cosine kernel
#[derive(Debug, Clone)]
pub struct RaisedCosine {
    taps: Vec<Complex32>,
    span: usize,
    samples_per_symbol: usize,
    rolloff: f64,
}

impl RaisedCosine {
    /// Create a new raised-cosine kernel
    ///
    /// # Arguments
    /// * `span` - Kernel span in symbols (each side of center)
    /// * `samples_per_symbol` - Number of samples per symbol period
    /// * `rolloff` - Roll-off factor α in [0, 1]
    pub fn new(span: usize, samples_per_symbol: usize, rolloff: f64) -> Result<Self> {
        if span == 0 || samples_per_symbol == 0 {
            return Err(WaveformError::InvalidPulse(format!(
                "span {} and samples per symbol {} must be non-zero",
                span, samples_per_symbol
            )));
        }
        if !(0.0..=1.0).contains(&rolloff) {
            return Err(WaveformError::InvalidPulse(format!(
                "roll-off {} outside [0, 1]",
                rolloff
            )));
        }

        let taps = generate_rc_coefficients(samples_per_symbol, rolloff, span)
            .into_iter()
            .map(|h| Complex32::new(h as f32, 0.0))
            .collect();

        Ok(Self {
            taps,
            span,
            samples_per_symbol,
            rolloff,
        })
    }

    /// Create with default parameters (α=0.35, span=6)
    pub fn default_for_sps(samples_per_symbol: usize) -> Result<Self> {
        Self::new(super::DEFAULT_SPAN, samples_per_symbol, super::DEFAULT_ROLLOFF)
    }

    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    pub fn rolloff(&self) -> f64 {
        self.rolloff
    }
}

impl PulseShape for RaisedCosine {
    fn taps(&self) -> &[Complex32] {
        &self.taps
    }

    fn span_symbols(&self) -> usize {
        self.span
    }
}

/// Generate RC impulse response, unit center tap
///
/// h(t) = sinc(t) · cos(παt) / (1 − (2αt)²) with t in symbol periods.
/// At t = ±1/(2α) the L'Hôpital limit (π/4)·sinc(1/(2α)) is used.
fn generate_rc_coefficients(samples_per_symbol: usize, alpha: f64, span: usize) -> Vec<f64> {
    let filter_len = 2 * span * samples_per_symbol + 1;
    let center = (filter_len - 1) as f64 / 2.0;

    (0..filter_len)
        .map(|i| {
            let t = (i as f64 - center) / samples_per_symbol as f64;
            let x = 2.0 * alpha * t;

            if alpha > 0.0 && (x.abs() - 1.0).abs() < 1e-9 {
                PI / 4.0 * sinc(1.0 / (2.0 * alpha))
            } else {
                sinc(t) * (PI * alpha * t).cos() / (1.0 - x * x)
            }
        })
        .collect()
}
