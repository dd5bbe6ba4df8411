//! Waveform formatter
//!
//! Turns a bit or amplitude sequence into a complex baseband waveform:
//! bipolar mapping, amplitude scaling, impulse-train upsampling, pulse
//! shaping and precoding, in that order.

mod stages;

pub use stages::{apply_precoding, bipolar_map, convolve_full, scale, upsample};

use rustfft::num_complex::Complex32;
use tracing::debug;

use crate::error::{Result, WaveformError};
use crate::sequence::BitSequence;
use crate::traits::PulseShape;
use crate::waveform::Waveform;

/// Formatting parameters for one MIMO stream
///
/// Holds only immutable parameters; `format` takes `&self` and returns a
/// new waveform each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformFormatter {
    amplitude: f32,
    samples_per_symbol: usize,
    precoding: Complex32,
}

impl WaveformFormatter {
    /// Create a formatter with unit precoding
    ///
    /// # Arguments
    /// * `amplitude` - Voltage scaling applied after bipolar mapping
    /// * `samples_per_symbol` - Upsampling factor T
    ///
    /// Parameters are validated when formatting.
    pub fn new(amplitude: f32, samples_per_symbol: usize) -> Self {
        Self {
            amplitude,
            samples_per_symbol,
            precoding: Complex32::new(1.0, 0.0),
        }
    }

    /// Set the per-stream precoding scalar
    pub fn with_precoding(mut self, precoding: Complex32) -> Self {
        self.precoding = precoding;
        self
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    pub fn precoding(&self) -> Complex32 {
        self.precoding
    }

    /// Output length for `symbols` input symbols and a kernel of `kernel_len` taps
    pub fn output_len(&self, symbols: usize, kernel_len: usize) -> usize {
        symbols
            .saturating_mul(self.samples_per_symbol)
            .saturating_add(kernel_len)
            .saturating_sub(1)
    }

    /// Format a symbol sequence
    ///
    /// # Arguments
    /// * `symbols` - Values in {0, 1} or already bipolar {-1, 1}
    /// * `pulse` - Pulse shaping kernel
    ///
    /// # Returns
    /// Waveform of `symbols.len() * T + pulse.filter_len() - 1` samples
    pub fn format<P: PulseShape + ?Sized>(&self, symbols: &[f32], pulse: &P) -> Result<Waveform> {
        self.validate()?;
        if pulse.taps().is_empty() {
            return Err(WaveformError::EmptyKernel);
        }
        if symbols.is_empty() {
            return Err(WaveformError::EmptyInput);
        }

        let bipolar = bipolar_map(symbols);
        let scaled = scale(&bipolar, self.amplitude);
        let train = upsample(&scaled, self.samples_per_symbol)?;
        let shaped = convolve_full(&train, pulse.taps());
        let precoded = apply_precoding(shaped, self.precoding);

        debug!(
            symbols = symbols.len(),
            sps = self.samples_per_symbol,
            taps = pulse.filter_len(),
            samples = precoded.len(),
            "formatted waveform"
        );

        Ok(Waveform::new(precoded))
    }

    /// Format a generated bit sequence
    pub fn format_bits<P: PulseShape + ?Sized>(
        &self,
        bits: &BitSequence,
        pulse: &P,
    ) -> Result<Waveform> {
        self.format(&bits.levels(), pulse)
    }

    fn validate(&self) -> Result<()> {
        if self.samples_per_symbol < 1 {
            return Err(WaveformError::InvalidT(self.samples_per_symbol));
        }
        if !self.amplitude.is_finite() || self.amplitude <= 0.0 {
            return Err(WaveformError::InvalidAmplitude(self.amplitude));
        }
        Ok(())
    }
}
