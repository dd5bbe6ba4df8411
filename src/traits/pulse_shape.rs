//! PulseShape trait - impulse response used for pulse shaping
//!
//! The formatter convolves the upsampled impulse train with these taps.
//! Kernels are treated as opaque, immutable data.

use rustfft::num_complex::Complex32;

/// Pulse shaping kernel trait
///
/// Implementations provide a finite complex impulse response.
/// Object safe so the pulse can be chosen from configuration at runtime.
pub trait PulseShape: Send + Sync {
    /// Kernel taps in time order
    fn taps(&self) -> &[Complex32];

    /// Length of the kernel in samples
    fn filter_len(&self) -> usize {
        self.taps().len()
    }

    /// Kernel span in symbols (each side of center), 0 for one-sided pulses
    fn span_symbols(&self) -> usize;
}
