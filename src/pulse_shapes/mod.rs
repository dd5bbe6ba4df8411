//! Pulse shaping kernel implementations
//!
//! Rectangular is the production pulse for the experiment. Raised cosine
//! is available for band-limited runs. Arbitrary taps can be supplied
//! through [`PulseKernel`].

mod kernel;
mod raised_cosine;
mod rectangular;

pub use kernel::PulseKernel;
pub use raised_cosine::RaisedCosine;
pub use rectangular::Rectangular;

/// Default rectangular pulse width in samples
pub const DEFAULT_PULSE_WIDTH: usize = 100;

/// Default raised-cosine roll-off factor
pub const DEFAULT_ROLLOFF: f64 = 0.35;

/// Default raised-cosine span in symbols (each side)
pub const DEFAULT_SPAN: usize = 6;
