//! Seeded sequence generators
//!
//! Both generators own an explicit `ChaCha8Rng`, so runs with different
//! seeds never share random state.

mod bits;
mod noise;

pub use bits::{generate_bits, BitSequence, BitSequenceGenerator};
pub use noise::{generate_burst, place_bursts, shape_burst, NoiseBurstGenerator, Placement};

use crate::error::{Result, WaveformError};

/// Convert a signed caller length into a sample count
pub(crate) fn checked_length(length: i64) -> Result<usize> {
    usize::try_from(length).map_err(|_| WaveformError::InvalidLength(length))
}
