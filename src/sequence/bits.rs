//! Framed random bit sequences
//!
//! Produces `start ++ random ++ stop` where the random part is drawn from
//! a seeded ChaCha stream.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::checked_length;
use crate::error::{Result, WaveformError};

/// Immutable sequence of bits in {0, 1}
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<u8>,
}

impl BitSequence {
    /// Wrap raw bits, rejecting anything other than 0 or 1
    pub fn new(bits: Vec<u8>) -> Result<Self> {
        validate_bits(&bits)?;
        Ok(Self { bits })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits as real levels (0.0 / 1.0), the input form of the formatter
    pub fn levels(&self) -> Vec<f32> {
        self.bits.iter().map(|&b| b as f32).collect()
    }
}

fn validate_bits(bits: &[u8]) -> Result<()> {
    match bits.iter().find(|&&b| b > 1) {
        Some(&bad) => Err(WaveformError::InvalidMarker(bad)),
        None => Ok(()),
    }
}

/// Random bit generator with an owned, seeded RNG
///
/// Successive calls on one instance continue the same random stream.
pub struct BitSequenceGenerator {
    rng: ChaCha8Rng,
}

impl BitSequenceGenerator {
    /// Create a generator with the specified seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate `length` random bits framed by the marker sequences
    ///
    /// # Arguments
    /// * `length` - Number of random bits, must not be negative
    /// * `start` - Marker placed before the random bits (may be empty)
    /// * `stop` - Marker placed after the random bits (may be empty)
    pub fn generate(&mut self, length: i64, start: &[u8], stop: &[u8]) -> Result<BitSequence> {
        let length = checked_length(length)?;
        validate_bits(start)?;
        validate_bits(stop)?;

        let mut bits = Vec::with_capacity(start.len() + length + stop.len());
        bits.extend_from_slice(start);
        bits.extend((0..length).map(|_| self.rng.gen::<bool>() as u8));
        bits.extend_from_slice(stop);

        debug!(
            start = start.len(),
            random = length,
            stop = stop.len(),
            "generated bit sequence"
        );

        Ok(BitSequence { bits })
    }
}

/// Generate a framed bit sequence from a fresh generator seeded with `seed`
pub fn generate_bits(seed: u64, length: i64, start: &[u8], stop: &[u8]) -> Result<BitSequence> {
    BitSequenceGenerator::from_seed(seed).generate(length, start, stop)
}
