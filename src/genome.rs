//! Bit string genome
//!
//! This module provides the fixed-length bit string genome the search evolves.
//! Index 0 holds the most significant bit, so the `Display` rendering reads as
//! an ordinary binary number.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed-length bit string genome
///
/// The length is fixed at construction and identical across all individuals
/// of a population. Genomes are value types: mutation and crossover produce
/// new bit strings rather than editing in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString {
    /// The bits of this genome, most significant first
    bits: Vec<bool>,
}

impl BitString {
    /// Widest genome whose value (and fitness delta) fits the integer types
    pub const MAX_LEN: usize = 63;

    /// Create a new bit string with the given bits
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create a bit string of independent uniform-random bits
    pub fn random<R: Rng>(rng: &mut R, length: usize) -> Self {
        Self {
            bits: (0..length).map(|_| rng.gen()).collect(),
        }
    }

    /// Create an all-zeros bit string of the given length
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// Create an all-ones bit string of the given length
    pub fn ones(length: usize) -> Self {
        Self {
            bits: vec![true; length],
        }
    }

    /// Create a bit string holding `value` in `length` bits, MSB first
    pub fn from_value(value: u64, length: usize) -> Self {
        assert!(
            length <= Self::MAX_LEN,
            "length must be <= {} for u64 conversion",
            Self::MAX_LEN
        );
        let bits = (0..length)
            .rev()
            .map(|i| (value >> i) & 1 == 1)
            .collect();
        Self { bits }
    }

    /// Read the bits as a big-endian binary number
    pub fn value(&self) -> u64 {
        assert!(
            self.bits.len() <= Self::MAX_LEN,
            "bit strings wider than {} bits do not fit a u64 estimate",
            Self::MAX_LEN
        );
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }

    /// Get the length of the bit string
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the bit string is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get a specific bit
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Get the bits as a slice
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Return a copy with the bit at `index` flipped
    ///
    /// Panics if `index` is out of range.
    pub fn flipped(&self, index: usize) -> Self {
        assert!(index < self.bits.len(), "flip index out of range");
        let mut bits = self.bits.clone();
        bits[index] = !bits[index];
        Self { bits }
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<BitString> for Vec<bool> {
    fn from(genome: BitString) -> Self {
        genome.bits
    }
}

impl std::ops::Index<usize> for BitString {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
