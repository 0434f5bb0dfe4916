//! Model parameters
//!
//! Run-wide configuration, validated once at construction and immutable
//! afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::genome::BitString;

/// Parameters of a single evolution run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelParameters {
    n_genes: usize,
    mutation_chance: f64,
    pop_size: usize,
    target: u64,
}

impl ModelParameters {
    /// Create parameters with a target drawn uniformly at random from the
    /// representable range `[0, 2^n_genes - 1]`
    pub fn new<R: Rng>(
        n_genes: usize,
        mutation_chance: f64,
        pop_size: usize,
        rng: &mut R,
    ) -> ConfigResult<Self> {
        Self::validate(n_genes, mutation_chance, pop_size)?;
        let target = rng.gen_range(0..=max_target(n_genes));
        Ok(Self {
            n_genes,
            mutation_chance,
            pop_size,
            target,
        })
    }

    /// Create parameters with an explicit target value
    pub fn with_target(
        n_genes: usize,
        mutation_chance: f64,
        pop_size: usize,
        target: u64,
    ) -> ConfigResult<Self> {
        Self::validate(n_genes, mutation_chance, pop_size)?;
        if target > max_target(n_genes) {
            return Err(ConfigError::TargetOutOfRange { target, n_genes });
        }
        Ok(Self {
            n_genes,
            mutation_chance,
            pop_size,
            target,
        })
    }

    fn validate(n_genes: usize, mutation_chance: f64, pop_size: usize) -> ConfigResult<()> {
        if n_genes == 0 {
            return Err(ConfigError::EmptyGenome);
        }
        if n_genes > BitString::MAX_LEN {
            return Err(ConfigError::GenomeTooWide(n_genes));
        }
        if pop_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(0.0..=1.0).contains(&mutation_chance) {
            return Err(ConfigError::MutationChanceOutOfRange(mutation_chance));
        }
        Ok(())
    }

    /// Number of bits per genome
    pub fn n_genes(&self) -> usize {
        self.n_genes
    }

    /// Per-individual chance of injecting a mutated clone each generation
    pub fn mutation_chance(&self) -> f64 {
        self.mutation_chance
    }

    /// Size of the initial population
    pub fn pop_size(&self) -> usize {
        self.pop_size
    }

    /// The integer value the search converges toward
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Largest value representable in this bit width
    pub fn max_target(&self) -> u64 {
        max_target(self.n_genes)
    }
}

fn max_target(n_genes: usize) -> u64 {
    (1u64 << n_genes) - 1
}
