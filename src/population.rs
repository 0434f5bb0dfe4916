//! Population container
//!
//! An ordered collection of individuals plus the percentile-slicing helper
//! used for elite selection. Duplicate genomes are allowed; the size is fixed
//! only for generation 0 and varies afterwards.

use rand::Rng;

use crate::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug)]
pub struct Population {
    individuals: Vec<Individual>,
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a population of random individuals
    pub fn random<R: Rng>(size: usize, n_genes: usize, rng: &mut R) -> Self {
        let individuals = (0..size).map(|_| Individual::random(rng, n_genes)).collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get a mutable iterator over the individuals
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.individuals.iter_mut()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Sort ascending by cached fitness, so the tail holds the fittest
    ///
    /// Unevaluated individuals sort first (worst).
    pub fn sort_by_fitness(&mut self) {
        self.individuals
            .sort_by_key(|i| i.fitness().unwrap_or(i64::MIN));
    }

    /// Mean fitness against `target` over the whole population
    ///
    /// Computed on demand from the genomes so freshly created offspring count
    /// with their real fitness rather than a stale cache. `None` for an empty
    /// population.
    pub fn mean_fitness(&self, target: u64) -> Option<f64> {
        if self.individuals.is_empty() {
            return None;
        }
        let sum: i64 = self
            .individuals
            .iter()
            .map(|i| i.fitness_against(target))
            .sum();
        Some(sum as f64 / self.individuals.len() as f64)
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}

/// Slice off the top `fraction` of `items`
///
/// Returns `&items[floor(len * (1 - fraction))..]`. On a population sorted
/// ascending by fitness this is the fittest `fraction`; the start index is
/// computed in f64 and truncated, so products that land just below an
/// integer keep one extra element (`10 * (1 - 0.8)` is just under 2 and
/// keeps 9 of 10).
pub fn top_fraction<T>(items: &[T], fraction: f64) -> &[T] {
    let start = (items.len() as f64 * (1.0 - fraction)) as usize;
    &items[start.min(items.len())..]
}
