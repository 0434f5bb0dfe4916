//! Individual wrapper type
//!
//! An individual wraps a bit string genome with a cached fitness value and
//! carries the genetic operators: evaluation against the target, uniform
//! crossover ("mate") and single-bit mutation. Genomes are immutable once
//! constructed; both operators return new individuals.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::BitString;

/// An individual in the population
///
/// `fitness` is `None` until [`Individual::evaluate`] runs. Fitness is always
/// `<= 0`; zero means the genome's value equals the target exactly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Individual {
    genome: BitString,
    fitness: Option<i64>,
}

impl Individual {
    /// Create a new individual with an unevaluated genome
    pub fn new(genome: BitString) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    /// Create an individual with a genome of uniform-random bits
    pub fn random<R: Rng>(rng: &mut R, n_genes: usize) -> Self {
        Self::new(BitString::random(rng, n_genes))
    }

    /// Get a reference to the genome
    pub fn genome(&self) -> &BitString {
        &self.genome
    }

    /// The genome read as a big-endian binary number
    pub fn estimate(&self) -> u64 {
        self.genome.value()
    }

    /// The genome rendered as a '0'/'1' string
    pub fn solution(&self) -> String {
        self.genome.to_string()
    }

    /// Fitness of this genome against `target`, without touching the cache
    pub fn fitness_against(&self, target: u64) -> i64 {
        -(self.estimate().abs_diff(target) as i64)
    }

    /// Compute and cache estimate distance to `target`, returning the
    /// solution string
    pub fn evaluate(&mut self, target: u64) -> String {
        self.fitness = Some(self.fitness_against(target));
        self.solution()
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Get the cached fitness, if any
    pub fn fitness(&self) -> Option<i64> {
        self.fitness
    }

    /// Get the cached fitness, panicking if not evaluated
    pub fn fitness_value(&self) -> i64 {
        self.fitness.expect("individual has not been evaluated")
    }

    /// Uniform crossover: each offspring bit is drawn from one of the two
    /// parents at the same position, chosen by a fair coin
    ///
    /// Panics if the genomes have different lengths; mating mismatched
    /// genomes is a contract violation, not a recoverable error.
    pub fn mate<R: Rng>(&self, other: &Self, rng: &mut R) -> Self {
        assert_eq!(
            self.genome.len(),
            other.genome.len(),
            "parents must share a genome length"
        );
        let bits = self
            .genome
            .bits()
            .iter()
            .zip(other.genome.bits())
            .map(|(&a, &b)| if rng.gen::<bool>() { a } else { b })
            .collect();
        Self::new(BitString::new(bits))
    }

    /// Return a clone with exactly one uniformly chosen bit flipped
    pub fn mutate<R: Rng>(&self, rng: &mut R) -> Self {
        let flip = rng.gen_range(0..self.genome.len());
        Self::new(self.genome.flipped(flip))
    }
}

/// Equality is genome identity; cached fitness values are not compared
impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.genome == other.genome
    }
}

impl Eq for Individual {}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.genome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_individual_random() {
        let mut rng = StdRng::seed_from_u64(1);
        let ind = Individual::random(&mut rng, 8);
        assert_eq!(ind.genome().len(), 8);
        assert!(!ind.is_evaluated());
    }

    #[test]
    fn test_individual_evaluate() {
        let mut ind = Individual::new(BitString::from_value(5, 4));
        let solution = ind.evaluate(5);
        assert_eq!(solution, "0101");
        assert_eq!(ind.estimate(), 5);
        assert_eq!(ind.fitness_value(), 0);
    }

    #[test]
    fn test_individual_fitness_is_negated_distance() {
        let mut ind = Individual::new(BitString::from_value(3, 4));
        ind.evaluate(10);
        assert_eq!(ind.fitness_value(), -7);

        // symmetric: estimate above the target
        let mut ind = Individual::new(BitString::from_value(15, 4));
        ind.evaluate(10);
        assert_eq!(ind.fitness_value(), -5);
    }

    #[test]
    fn test_individual_fitness_never_positive() {
        for value in 0..16 {
            let mut ind = Individual::new(BitString::from_value(value, 4));
            ind.evaluate(9);
            assert!(ind.fitness_value() <= 0);
            assert_eq!(ind.fitness_value() == 0, value == 9);
        }
    }

    #[test]
    #[should_panic(expected = "individual has not been evaluated")]
    fn test_individual_fitness_value_unevaluated() {
        Individual::new(BitString::zeros(4)).fitness_value();
    }

    #[test]
    fn test_individual_mate_bits_come_from_parents() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = Individual::new(BitString::from_value(0b1100, 4));
        let b = Individual::new(BitString::from_value(0b1010, 4));

        for _ in 0..50 {
            let child = a.mate(&b, &mut rng);
            for (i, &bit) in child.genome().bits().iter().enumerate() {
                assert!(bit == a.genome()[i] || bit == b.genome()[i]);
            }
        }
    }

    #[test]
    fn test_individual_mate_deterministic_for_seed() {
        let a = Individual::new(BitString::from_value(0b1100, 4));
        let b = Individual::new(BitString::from_value(0b0011, 4));

        let c1 = a.mate(&b, &mut StdRng::seed_from_u64(99));
        let c2 = a.mate(&b, &mut StdRng::seed_from_u64(99));
        assert_eq!(c1, c2);
    }

    #[test]
    #[should_panic(expected = "parents must share a genome length")]
    fn test_individual_mate_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(0);
        let a = Individual::new(BitString::zeros(4));
        let b = Individual::new(BitString::zeros(5));
        a.mate(&b, &mut rng);
    }

    #[test]
    fn test_individual_mutate_flips_exactly_one_bit() {
        let mut rng = StdRng::seed_from_u64(5);
        let original = Individual::new(BitString::from_value(0b10110, 5));

        for _ in 0..50 {
            let mutated = original.mutate(&mut rng);
            let differing = original
                .genome()
                .bits()
                .iter()
                .zip(mutated.genome().bits())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 1);
        }
        // the original is untouched
        assert_eq!(original.estimate(), 0b10110);
    }

    #[test]
    fn test_individual_equality_ignores_fitness() {
        let mut a = Individual::new(BitString::from_value(6, 4));
        let b = Individual::new(BitString::from_value(6, 4));
        a.evaluate(0);

        assert!(a.is_evaluated());
        assert!(!b.is_evaluated());
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(a, a);
    }

    #[test]
    fn test_individual_inequality_on_genome() {
        let a = Individual::new(BitString::from_value(6, 4));
        let b = Individual::new(BitString::from_value(7, 4));
        assert_ne!(a, b);
    }

    #[test]
    fn test_individual_serialization() {
        let mut ind = Individual::new(BitString::from_value(9, 6));
        ind.evaluate(9);
        let serialized = serde_json::to_string(&ind).unwrap();
        let deserialized: Individual = serde_json::from_str(&serialized).unwrap();
        assert_eq!(ind, deserialized);
        assert_eq!(deserialized.fitness(), Some(0));
    }
}
