//! Evolution engine
//!
//! Orchestrates one generation at a time: fitness evaluation with best-ever
//! tracking for the current generation, elitist survival, mate selection with
//! inbreeding avoidance, and additive mutation injection. The engine never
//! terminates on its own; drivers call [`Engine::step`] until
//! [`Engine::best_fitness`] reaches zero (see [`crate::runner`]).

use rand::Rng;
use tracing::trace;

use crate::individual::Individual;
use crate::params::ModelParameters;
use crate::population::{top_fraction, Population};

/// Fraction of the population (by fitness) eligible as mating elites
pub const ELITE_FRACTION: f64 = 0.80;

/// Fraction of the elites that survives into the next generation unchanged
pub const ELITE_SURVIVOR_FRACTION: f64 = 0.50;

/// Base number of offspring per generation, before jitter
const MATE_TARGET_BASE: i64 = 100;

/// Offspring count jitter: one uniform draw from `[-JITTER, +JITTER]` per
/// generation
const MATE_TARGET_JITTER: i64 = 50;

/// Attempts at drawing a mate that differs from parent1 before falling back
/// to a mutated clone of the last candidate
const MAX_MATE_ATTEMPTS: usize = 100;

/// Generational engine evolving bit strings toward the configured target
pub struct Engine {
    mp: ModelParameters,
    population: Population,
    best: Option<Individual>,
}

impl Engine {
    /// Create an engine with a fresh random population of `pop_size`
    /// individuals
    pub fn new<R: Rng>(mp: ModelParameters, rng: &mut R) -> Self {
        let population = Population::random(mp.pop_size(), mp.n_genes(), rng);
        Self {
            mp,
            population,
            best: None,
        }
    }

    /// Create an engine over a prepared population
    ///
    /// The individuals must share the parameter set's genome length.
    pub fn from_population(mp: ModelParameters, population: Population) -> Self {
        debug_assert!(population
            .iter()
            .all(|i| i.genome().len() == mp.n_genes()));
        Self {
            mp,
            population,
            best: None,
        }
    }

    /// The run parameters
    pub fn params(&self) -> &ModelParameters {
        &self.mp
    }

    /// The current population
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Advance the search by one generation
    ///
    /// Evaluates every individual against the target, records the best of
    /// this generation (strictly-greater wins, so ties go to the earliest
    /// index), then replaces the population with elite survivors, offspring,
    /// and injected mutants.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let mut best_fitness = i64::MIN;
        let mut best_index = None;
        for (index, individual) in self.population.iter_mut().enumerate() {
            individual.evaluate(self.mp.target());
            if individual.fitness_value() > best_fitness {
                best_fitness = individual.fitness_value();
                best_index = Some(index);
            }
        }
        if let Some(index) = best_index {
            self.best = Some(self.population[index].clone());
        }

        self.evolve(rng);
        self.population.increment_generation();
    }

    /// Replace the population: elite survivors, then offspring, then mutants
    fn evolve<R: Rng>(&mut self, rng: &mut R) {
        self.population.sort_by_fitness();

        let next = {
            let all = self.population.individuals();
            let elites = top_fraction(all, ELITE_FRACTION);
            let survivors = top_fraction(elites, ELITE_SURVIVOR_FRACTION);

            let mut next: Vec<Individual> = survivors.to_vec();

            let jitter = rng.gen_range(-MATE_TARGET_JITTER..=MATE_TARGET_JITTER);
            let n_mates = ((MATE_TARGET_BASE + jitter) - next.len() as i64).max(0);
            for _ in 0..n_mates {
                let parent1 = &elites[rng.gen_range(0..elites.len())];
                let parent2 = pick_mate(all, parent1, rng);
                next.push(parent1.mate(&parent2, rng));
            }

            let mut n_mutants = 0usize;
            for individual in all {
                if rng.gen::<f64>() < self.mp.mutation_chance() {
                    next.push(individual.mutate(rng));
                    n_mutants += 1;
                }
            }

            trace!(
                survivors = survivors.len(),
                mates = n_mates,
                mutants = n_mutants,
                "population evolved"
            );
            next
        };

        let generation = self.population.generation();
        let mut population = Population::from_individuals(next);
        population.set_generation(generation);
        self.population = population;
    }

    /// Mean fitness of the current population, computed against the target
    pub fn avg_fitness(&self) -> f64 {
        self.population
            .mean_fitness(self.mp.target())
            .expect("population is never empty")
    }

    /// Best individual of the most recently evaluated generation
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Fitness of the latest generation's best individual
    ///
    /// Panics if [`Engine::step`] has never been called.
    pub fn best_fitness(&self) -> i64 {
        self.latest_best().fitness_value()
    }

    /// Solution string of the latest generation's best individual
    ///
    /// Panics if [`Engine::step`] has never been called.
    pub fn best_solution(&self) -> String {
        self.latest_best().solution()
    }

    fn latest_best(&self) -> &Individual {
        self.best
            .as_ref()
            .expect("step() has not been called")
    }
}

/// Draw a mate for `parent1` from the whole population
///
/// Samples uniformly up to [`MAX_MATE_ATTEMPTS`] times, accepting the first
/// candidate whose genome differs from `parent1`. If every draw collides, the
/// last candidate is mutated to break the tie.
fn pick_mate<R: Rng>(pool: &[Individual], parent1: &Individual, rng: &mut R) -> Individual {
    let mut last = None;
    for _ in 0..MAX_MATE_ATTEMPTS {
        let candidate = &pool[rng.gen_range(0..pool.len())];
        if candidate != parent1 {
            return candidate.clone();
        }
        last = Some(candidate);
    }
    last.expect("mate pool is never empty").mutate(rng)
}
