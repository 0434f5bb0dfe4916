//! Run driver
//!
//! The engine has no built-in termination, so this module owns the loop:
//! call [`Engine::step`] until a termination criterion fires, recording
//! per-generation statistics and emitting a `tracing` event per generation.

use std::time::Instant;

use rand::Rng;
use tracing::debug;

use crate::diagnostics::{EvolutionStats, GenerationStats};
use crate::engine::Engine;
use crate::termination::{
    AnyOf, EvolutionState, MaxGenerations, TargetReached, TerminationCriterion,
};

/// Outcome of a completed run
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Bit-string rendering of the best genome
    pub best_solution: String,
    /// Integer value of the best genome
    pub best_estimate: u64,
    /// Fitness of the best genome; `0` means the target was matched exactly
    pub best_fitness: i64,
    /// Generations completed
    pub generations: usize,
    /// Per-generation statistics and total wall-clock time
    pub stats: EvolutionStats,
}

/// Drives an [`Engine`] until a termination criterion fires
pub struct Runner<T: TerminationCriterion> {
    termination: T,
}

impl Runner<AnyOf> {
    /// Run until the target is matched exactly, bounded by `max_generations`
    /// as a safety net
    pub fn until_target(max_generations: usize) -> Self {
        Self::new(AnyOf::new(vec![
            Box::new(TargetReached),
            Box::new(MaxGenerations::new(max_generations)),
        ]))
    }
}

impl<T: TerminationCriterion> Runner<T> {
    /// Create a runner with the given termination criterion
    pub fn new(termination: T) -> Self {
        Self { termination }
    }

    /// Step the engine until the criterion fires
    pub fn run<R: Rng>(&self, engine: &mut Engine, rng: &mut R) -> RunOutcome {
        let start = Instant::now();
        let mut stats = EvolutionStats::new();

        loop {
            engine.step(rng);

            let generation = engine.population().generation();
            let generation_stats = GenerationStats::new(
                generation,
                engine.population().len(),
                engine.best_fitness(),
                engine.avg_fitness(),
            );
            debug!(
                generation,
                best_fitness = generation_stats.best_fitness,
                best_solution = %engine.best_solution(),
                avg_fitness = generation_stats.mean_fitness,
                population = generation_stats.population_size,
                "generation complete"
            );
            stats.record(generation_stats);

            let state = EvolutionState {
                generation,
                best_fitness: engine.best_fitness(),
                population_size: engine.population().len(),
            };
            if self.termination.should_terminate(&state) {
                stats.set_termination_reason(self.termination.reason());
                break;
            }
        }

        stats.set_runtime(start.elapsed());

        let best = engine
            .best()
            .expect("run() completed at least one step")
            .clone();
        RunOutcome {
            best_solution: best.solution(),
            best_estimate: best.estimate(),
            best_fitness: best.fitness_value(),
            generations: stats.num_generations(),
            stats,
        }
    }
}
