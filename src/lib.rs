//! # binevo
//!
//! A small genetic algorithm library that evolves fixed-length bit-string
//! genomes toward an integer target value.
//!
//! The search works on a population of [`Individual`]s, each wrapping a
//! [`BitString`] genome. Fitness is the negated distance between the genome's
//! binary value and the target, so `0` means an exact match. Each
//! [`Engine::step`] evaluates the population, carries the best elites over
//! unchanged, mates elites against the whole population with inbreeding
//! avoidance, and injects random point mutations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use binevo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let mp = ModelParameters::new(8, 0.05, 10, &mut rng)?;
//! let mut engine = Engine::new(mp, &mut rng);
//!
//! let outcome = Runner::until_target(10_000).run(&mut engine, &mut rng);
//! println!("{} in {} generations", outcome.best_solution, outcome.generations);
//! ```
//!
//! All randomized operations take an explicit `&mut impl Rng`, so whole runs
//! are reproducible from a seed.
//!
//! [`Individual`]: individual::Individual
//! [`BitString`]: genome::BitString
//! [`Engine::step`]: engine::Engine::step

pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod genome;
pub mod individual;
pub mod params;
pub mod population;
pub mod runner;
pub mod termination;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::diagnostics::{EvolutionStats, GenerationStats};
    pub use crate::engine::Engine;
    pub use crate::error::ConfigError;
    pub use crate::genome::BitString;
    pub use crate::individual::Individual;
    pub use crate::params::ModelParameters;
    pub use crate::population::{top_fraction, Population};
    pub use crate::runner::{RunOutcome, Runner};
    pub use crate::termination::{
        AnyOf, EvolutionState, MaxGenerations, TargetReached, TerminationCriterion,
    };
}
