//! Diagnostics and statistics
//!
//! Per-generation and per-run statistics for reporting layers: generation
//! counts, best and mean fitness, and the population-size trend, plus total
//! wall-clock time for a run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Statistics for a single generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Population size after this generation's replacement
    pub population_size: usize,
    /// Best fitness in this generation
    pub best_fitness: i64,
    /// Mean fitness over the replaced population
    pub mean_fitness: f64,
}

impl GenerationStats {
    /// Create stats for one generation
    pub fn new(
        generation: usize,
        population_size: usize,
        best_fitness: i64,
        mean_fitness: f64,
    ) -> Self {
        Self {
            generation,
            population_size,
            best_fitness,
            mean_fitness,
        }
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Best fitness across all recorded generations
    pub fn best_fitness(&self) -> Option<i64> {
        self.generations.iter().map(|g| g.best_fitness).max()
    }

    /// History of best fitness values per generation
    pub fn best_fitness_history(&self) -> Vec<i64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// History of population sizes per generation
    pub fn population_size_history(&self) -> Vec<usize> {
        self.generations.iter().map(|g| g.population_size).collect()
    }

    /// Mean population size across the run
    pub fn mean_population_size(&self) -> Option<f64> {
        if self.generations.is_empty() {
            return None;
        }
        let sum: usize = self.generations.iter().map(|g| g.population_size).sum();
        Some(sum as f64 / self.generations.len() as f64)
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Best fitness: {}\n\
             - Avg. population size: {:.2}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.num_generations(),
            self.best_fitness()
                .map_or_else(|| "n/a".to_string(), |f| f.to_string()),
            self.mean_population_size().unwrap_or(0.0),
            self.total_runtime_ms,
            self.termination_reason.as_deref().unwrap_or("unknown")
        )
    }
}
