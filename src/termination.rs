//! Termination criteria
//!
//! The engine itself runs forever; drivers decide when to stop. The canonical
//! criterion is [`TargetReached`], which fires once some individual's estimate
//! equals the target exactly.

/// Snapshot of a run handed to termination checks after each generation
#[derive(Clone, Copy, Debug)]
pub struct EvolutionState {
    /// Generations completed so far
    pub generation: usize,
    /// Best fitness of the latest generation
    pub best_fitness: i64,
    /// Current population size
    pub population_size: usize,
}

/// Termination criterion trait
pub trait TerminationCriterion {
    /// Check if the run should stop
    fn should_terminate(&self, state: &EvolutionState) -> bool;

    /// Get a description of why termination occurred
    fn reason(&self) -> &'static str;
}

/// Terminate once a perfect-fitness individual appears
#[derive(Clone, Copy, Debug, Default)]
pub struct TargetReached;

impl TerminationCriterion for TargetReached {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        state.best_fitness == 0
    }

    fn reason(&self) -> &'static str {
        "Target reached"
    }
}

/// Terminate after a maximum number of generations
#[derive(Clone, Copy, Debug)]
pub struct MaxGenerations(pub usize);

impl MaxGenerations {
    /// Create a new max generations criterion
    pub fn new(max: usize) -> Self {
        Self(max)
    }
}

impl TerminationCriterion for MaxGenerations {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        state.generation >= self.0
    }

    fn reason(&self) -> &'static str {
        "Maximum generations reached"
    }
}

/// Combine criteria with OR logic (any one triggers termination)
pub struct AnyOf {
    criteria: Vec<Box<dyn TerminationCriterion>>,
}

impl AnyOf {
    /// Create a new AnyOf combinator
    pub fn new(criteria: Vec<Box<dyn TerminationCriterion>>) -> Self {
        Self { criteria }
    }
}

impl TerminationCriterion for AnyOf {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        self.criteria.iter().any(|c| c.should_terminate(state))
    }

    fn reason(&self) -> &'static str {
        "One of multiple criteria met"
    }
}
