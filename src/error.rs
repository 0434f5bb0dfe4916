//! Error types for binevo
//!
//! The error taxonomy is deliberately narrow: everything that can fail does so
//! at construction time. All evolution operations are total over their
//! documented domains; contract violations (such as mating genomes of
//! different lengths) panic instead of returning an error.

use thiserror::Error;

/// Error type for invalid model parameters
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Genome length must be at least one bit
    #[error("genome length must be at least 1")]
    EmptyGenome,

    /// Genome length exceeds what fits in the integer estimate
    #[error("genome length {0} exceeds the supported maximum of 63 bits")]
    GenomeTooWide(usize),

    /// Population size must be at least one individual
    #[error("population size must be at least 1")]
    EmptyPopulation,

    /// Mutation chance is a probability
    #[error("mutation chance {0} is outside [0, 1]")]
    MutationChanceOutOfRange(f64),

    /// Target value does not fit in the configured bit width
    #[error("target {target} does not fit in {n_genes} bits")]
    TargetOutOfRange { target: u64, n_genes: usize },
}

/// Result type alias for configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::EmptyGenome.to_string(),
            "genome length must be at least 1"
        );
        assert_eq!(
            ConfigError::GenomeTooWide(70).to_string(),
            "genome length 70 exceeds the supported maximum of 63 bits"
        );
        assert_eq!(
            ConfigError::MutationChanceOutOfRange(1.5).to_string(),
            "mutation chance 1.5 is outside [0, 1]"
        );
        assert_eq!(
            ConfigError::TargetOutOfRange {
                target: 16,
                n_genes: 4
            }
            .to_string(),
            "target 16 does not fit in 4 bits"
        );
    }
}
