//! Optimizer configuration.

use crate::anneal::AnnealConfig;
use crate::error::{CityError, Result};
use crate::mutation::MutationWeights;

/// Grid size, annealing schedule and mutation mix of one optimization run.
///
/// # Examples
///
/// ```
/// use city_anneal::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::new(24, 16)
///     .with_iterations(5_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    pub width: usize,
    pub height: usize,
    pub anneal: AnnealConfig,
    pub mutations: MutationWeights,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new(20, 20)
    }
}

impl OptimizerConfig {
    /// Default schedule and weights for a `width × height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            anneal: AnnealConfig::default(),
            mutations: MutationWeights::default(),
        }
    }

    pub fn with_anneal(mut self, anneal: AnnealConfig) -> Self {
        self.anneal = anneal;
        self
    }

    pub fn with_mutations(mut self, mutations: MutationWeights) -> Self {
        self.mutations = mutations;
        self
    }

    /// Shorthand for the annealing iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.anneal.iterations = n;
        self
    }

    /// Shorthand for the annealing seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.anneal.seed = seed;
        self
    }

    /// Validates dimensions, schedule and weights.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CityError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.anneal.validate()?;
        self.mutations.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!((config.width, config.height), (20, 20));
        assert_eq!(config.anneal, AnnealConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shorthands() {
        let config = OptimizerConfig::new(8, 6).with_iterations(42).with_seed(9);
        assert_eq!(config.anneal.iterations, 42);
        assert_eq!(config.anneal.seed, 9);
    }

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(
            OptimizerConfig::new(0, 5).validate(),
            Err(CityError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn test_validate_nested() {
        let config = OptimizerConfig::new(5, 5)
            .with_anneal(AnnealConfig::default().with_history_interval(0));
        assert!(config.validate().is_err());
        let config = OptimizerConfig::new(5, 5)
            .with_mutations(MutationWeights::default().with_add_random(-2.0));
        assert!(config.validate().is_err());
    }
}
