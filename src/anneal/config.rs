//! Annealing configuration and temperature schedule.

use crate::error::{CityError, Result};
use std::time::Duration;

/// Configuration for the annealing loop.
///
/// The temperature at iteration `it` of `N` is
/// `initial_temperature · exp(−decay · it / N)`. Worsening moves are
/// accepted with probability `exp(Δ / max(T, min_temperature))`.
///
/// # Examples
///
/// ```
/// use city_anneal::anneal::AnnealConfig;
/// use std::time::Duration;
///
/// let config = AnnealConfig::default()
///     .with_iterations(20_000)
///     .with_seed(42)
///     .with_time_limit(Duration::from_secs(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Iteration budget `N`.
    pub iterations: usize,

    /// Temperature at iteration 0.
    pub initial_temperature: f64,

    /// Exponential decay rate. Larger cools faster.
    pub decay: f64,

    /// Floor applied to the temperature in the acceptance test.
    pub min_temperature: f64,

    /// Seed of the run's random number generator.
    pub seed: u64,

    /// Optional wall-clock limit, checked once per iteration.
    pub time_limit: Option<Duration>,

    /// Best score is sampled every this many iterations.
    pub history_interval: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            initial_temperature: 1000.0,
            decay: 3.0,
            min_temperature: 1e-16,
            seed: 777,
            time_limit: None,
            history_interval: 100,
        }
    }
}

impl AnnealConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Temperature at iteration `it`.
    pub fn temperature_at(&self, it: usize) -> f64 {
        if self.iterations == 0 {
            return self.initial_temperature;
        }
        let t = it as f64 / self.iterations as f64;
        self.initial_temperature * (-self.decay * t).exp()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(CityError::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.decay.is_finite() && self.decay >= 0.0) {
            return Err(CityError::InvalidConfig(format!(
                "decay must be non-negative, got {}",
                self.decay
            )));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(CityError::InvalidConfig(
                "min_temperature must be positive".into(),
            ));
        }
        if self.history_interval == 0 {
            return Err(CityError::InvalidConfig(
                "history_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
