//! Simulated annealing.
//!
//! A single-trajectory search that accepts worsening moves with a
//! probability shrinking as the temperature decays, so it can climb out of
//! local optima early and settles late. The schedule is exponential in the
//! fraction of the iteration budget spent:
//!
//! ```text
//! T(it) = T0 · exp(−α · it / N)
//! ```
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use types::AnnealProblem;
