//! City layout optimization.
//!
//! Wires the grid, the scorer and the mutation operators into the annealing
//! runner, then runs a road repair pass over the best layout so residences
//! the search left stranded get linked to the network where a path exists.

mod config;
mod problem;
mod repair;
mod runner;

pub use config::OptimizerConfig;
pub use problem::CityProblem;
pub use repair::{connect_residences, RepairReport};
pub use runner::{optimize, CityOptimizer, OptimizeResult};
