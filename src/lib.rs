//! Simulated-annealing layout search for typed city grids.
//!
//! A city is a fixed-size grid of typed buildings: residences, public
//! services, parks, schools, factories, roads, rails and stations. The
//! crate searches for a high-scoring layout under adjacency and
//! connectivity constraints:
//!
//! - **Catalog**: the static table of building variants with footprint,
//!   coverage radius, adjacency needs and cost.
//! - **Grid**: an arena of buildings with mirrored-anchor placement,
//!   whole-building removal and cheap deep copies.
//! - **Connectivity**: breadth-first road and rail reachability and the
//!   residential frontage rule.
//! - **Score**: residential utility, construction cost and constraint
//!   penalties, with a sentinel for uninhabited layouts.
//! - **Mutation**: weighted local edits that never touch their input.
//! - **Anneal**: a generic Metropolis loop with exponential cooling,
//!   cancellation and a deadline.
//! - **Optimizer**: the city problem, the end-to-end run and the road
//!   repair pass on the final layout.
//!
//! # Examples
//!
//! ```
//! use city_anneal::optimizer::{CityOptimizer, OptimizerConfig};
//!
//! let config = OptimizerConfig::new(16, 12).with_iterations(300).with_seed(1);
//! let result = CityOptimizer::run(&config).unwrap();
//! assert!(result.best.is_partitioned());
//! assert!(result.best_score >= result.score_history[0]);
//! ```
//!
//! Randomness comes from one seeded [`rand_chacha::ChaCha8Rng`] per run, so
//! a seed, grid size and iteration count reproduce the same layout.

pub mod anneal;
pub mod catalog;
pub mod connectivity;
pub mod error;
pub mod grid;
pub mod mutation;
pub mod optimizer;
pub mod score;

pub use error::{CityError, Result};
pub use grid::{Coord, Grid};
pub use optimizer::optimize;
