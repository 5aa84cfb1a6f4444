//! Core trait for annealing.

use rand::Rng;

/// Defines a problem searched by simulated annealing.
///
/// The implementor supplies the starting point, the objective and the
/// neighbourhood move. The runner handles the temperature schedule, the
/// acceptance test and best-solution tracking.
///
/// # Maximization
///
/// The runner maximizes [`AnnealProblem::score`]. Negate a cost to minimize
/// it.
///
/// # Examples
///
/// ```
/// use city_anneal::anneal::AnnealProblem;
/// use rand::Rng;
///
/// struct Peak;
///
/// impl AnnealProblem for Peak {
///     type Solution = f64;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> f64 {
///         rng.random_range(-10.0..10.0)
///     }
///
///     fn score(&self, x: &f64) -> f64 {
///         -(x - 3.0) * (x - 3.0)
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-0.5..0.5)
///     }
/// }
/// ```
pub trait AnnealProblem: Send + Sync {
    /// The solution representation. Cloned when a new best is found.
    type Solution: Clone + Send;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Objective value. Higher is better.
    fn score(&self, solution: &Self::Solution) -> f64;

    /// Proposes a neighbour of `solution` without modifying it.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
