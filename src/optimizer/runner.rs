//! End-to-end optimization: anneal, then repair.

use super::config::OptimizerConfig;
use super::problem::CityProblem;
use super::repair::{connect_residences, RepairReport};
use crate::anneal::AnnealRunner;
use crate::error::Result;
use crate::grid::Grid;
use crate::score::{score, Summary};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizeResult {
    /// Best layout, after the repair pass.
    pub best: Grid,

    /// Score of the best layout as found by annealing.
    pub best_score: f64,

    /// Score of `best` after repair.
    pub final_score: f64,

    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    pub cancelled: bool,
    pub timed_out: bool,

    /// Best annealing score over time. Non-decreasing.
    pub score_history: Vec<f64>,

    pub repair: RepairReport,

    /// Statistics of `best`.
    pub summary: Summary,
}

/// Runs the annealing search over city layouts.
pub struct CityOptimizer;

impl CityOptimizer {
    pub fn run(config: &OptimizerConfig) -> Result<OptimizeResult> {
        Self::run_with_cancel(config, None)
    }

    /// Runs with an optional cancellation token. A cancelled run still
    /// repairs and returns the best layout found so far.
    pub fn run_with_cancel(
        config: &OptimizerConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<OptimizeResult> {
        Self::run_with_progress(config, cancel, |_, _| {})
    }

    /// Runs, reporting `(done, total)` iterations to `progress`.
    pub fn run_with_progress<F>(
        config: &OptimizerConfig,
        cancel: Option<Arc<AtomicBool>>,
        progress: F,
    ) -> Result<OptimizeResult>
    where
        F: FnMut(usize, usize),
    {
        config.validate()?;
        let problem = CityProblem::new(config.width, config.height, config.mutations.clone())?;

        log::info!("optimizing a {}x{} city", config.width, config.height);
        let result = AnnealRunner::run_with_progress(&problem, &config.anneal, cancel, progress)?;

        let mut best = result.best;
        let repair = connect_residences(&mut best);
        let final_score = score(&best);
        let summary = Summary::new(&best);

        log::info!(
            "best score {:.3}, after repair {final_score:.3}; {summary}",
            result.best_score
        );

        Ok(OptimizeResult {
            best,
            best_score: result.best_score,
            final_score,
            iterations: result.iterations,
            accepted_moves: result.accepted_moves,
            improving_moves: result.improving_moves,
            cancelled: result.cancelled,
            timed_out: result.timed_out,
            score_history: result.score_history,
            repair,
            summary,
        })
    }
}

/// Optimizes a `width × height` city for `iterations` steps with the
/// default schedule, seed and mutation mix.
///
/// # Errors
///
/// [`CityError::InvalidDimensions`](crate::CityError::InvalidDimensions)
/// when either dimension is zero.
///
/// # Examples
///
/// ```
/// let city = city_anneal::optimize(200, 12, 12).unwrap();
/// assert_eq!((city.width(), city.height()), (12, 12));
/// assert!(city_anneal::optimize(10, 0, 12).is_err());
/// ```
pub fn optimize(iterations: usize, width: usize, height: usize) -> Result<Grid> {
    let config = OptimizerConfig::new(width, height).with_iterations(iterations);
    CityOptimizer::run(&config).map(|result| result.best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CityError;
    use crate::score::breakdown;

    #[test]
    fn test_optimize_invalid_dimensions() {
        assert_eq!(
            optimize(100, 0, 10).unwrap_err(),
            CityError::InvalidDimensions {
                width: 0,
                height: 10
            }
        );
        assert!(optimize(100, 10, 0).is_err());
    }

    #[test]
    fn test_optimize_deterministic() {
        let a = optimize(300, 12, 12).unwrap();
        let b = optimize(300, 12, 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let config = OptimizerConfig::new(12, 12).with_iterations(300);
        let a = CityOptimizer::run(&config.clone().with_seed(1)).unwrap();
        let b = CityOptimizer::run(&config.with_seed(1)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.score_history, b.score_history);
    }

    #[test]
    fn test_run_result_consistency() {
        let config = OptimizerConfig::new(14, 10).with_iterations(400);
        let result = CityOptimizer::run(&config).unwrap();

        assert_eq!(result.iterations, 400);
        assert!(result.best.is_partitioned());
        assert!((result.final_score - score(&result.best)).abs() < 1e-9);
        assert!((result.final_score - breakdown(&result.best).total()).abs() < 1e-9);
        for w in result.score_history.windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert_eq!(
            result.score_history.last().copied(),
            Some(result.best_score)
        );
        assert!(result.repair.passes >= 1);
    }

    #[test]
    fn test_best_never_below_initial() {
        let config = OptimizerConfig::new(16, 16).with_iterations(600);
        let result = CityOptimizer::run(&config).unwrap();
        assert!(result.best_score >= result.score_history[0]);
    }

    #[test]
    fn test_cancelled_run_still_returns_layout() {
        let cancel = Arc::new(AtomicBool::new(true));
        let config = OptimizerConfig::new(10, 10).with_iterations(1_000);
        let result = CityOptimizer::run_with_cancel(&config, Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert!(result.best.is_partitioned());
    }

    #[test]
    fn test_progress_callback() {
        let mut last = (0, 0);
        let config = OptimizerConfig::new(8, 8).with_iterations(50);
        CityOptimizer::run_with_progress(&config, None, |done, total| last = (done, total))
            .unwrap();
        assert_eq!(last, (50, 50));
    }
}
