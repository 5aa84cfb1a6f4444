//! Annealing execution loop.

use super::config::AnnealConfig;
use super::types::AnnealProblem;
use crate::error::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Score of the best solution.
    pub best_score: f64,

    /// Iterations actually performed.
    pub iterations: usize,

    /// Temperature of the last iteration performed.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Whether the time limit cut the run short.
    pub timed_out: bool,

    /// Best score sampled every `history_interval` iterations, plus the
    /// initial and final values. Non-decreasing.
    pub score_history: Vec<f64>,
}

/// Executes the annealing loop.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs annealing to completion.
    pub fn run<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P::Solution>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs annealing with an optional cancellation token.
    pub fn run_with_cancel<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult<P::Solution>> {
        Self::run_with_progress(problem, config, cancel, |_, _| {})
    }

    /// Runs annealing, reporting `(done, total)` after every iteration.
    ///
    /// The callback does not influence the search.
    pub fn run_with_progress<P, F>(
        problem: &P,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut progress: F,
    ) -> Result<AnnealResult<P::Solution>>
    where
        P: AnnealProblem,
        F: FnMut(usize, usize),
    {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let deadline = config.time_limit.map(|limit| Instant::now() + limit);
        let total = config.iterations;

        let mut current = problem.initial_solution(&mut rng);
        let mut current_score = problem.score(&current);
        let mut best = current.clone();
        let mut best_score = current_score;

        log::info!(
            "annealing: {total} iterations, T0={}, decay={}, seed={}, initial score {current_score:.3}",
            config.initial_temperature,
            config.decay,
            config.seed
        );

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;
        let mut temperature = config.temperature_at(0);

        let mut score_history = vec![best_score];

        for it in 0..total {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                timed_out = true;
                break;
            }

            temperature = config.temperature_at(it);
            let candidate = problem.neighbor(&current, &mut rng);
            let candidate_score = problem.score(&candidate);
            let delta = candidate_score - current_score;

            // Metropolis acceptance, maximizing.
            let accept = if delta >= 0.0 {
                true
            } else {
                let probability = (delta / temperature.max(config.min_temperature)).exp();
                rng.random::<f64>() < probability
            };

            if accept {
                if delta > 0.0 {
                    improving_moves += 1;
                }
                current = candidate;
                current_score = candidate_score;
                accepted_moves += 1;

                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                    log::debug!("iteration {it}: new best {best_score:.3} at T={temperature:.4}");
                }
            }

            iterations += 1;
            progress(iterations, total);

            if iterations.is_multiple_of(config.history_interval) {
                score_history.push(best_score);
            }
        }

        if score_history.last().is_none_or(|&last| last != best_score) {
            score_history.push(best_score);
        }

        log::info!(
            "annealing done: {iterations} iterations, best score {best_score:.3}, \
             {accepted_moves} accepted, {improving_moves} improving{}{}",
            if cancelled { ", cancelled" } else { "" },
            if timed_out { ", timed out" } else { "" }
        );

        Ok(AnnealResult {
            best,
            best_score,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            timed_out,
            score_history,
        })
    }
}
