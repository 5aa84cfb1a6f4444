//! City layout as an annealing problem.

use crate::anneal::AnnealProblem;
use crate::error::Result;
use crate::grid::Grid;
use crate::mutation::{mutate, MutationWeights};
use crate::score::score;
use rand::Rng;

/// Searches layouts of a fixed-size grid.
///
/// The starting layout is a fresh grid with residences along the road and a
/// few random buildings; neighbours come from [`mutate`].
#[derive(Debug, Clone)]
pub struct CityProblem {
    template: Grid,
    weights: MutationWeights,
}

impl CityProblem {
    /// Fails when either dimension is zero or the weights are invalid.
    pub fn new(width: usize, height: usize, weights: MutationWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            template: Grid::new(width, height)?,
            weights,
        })
    }
}

impl AnnealProblem for CityProblem {
    type Solution = Grid;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Grid {
        let mut grid = self.template.clone();
        grid.scatter(rng);
        grid
    }

    fn score(&self, grid: &Grid) -> f64 {
        score(grid)
    }

    fn neighbor<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Grid {
        mutate(grid, &self.weights, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CityError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_rejects_bad_input() {
        assert_eq!(
            CityProblem::new(0, 4, MutationWeights::default()).unwrap_err(),
            CityError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
        let bad = MutationWeights::default().with_extend_road(-1.0);
        assert!(CityProblem::new(4, 4, bad).is_err());
    }

    #[test]
    fn test_initial_solution_matches_seeding() {
        let problem = CityProblem::new(16, 16, MutationWeights::default()).unwrap();
        let a = problem.initial_solution(&mut ChaCha8Rng::seed_from_u64(4));
        let b = Grid::random_initial_city(16, 16, &mut ChaCha8Rng::seed_from_u64(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_neighbor_does_not_touch_input() {
        let problem = CityProblem::new(10, 10, MutationWeights::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let grid = problem.initial_solution(&mut rng);
        let before = grid.clone();
        for _ in 0..50 {
            let _ = problem.neighbor(&grid, &mut rng);
        }
        assert_eq!(grid, before);
        assert_eq!(problem.score(&grid), score(&before));
    }
}
