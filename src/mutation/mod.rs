//! Mutation operators.
//!
//! A mutation takes the current layout and proposes a neighbour. [`mutate`]
//! picks one operator by weighted roulette selection and applies it to a
//! clone, so the input grid is never observed to change.
//!
//! | Operator | Default weight |
//! |---|---|
//! | extend road | 0.20 |
//! | add rail station | 0.05 |
//! | improve worst residence | 0.20 |
//! | remove and compensate | 0.20 |
//! | prune useless service | 0.05 |
//! | add random | 0.10 |
//! | remove random | 0.10 |
//! | move random | 0.10 |

mod config;
pub mod operators;
mod types;

pub use config::MutationWeights;
pub use types::Mutation;

use crate::grid::Grid;
use rand::Rng;

/// Returns a mutated copy of `grid`.
pub fn mutate<R: Rng>(grid: &Grid, weights: &MutationWeights, rng: &mut R) -> Grid {
    let mut candidate = grid.clone();
    let mutation = weights.select(rng);
    let changed = mutation.apply(&mut candidate, rng);
    log::trace!("mutation {mutation}: changed={changed}");
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_mutate_leaves_input_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let grid = Grid::random_initial_city(16, 16, &mut rng).unwrap();
        let before = grid.clone();
        let weights = MutationWeights::default();
        for _ in 0..200 {
            let _ = mutate(&grid, &weights, &mut rng);
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_mutate_deterministic() {
        let grid = Grid::new(12, 12).unwrap();
        let weights = MutationWeights::default();
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut g = grid.clone();
            for _ in 0..100 {
                g = mutate(&g, &weights, &mut rng);
            }
            g
        };
        assert_eq!(run(5), run(5));
    }

    proptest! {
        #[test]
        fn prop_operators_preserve_partition(
            seed in any::<u64>(),
            op in 0usize..Mutation::ALL.len(),
            steps in 1usize..40,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut grid = Grid::random_initial_city(10, 10, &mut rng).unwrap();
            let mutation = Mutation::ALL[op];
            for _ in 0..steps {
                let before = grid.clone();
                let changed = mutation.apply(&mut grid, &mut rng);
                prop_assert!(grid.is_partitioned());
                prop_assert_eq!(grid.variant_at(grid.start()), Some(crate::catalog::Variant::Road));
                if !changed {
                    prop_assert_eq!(&grid, &before);
                }
            }
        }

        #[test]
        fn prop_mixed_mutations_preserve_partition(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut grid = Grid::random_initial_city(9, 7, &mut rng).unwrap();
            let weights = MutationWeights::default();
            for _ in 0..60 {
                grid = mutate(&grid, &weights, &mut rng);
                prop_assert!(grid.is_partitioned());
            }
        }
    }
}
