//! Global layout score.

use super::census::Census;
use super::local::local_score;
use super::penalty::{adjacency_penalty, count_bounds_penalty, disconnection_penalty};
use crate::grid::Grid;

/// Score of a grid without a single residential cell.
pub const UNINHABITED: f64 = -1e9;

/// Cost of each residential cell below the target of one per eight cells.
pub const SHORTFALL_PER_CELL: f64 = 10.0;

/// Weight applied to the summed construction cost.
pub const COST_WEIGHT: f64 = 0.1;

/// Signed contributions to a grid's score.
///
/// Every field except `residential_cells` is a term of the sum: rewards are
/// positive, costs and penalties negative. The terms are always computed,
/// even for an uninhabited grid, so a breakdown can explain a sentinel
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Residential cells on the grid.
    pub residential_cells: usize,
    /// Missing residential cells, times [`SHORTFALL_PER_CELL`].
    pub shortfall: f64,
    /// Sum of local residential scores.
    pub residents: f64,
    /// Construction cost term.
    pub cost: f64,
    /// Unmet road and rail adjacency.
    pub adjacency: f64,
    /// Orphan roads and rails, stations without track.
    pub disconnected: f64,
    /// Building counts outside their bounds.
    pub bounds: f64,
}

impl ScoreBreakdown {
    pub fn is_uninhabited(&self) -> bool {
        self.residential_cells == 0
    }

    /// The score these terms add up to, or [`UNINHABITED`].
    pub fn total(&self) -> f64 {
        if self.is_uninhabited() {
            return UNINHABITED;
        }
        self.shortfall + self.residents + self.cost + self.adjacency + self.disconnected + self.bounds
    }
}

/// Computes every score term of `grid`.
pub fn breakdown(grid: &Grid) -> ScoreBreakdown {
    let census = Census::new(grid);
    breakdown_with(grid, &census)
}

/// Scores a grid. Higher is better.
///
/// Returns [`UNINHABITED`] when the grid has no residential cell; otherwise
/// the sum of the [`ScoreBreakdown`] terms.
pub fn score(grid: &Grid) -> f64 {
    let census = Census::new(grid);
    if census.residential_cells() == 0 {
        return UNINHABITED;
    }
    breakdown_with(grid, &census).total()
}

fn breakdown_with(grid: &Grid, census: &Census) -> ScoreBreakdown {
    let residential_cells = census.residential_cells();
    let target = grid.area() / 8;
    let shortfall = -SHORTFALL_PER_CELL * target.saturating_sub(residential_cells) as f64;

    let residents: f64 = census
        .residential
        .iter()
        .map(|&(c, id)| local_score(census, c, census.is_connected(id)))
        .sum();

    let cost = -COST_WEIGHT
        * grid
            .buildings()
            .map(|(_, b)| b.variant().cost())
            .sum::<f64>();

    ScoreBreakdown {
        residential_cells,
        shortfall,
        residents,
        cost,
        adjacency: -adjacency_penalty(grid, &census.road, &census.rail),
        disconnected: -disconnection_penalty(grid, &census.road, &census.rail),
        bounds: -count_bounds_penalty(grid),
    }
}
