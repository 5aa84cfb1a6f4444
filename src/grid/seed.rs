//! Random initial layouts.

use super::layout::Grid;
use super::types::Coord;
use crate::catalog::Variant;
use crate::error::Result;
use rand::Rng;

/// Random placement attempts for non-residential variants.
const SCATTERED_BUILDINGS: usize = 6;

impl Grid {
    /// Creates a grid and scatters residences and a few other buildings.
    ///
    /// Seeding is best-effort: failed placements are skipped.
    pub fn random_initial_city<R: Rng>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        grid.scatter(rng);
        Ok(grid)
    }

    /// Scatters buildings over the void cells of this grid.
    ///
    /// `area / 8` attempts drop a residence on the row directly above or
    /// below the road row, then a handful of attempts drop a random
    /// placeable variant anywhere.
    pub fn scatter<R: Rng>(&mut self, rng: &mut R) {
        let road_row = self.start().y;

        for _ in 0..self.area() / 8 {
            let x = rng.random_range(0..self.width());
            let y = if rng.random_bool(0.5) {
                road_row.checked_sub(1)
            } else {
                Some(road_row + 1)
            };
            let Some(y) = y else { continue };
            let c = Coord::new(x, y);
            if self.is_void(c) {
                self.set_building(c, Variant::Residential);
            }
        }

        let pool = Variant::randomly_placeable();
        for _ in 0..SCATTERED_BUILDINGS {
            let c = Coord::new(
                rng.random_range(0..self.width()),
                rng.random_range(0..self.height()),
            );
            if self.is_void(c) {
                let variant = pool[rng.random_range(0..pool.len())];
                self.set_building(c, variant);
            }
        }
    }
}
