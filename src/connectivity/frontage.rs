//! Residential frontage test.

use super::reach::ReachSet;
use crate::catalog::BuildingType;
use crate::grid::{Building, Grid};

/// Minimum road contacts on a single side.
const MIN_SIDE_CONTACTS: usize = 2;

/// Whether a residence has enough road frontage.
///
/// Sides are taken from the bounding box: north is `min y`, south `max y`,
/// west `min x`, east `max x`. For each cell and each of its neighbours in
/// `road`, every side the cell lies on gains one contact; a corner cell
/// counts for two sides. The building qualifies when some side reaches two
/// contacts, so two isolated contacts on different sides do not qualify.
///
/// Non-residential buildings always qualify.
pub fn is_well_connected(grid: &Grid, building: &Building, road: &ReachSet) -> bool {
    if building.variant().building_type() != BuildingType::Residential {
        return true;
    }

    let (min, max) = building.bounds();
    let (mut north, mut south, mut west, mut east) = (0usize, 0usize, 0usize, 0usize);

    for &c in building.cells() {
        let contacts = grid.neighbors4(c).filter(|&n| road.contains(n)).count();
        if c.y == min.y {
            north += contacts;
        }
        if c.y == max.y {
            south += contacts;
        }
        if c.x == min.x {
            west += contacts;
        }
        if c.x == max.x {
            east += contacts;
        }
    }

    [north, south, west, east]
        .into_iter()
        .any(|side| side >= MIN_SIDE_CONTACTS)
}
