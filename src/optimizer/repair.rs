//! Road repair pass run on the final layout.

use crate::catalog::{BuildingType, Variant};
use crate::connectivity::{is_well_connected, road_reachable, ReachSet};
use crate::grid::{Building, Coord, Grid};
use std::collections::{HashMap, VecDeque};

/// Outcome of [`connect_residences`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepairReport {
    /// Void cells turned into road.
    pub roads_added: usize,
    /// Passes run, the last one making no change.
    pub passes: usize,
    /// Anchors of residences with no void or road path to the network.
    pub abandoned: Vec<Coord>,
}

/// Lays roads until every residence that can be linked to the road network
/// is linked.
///
/// Each pass recomputes road reachability once, then for every residence
/// failing the frontage test searches breadth-first from its anchor over
/// void, road and crossing cells for the nearest road-reachable cell. Void
/// cells on the path become road. Passes repeat until one changes nothing.
///
/// Residences without any path are left in place and reported.
pub fn connect_residences(grid: &mut Grid) -> RepairReport {
    let mut report = RepairReport::default();

    loop {
        report.passes += 1;
        report.abandoned.clear();
        let road = road_reachable(grid);
        let residences: Vec<Building> = grid
            .buildings()
            .filter(|(_, b)| b.variant().building_type() == BuildingType::Residential)
            .map(|(_, b)| b.clone())
            .collect();

        let mut changed = false;
        for residence in &residences {
            if is_well_connected(grid, residence, &road) {
                continue;
            }
            let anchor = residence.anchor();
            let Some(path) = path_to_network(grid, anchor, &road) else {
                report.abandoned.push(anchor);
                continue;
            };
            for c in path {
                if grid.is_void(c) && grid.set_building(c, Variant::Road) {
                    report.roads_added += 1;
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }

    for anchor in &report.abandoned {
        log::warn!("residence at {anchor} has no path to the road network");
    }
    log::debug!(
        "repair: {} roads added in {} passes",
        report.roads_added,
        report.passes
    );
    report
}

/// Cells strictly between `from` and the nearest road-reachable cell, or
/// `None` when no such cell can be reached.
fn path_to_network(grid: &Grid, from: Coord, road: &ReachSet) -> Option<Vec<Coord>> {
    let mut parent: HashMap<Coord, Option<Coord>> = HashMap::new();
    let mut queue = VecDeque::new();
    parent.insert(from, None);
    queue.push_back(from);

    let mut target = None;
    'search: while let Some(cur) = queue.pop_front() {
        for n in grid.neighbors4(cur) {
            if parent.contains_key(&n) {
                continue;
            }
            let passable = matches!(
                grid.building_type_at(n),
                Some(BuildingType::Void | BuildingType::Road | BuildingType::Crossing)
            );
            if !passable {
                continue;
            }
            parent.insert(n, Some(cur));
            if road.contains(n) {
                target = Some(n);
                break 'search;
            }
            queue.push_back(n);
        }
    }

    let mut path = Vec::new();
    let mut cur = parent.get(&target?).copied().flatten();
    while let Some(c) = cur {
        if c == from {
            break;
        }
        path.push(c);
        cur = parent.get(&c).copied().flatten();
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_links_stranded_residence() {
        // 8x8, road row 4. Residence at x 1..=2, y 1..=2, two rows above it.
        let mut grid = Grid::new(8, 8).unwrap();
        assert!(grid.set_building(c(1, 1), Variant::Residential));

        let report = connect_residences(&mut grid);
        assert_eq!(report.roads_added, 3);
        assert_eq!(report.passes, 2);
        assert!(report.abandoned.is_empty());
        for cell in [c(0, 1), c(0, 2), c(0, 3)] {
            assert_eq!(grid.variant_at(cell), Some(Variant::Road));
        }

        let road = road_reachable(&grid);
        let res = grid.building_at(c(1, 1)).unwrap();
        assert!(is_well_connected(&grid, res, &road));
        assert!(grid.is_partitioned());
    }

    #[test]
    fn test_connected_residence_untouched() {
        let mut grid = Grid::new(8, 8).unwrap();
        assert!(grid.set_building(c(0, 2), Variant::Residential));
        let before = grid.clone();
        let report = connect_residences(&mut grid);
        assert_eq!(report.roads_added, 0);
        assert_eq!(report.passes, 1);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_boxed_in_residence_is_abandoned() {
        // Anchored in the corner, the anchor's only neighbours are its own
        // cells.
        let mut grid = Grid::new(8, 8).unwrap();
        assert!(grid.set_building(c(0, 0), Variant::Residential));
        let before = grid.clone();
        let report = connect_residences(&mut grid);
        assert_eq!(report.abandoned, vec![c(0, 0)]);
        assert_eq!(report.roads_added, 0);
        assert_eq!(grid, before);
        assert_eq!(grid.variant_at(c(0, 0)), Some(Variant::Residential));
    }

    #[test]
    fn test_path_walls_are_respected() {
        // 8x10, road row 5. Factories fill rows 3..=4 for x 0..=5, leaving
        // a gap at x 6..=7 between the residence and the road.
        let mut grid = Grid::new(8, 10).unwrap();
        assert!(grid.set_building(c(1, 0), Variant::Residential));
        for x in [0, 2, 4] {
            assert!(grid.set_building(c(x, 3), Variant::Factory));
        }

        let report = connect_residences(&mut grid);
        assert!(report.abandoned.is_empty());
        assert!(report.roads_added > 0);
        for x in 0..6 {
            for y in [3, 4] {
                assert_eq!(grid.building_type_at(c(x, y)), Some(BuildingType::Factory));
            }
        }
        assert!((6..8).any(|x| grid.variant_at(c(x, 4)) == Some(Variant::Road)));
        assert!(grid.is_partitioned());
    }
}
