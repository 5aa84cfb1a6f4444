//! Constraint penalties. All functions return non-negative amounts.

use crate::catalog::BuildingType;
use crate::connectivity::{rail_reachable, road_reachable, ReachSet};
use crate::grid::Grid;

/// Missing road or rail adjacency, per requirement.
pub const ADJACENCY_PENALTY: f64 = 5.0;
/// Road or crossing cell cut off from `start`.
pub const ORPHAN_ROAD_PENALTY: f64 = 5_000_000.0;
/// Rail cell cut off from every station.
pub const ORPHAN_RAIL_PENALTY: f64 = 500.0;
/// Railway station with no rail or crossing next to it.
pub const STATION_WITHOUT_RAIL_PENALTY: f64 = 5_000.0;
/// Per building below a type's minimum.
pub const DEFICIT_PENALTY: f64 = 100.0;
/// Per building above a type's maximum.
pub const SURPLUS_PENALTY: f64 = 200.0;

/// Allowed building counts per type, as `(type, min, max)`.
pub const COUNT_BOUNDS: [(BuildingType, usize, usize); 6] = [
    (BuildingType::PoliceStation, 1, 3),
    (BuildingType::FireStation, 1, 3),
    (BuildingType::HealthClinic, 1, 3),
    (BuildingType::School, 1, 4),
    (BuildingType::Park, 0, 8),
    (BuildingType::RailwayStation, 0, 2),
];

/// Adjacency requirements of every distinct non-void building.
///
/// A requirement holds when a 4-neighbour outside the building's own
/// footprint belongs to the matching network and is reachable in it. The
/// building holding `start` is exempt.
pub fn adjacency_penalty(grid: &Grid, road: &ReachSet, rail: &ReachSet) -> f64 {
    let start = grid.start();
    let mut penalty = 0.0;

    for (_, building) in grid.buildings() {
        let variant = building.variant();
        if variant.is_void() || building.contains(start) {
            continue;
        }
        let mut road_ok = !variant.needs_road();
        let mut rail_ok = !variant.needs_rail();
        if road_ok && rail_ok {
            continue;
        }

        for &c in building.cells() {
            for n in grid.neighbors4(c) {
                if building.contains(n) {
                    continue;
                }
                let Some(t) = grid.building_type_at(n) else {
                    continue;
                };
                road_ok |= t.is_road_network() && road.contains(n);
                rail_ok |= t.is_rail_network() && rail.contains(n);
            }
        }

        if !road_ok {
            penalty += ADJACENCY_PENALTY;
        }
        if !rail_ok {
            penalty += ADJACENCY_PENALTY;
        }
    }

    penalty
}

/// Adjacency penalty with freshly computed reachability sets.
pub fn penalty(grid: &Grid) -> f64 {
    adjacency_penalty(grid, &road_reachable(grid), &rail_reachable(grid))
}

/// Transit cells cut off from their network, and stations without track.
pub fn disconnection_penalty(grid: &Grid, road: &ReachSet, rail: &ReachSet) -> f64 {
    let start = grid.start();
    let mut penalty = 0.0;

    for cell in grid.cells() {
        let c = cell.coord;
        match cell.building_type {
            BuildingType::Road | BuildingType::Crossing if c != start && !road.contains(c) => {
                penalty += ORPHAN_ROAD_PENALTY;
            }
            BuildingType::Rail if !rail.contains(c) => {
                penalty += ORPHAN_RAIL_PENALTY;
            }
            _ => {}
        }
    }

    for (_, building) in grid.buildings() {
        if building.variant().building_type() != BuildingType::RailwayStation {
            continue;
        }
        let has_track = building.cells().iter().any(|&c| {
            grid.neighbors4(c).any(|n| {
                matches!(
                    grid.building_type_at(n),
                    Some(BuildingType::Rail | BuildingType::Crossing)
                )
            })
        });
        if !has_track {
            penalty += STATION_WITHOUT_RAIL_PENALTY;
        }
    }

    penalty
}

/// Building counts outside [`COUNT_BOUNDS`].
pub fn count_bounds_penalty(grid: &Grid) -> f64 {
    let mut counts = [0usize; COUNT_BOUNDS.len()];
    for (_, building) in grid.buildings() {
        let t = building.variant().building_type();
        if let Some(i) = COUNT_BOUNDS.iter().position(|&(bt, _, _)| bt == t) {
            counts[i] += 1;
        }
    }

    COUNT_BOUNDS
        .iter()
        .zip(counts)
        .map(|(&(_, min, max), count)| {
            if count < min {
                DEFICIT_PENALTY * (min - count) as f64
            } else if count > max {
                SURPLUS_PENALTY * (count - max) as f64
            } else {
                0.0
            }
        })
        .sum()
}
