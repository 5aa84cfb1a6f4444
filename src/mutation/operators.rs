//! Operator implementations.
//!
//! Each operator edits the grid it is handed. Multi-step edits snapshot the
//! grid first and restore it when a later step fails.

use crate::catalog::{BuildingType, Kind, Variant};
use crate::connectivity::road_reachable;
use crate::grid::{Coord, Grid};
use crate::score::{worst_in, Census};
use rand::seq::SliceRandom;
use rand::Rng;

/// Local score below which a residence is demolished.
pub const HOPELESS_RESIDENCE: f64 = -30.0;

/// A service covering at most this many residential cells is pruned.
const USELESS_COVERAGE: usize = 1;

/// Converts a void neighbour of a random road-reachable cell into road.
pub fn extend_road<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let road = road_reachable(grid);
    let cells = road.as_slice();
    if cells.is_empty() {
        return false;
    }
    let base = cells[rng.random_range(0..cells.len())];

    let mut neighbors: Vec<Coord> = grid.neighbors4(base).collect();
    neighbors.shuffle(rng);
    let Some(target) = neighbors.into_iter().find(|&n| grid.is_void(n)) else {
        return false;
    };
    grid.set_building(target, Variant::Road)
}

/// Places a random station on a void neighbour of a random road cell, then
/// one rail cell on a void neighbour of the station.
///
/// Both steps succeed or the grid is restored.
pub fn add_rail_station<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let roads: Vec<Coord> = grid
        .cells()
        .filter(|cell| cell.building_type.is_road_network())
        .map(|cell| cell.coord)
        .collect();
    if roads.is_empty() {
        return false;
    }
    let base = roads[rng.random_range(0..roads.len())];
    let station = Variant::STATIONS[rng.random_range(0..Variant::STATIONS.len())];

    let snapshot = grid.clone();

    let mut neighbors: Vec<Coord> = grid.neighbors4(base).filter(|&n| grid.is_void(n)).collect();
    neighbors.shuffle(rng);
    let Some(anchor) = neighbors
        .into_iter()
        .find(|&n| grid.set_building(n, station))
    else {
        return false;
    };

    let footprint = match grid.building_at(anchor) {
        Some(b) => b.cells().to_vec(),
        None => {
            *grid = snapshot;
            return false;
        }
    };
    let mut track: Vec<Coord> = footprint
        .iter()
        .flat_map(|&c| grid.neighbors4(c))
        .filter(|&n| grid.is_void(n))
        .collect();
    track.sort();
    track.dedup();
    track.shuffle(rng);

    if track
        .into_iter()
        .any(|n| grid.set_building(n, Variant::Rail))
    {
        true
    } else {
        *grid = snapshot;
        false
    }
}

/// Places a random small service on the first void cell within two steps
/// of the lowest-scoring residential cell.
///
/// Candidates are the cell's 4-neighbours followed by their 4-neighbours,
/// deduplicated in that order.
pub fn improve_worst_residence<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let Some(worst) = worst_in(&Census::new(grid)) else {
        return false;
    };

    let mut candidates: Vec<Coord> = Vec::new();
    for n in grid.neighbors4(worst.coord) {
        if !candidates.contains(&n) {
            candidates.push(n);
        }
    }
    for i in 0..candidates.len() {
        for n in grid.neighbors4(candidates[i]) {
            if !candidates.contains(&n) {
                candidates.push(n);
            }
        }
    }

    let Some(target) = candidates.into_iter().find(|&c| grid.is_void(c)) else {
        return false;
    };
    let pool = Variant::USEFUL_SMALL_SERVICES;
    let variant = pool[rng.random_range(0..pool.len())];
    grid.set_building(target, variant)
}

/// Demolishes the worst residence when its local score is below
/// [`HOPELESS_RESIDENCE`], then tries to build one residence next to the
/// road network.
pub fn remove_and_compensate<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let removed = match worst_in(&Census::new(grid)) {
        Some(worst) if worst.score < HOPELESS_RESIDENCE => grid.rm_building(worst.coord),
        _ => false,
    };
    let added = add_residence_near_road(grid, rng);
    removed || added
}

/// Places one residence on a void neighbour of a road-reachable cell,
/// keeping clear of factory pollution plus one cell.
///
/// Road cells are tried in random order, their neighbours in
/// `+x, −x, +y, −y` order.
pub fn add_residence_near_road<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let factories: Vec<(Coord, usize)> = grid
        .cells()
        .filter(|cell| cell.kind == Kind::Factory)
        .map(|cell| (cell.coord, cell.variant.radius().0))
        .collect();
    let polluted = |c: Coord| {
        factories
            .iter()
            .any(|&(f, radius)| c.manhattan(f) <= radius + 1)
    };

    let mut roads = road_reachable(grid).as_slice().to_vec();
    roads.shuffle(rng);

    for road in roads {
        let neighbors: Vec<Coord> = grid.neighbors4(road).collect();
        for n in neighbors {
            if grid.is_void(n) && !polluted(n) && grid.set_building(n, Variant::Residential) {
                return true;
            }
        }
    }
    false
}

/// Demolishes the service covering the fewest residential cells when it
/// covers at most one.
///
/// Services are police, fire, health, education, park and railway station
/// buildings. Coverage uses the building's box radius around its anchor.
/// Ties go to the first building in row-major order. Nothing is pruned
/// while the grid has no residence.
pub fn prune_useless_service(grid: &mut Grid) -> bool {
    let census = Census::new(grid);
    if census.residential_cells() == 0 {
        return false;
    }
    let mut weakest: Option<(Coord, usize)> = None;

    for (_, building) in grid.buildings() {
        let variant = building.variant();
        if !is_service(variant) {
            continue;
        }
        let anchor = building.anchor();
        let covered = census
            .residential_coords()
            .filter(|r| r.within_box(anchor, variant.radius()))
            .count();
        if weakest.is_none_or(|(_, best)| covered < best) {
            weakest = Some((anchor, covered));
        }
    }

    match weakest {
        Some((anchor, covered)) if covered <= USELESS_COVERAGE => grid.rm_building(anchor),
        _ => false,
    }
}

fn is_service(variant: Variant) -> bool {
    matches!(
        variant.kind(),
        Kind::Police | Kind::Fire | Kind::Health | Kind::Education | Kind::Park
    ) || variant.building_type() == BuildingType::RailwayStation
}

/// Places a random placeable variant on a random cell if it is void.
pub fn add_random<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let c = random_cell(grid, rng);
    if !grid.is_void(c) {
        return false;
    }
    let pool = Variant::randomly_placeable();
    let variant = pool[rng.random_range(0..pool.len())];
    grid.set_building(c, variant)
}

/// Demolishes the building on a random cell unless it is residential or
/// the start road.
pub fn remove_random<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let c = random_cell(grid, rng);
    if grid.building_type_at(c) == Some(BuildingType::Residential) {
        return false;
    }
    grid.rm_building(c)
}

/// Moves the non-residential building on a random cell to a second random
/// cell, keeping its variant.
///
/// When the second cell is not void or the footprint does not fit there,
/// the building is restored at its original cells.
pub fn move_random<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    let from = random_cell(grid, rng);
    let Some(variant) = grid.variant_at(from) else {
        return false;
    };
    if !grid.has_building(from) || variant.building_type() == BuildingType::Residential {
        return false;
    }

    let snapshot = grid.clone();
    grid.rm_building(from);

    let to = random_cell(grid, rng);
    if grid.is_void(to) && grid.set_building(to, variant) {
        true
    } else {
        *grid = snapshot;
        false
    }
}

fn random_cell<R: Rng>(grid: &Grid, rng: &mut R) -> Coord {
    Coord::new(
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    )
}
