//! Per-cell residential utility.

use super::census::Census;
use crate::grid::{BuildingId, Coord, Grid};

/// Flat score of a residential cell whose building lacks road frontage.
pub const DISCONNECTED_RESIDENCE: f64 = -50.0;

const FACTORY_POLLUTION: f64 = -3.0;
const SERVICE_COVERED: f64 = 3.0;
const SERVICE_MISSING: f64 = -2.0;
const STATION_COVERED: f64 = 1.5;
const STATION_MISSING: f64 = -0.5;
const PARK_BONUS: f64 = 3.0;
const PARK_FALLOFF: f64 = 0.5;
const SCHOOL_BONUS: f64 = 2.0;
const SCHOOL_REACH: usize = 5;
const STATION_BONUS: f64 = 2.0;
const STATION_FALLOFF: f64 = 0.3;

/// The lowest-scoring residential cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorstResidence {
    pub coord: Coord,
    pub building: BuildingId,
    pub score: f64,
}

/// Local utility of the residential cell `r`.
///
/// A disconnected residence scores [`DISCONNECTED_RESIDENCE`] and nothing
/// else. Otherwise:
///
/// - factory pollution when within a factory's radius (Manhattan);
/// - fire, police and health coverage by per-axis box radius;
/// - station coverage by box radius;
/// - park bonus `max(0, 3 − 0.5·d)`, school bonus when `d ≤ 5` and station
///   proximity bonus `max(0, 2 − 0.3·d)`, with `d` the Manhattan distance to
///   the nearest cell of that kind.
///
/// Box coverage and Manhattan proximity are distinct effects and both
/// apply.
pub fn local_score(census: &Census, r: Coord, connected: bool) -> f64 {
    if !connected {
        return DISCONNECTED_RESIDENCE;
    }

    let mut s = 0.0;

    if census
        .factories
        .iter()
        .any(|&(f, radius)| r.manhattan(f) <= radius)
    {
        s += FACTORY_POLLUTION;
    }

    s += coverage(&census.fire, r, SERVICE_COVERED, SERVICE_MISSING);
    s += coverage(&census.police, r, SERVICE_COVERED, SERVICE_MISSING);
    s += coverage(&census.health, r, SERVICE_COVERED, SERVICE_MISSING);
    s += coverage(&census.stations, r, STATION_COVERED, STATION_MISSING);

    if let Some(d) = nearest(census.parks.iter().copied(), r) {
        s += (PARK_BONUS - PARK_FALLOFF * d as f64).max(0.0);
    }
    if let Some(d) = nearest(census.schools.iter().copied(), r) {
        if d <= SCHOOL_REACH {
            s += SCHOOL_BONUS;
        }
    }
    if let Some(d) = nearest(census.stations.iter().map(|&(c, _)| c), r) {
        s += (STATION_BONUS - STATION_FALLOFF * d as f64).max(0.0);
    }

    s
}

/// Finds the residential cell with the lowest local score.
///
/// Ties go to the first cell in row-major order. `None` when the grid has
/// no residence.
pub fn find_worst_residence(grid: &Grid) -> Option<WorstResidence> {
    worst_in(&Census::new(grid))
}

pub(crate) fn worst_in(census: &Census) -> Option<WorstResidence> {
    let mut worst: Option<WorstResidence> = None;
    for &(coord, building) in &census.residential {
        let score = local_score(census, coord, census.is_connected(building));
        if worst.is_none_or(|w| score < w.score) {
            worst = Some(WorstResidence {
                coord,
                building,
                score,
            });
        }
    }
    worst
}

fn coverage(services: &[(Coord, (usize, usize))], r: Coord, covered: f64, missing: f64) -> f64 {
    if services.iter().any(|&(s, radius)| r.within_box(s, radius)) {
        covered
    } else {
        missing
    }
}

fn nearest(cells: impl Iterator<Item = Coord>, r: Coord) -> Option<usize> {
    cells.map(|c| r.manhattan(c)).min()
}
