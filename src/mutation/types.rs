//! Mutation kinds.

use super::operators;
use crate::grid::Grid;
use rand::Rng;
use std::fmt;

/// A local edit applied to a candidate grid.
///
/// Every variant either commits its whole edit or leaves the grid exactly
/// as it found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Grows the road network by one cell.
    ExtendRoad,
    /// Places a station next to a road, then one rail next to the station.
    AddRailStation,
    /// Drops a small service close to the lowest-scoring residence.
    ImproveWorstResidence,
    /// Demolishes a hopeless residence and builds one next to a road.
    RemoveAndCompensate,
    /// Demolishes the service covering the fewest residences.
    PruneUselessService,
    /// Places a random non-residential, non-road variant on a random cell.
    AddRandom,
    /// Demolishes the non-residential building on a random cell.
    RemoveRandom,
    /// Moves a non-residential building to another random cell.
    MoveRandom,
}

impl Mutation {
    pub const ALL: [Mutation; 8] = [
        Mutation::ExtendRoad,
        Mutation::AddRailStation,
        Mutation::ImproveWorstResidence,
        Mutation::RemoveAndCompensate,
        Mutation::PruneUselessService,
        Mutation::AddRandom,
        Mutation::RemoveRandom,
        Mutation::MoveRandom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mutation::ExtendRoad => "extend-road",
            Mutation::AddRailStation => "add-rail-station",
            Mutation::ImproveWorstResidence => "improve-worst-residence",
            Mutation::RemoveAndCompensate => "remove-and-compensate",
            Mutation::PruneUselessService => "prune-useless-service",
            Mutation::AddRandom => "add-random",
            Mutation::RemoveRandom => "remove-random",
            Mutation::MoveRandom => "move-random",
        }
    }

    /// Applies this mutation in place. Returns whether the grid changed.
    pub fn apply<R: Rng>(self, grid: &mut Grid, rng: &mut R) -> bool {
        match self {
            Mutation::ExtendRoad => operators::extend_road(grid, rng),
            Mutation::AddRailStation => operators::add_rail_station(grid, rng),
            Mutation::ImproveWorstResidence => operators::improve_worst_residence(grid, rng),
            Mutation::RemoveAndCompensate => operators::remove_and_compensate(grid, rng),
            Mutation::PruneUselessService => operators::prune_useless_service(grid),
            Mutation::AddRandom => operators::add_random(grid, rng),
            Mutation::RemoveRandom => operators::remove_random(grid, rng),
            Mutation::MoveRandom => operators::move_random(grid, rng),
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
