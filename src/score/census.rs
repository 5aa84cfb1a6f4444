//! Per-grid cell inventory shared by the scorer and the mutation operators.

use crate::catalog::{BuildingType, Kind};
use crate::connectivity::{is_well_connected, rail_reachable, road_reachable, ReachSet};
use crate::grid::{BuildingId, Coord, Grid};
use std::collections::HashMap;

/// Cells of every scoring category, both reachability sets and the
/// frontage verdict of every residence.
///
/// Lists are in row-major order. Service entries carry the coverage radius
/// of the building occupying the cell.
#[derive(Debug, Clone)]
pub struct Census {
    pub residential: Vec<(Coord, BuildingId)>,
    pub fire: Vec<(Coord, (usize, usize))>,
    pub police: Vec<(Coord, (usize, usize))>,
    pub health: Vec<(Coord, (usize, usize))>,
    pub stations: Vec<(Coord, (usize, usize))>,
    pub parks: Vec<Coord>,
    pub schools: Vec<Coord>,
    /// Factory cells with their pollution radius.
    pub factories: Vec<(Coord, usize)>,
    pub road: ReachSet,
    pub rail: ReachSet,
    connected: HashMap<BuildingId, bool>,
}

impl Census {
    pub fn new(grid: &Grid) -> Self {
        let mut census = Self {
            residential: Vec::new(),
            fire: Vec::new(),
            police: Vec::new(),
            health: Vec::new(),
            stations: Vec::new(),
            parks: Vec::new(),
            schools: Vec::new(),
            factories: Vec::new(),
            road: road_reachable(grid),
            rail: rail_reachable(grid),
            connected: HashMap::new(),
        };

        for cell in grid.cells() {
            let c = cell.coord;
            let radius = cell.variant.radius();
            match cell.kind {
                Kind::Residential => {
                    if let Some(id) = grid.building_id_at(c) {
                        census.residential.push((c, id));
                    }
                }
                Kind::Fire => census.fire.push((c, radius)),
                Kind::Police => census.police.push((c, radius)),
                Kind::Health => census.health.push((c, radius)),
                Kind::Park => census.parks.push(c),
                Kind::Education => census.schools.push(c),
                Kind::Factory => census.factories.push((c, radius.0)),
                Kind::Transit => {
                    if cell.building_type == BuildingType::RailwayStation {
                        census.stations.push((c, radius));
                    }
                }
                Kind::Void => {}
            }
        }

        for &(_, id) in &census.residential {
            census
                .connected
                .entry(id)
                .or_insert_with(|| is_well_connected(grid, grid.building(id), &census.road));
        }

        census
    }

    /// Frontage verdict of a residential building. Unknown ids are treated
    /// as not connected.
    pub fn is_connected(&self, id: BuildingId) -> bool {
        self.connected.get(&id).copied().unwrap_or(false)
    }

    /// Number of residential cells.
    pub fn residential_cells(&self) -> usize {
        self.residential.len()
    }

    /// Residential coordinates only.
    pub fn residential_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.residential.iter().map(|&(c, _)| c)
    }
}
