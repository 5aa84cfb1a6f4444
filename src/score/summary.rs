//! Human-readable layout statistics.

use super::census::Census;
use super::local::local_score;
use crate::catalog::BuildingType;
use crate::grid::Grid;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Residential statistics, total cost and building counts of a grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub residential_cells: usize,
    pub residential_buildings: usize,
    /// Local score statistics over residential cells, all 0 without
    /// residences.
    pub local_mean: f64,
    pub local_min: f64,
    pub local_max: f64,
    pub total_cost: f64,
    /// Distinct buildings per type, void included.
    pub counts: BTreeMap<BuildingType, usize>,
}

impl Summary {
    pub fn new(grid: &Grid) -> Self {
        let census = Census::new(grid);

        let locals: Vec<f64> = census
            .residential
            .iter()
            .map(|&(c, id)| local_score(&census, c, census.is_connected(id)))
            .collect();
        let residential_buildings = census
            .residential
            .iter()
            .map(|&(_, id)| id)
            .collect::<HashSet<_>>()
            .len();

        let (local_min, local_max, local_mean) = if locals.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let (lo, hi) = locals
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                    (lo.min(s), hi.max(s))
                });
            (lo, hi, locals.iter().sum::<f64>() / locals.len() as f64)
        };

        let mut counts = BTreeMap::new();
        let mut total_cost = 0.0;
        for (_, building) in grid.buildings() {
            let variant = building.variant();
            *counts.entry(variant.building_type()).or_insert(0) += 1;
            total_cost += variant.cost();
        }

        Self {
            residential_cells: locals.len(),
            residential_buildings,
            local_mean,
            local_min,
            local_max,
            total_cost,
            counts,
        }
    }

    /// Number of distinct buildings of type `t`.
    pub fn count(&self, t: BuildingType) -> usize {
        self.counts.get(&t).copied().unwrap_or(0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "residential cells {} in {} buildings, local avg/min/max {:.2}/{:.2}/{:.2}, cost {:.1}",
            self.residential_cells,
            self.residential_buildings,
            self.local_mean,
            self.local_min,
            self.local_max,
            self.total_cost
        )?;
        for (t, n) in &self.counts {
            if *t != BuildingType::Void {
                write!(f, ", {t:?} {n}")?;
            }
        }
        Ok(())
    }
}
