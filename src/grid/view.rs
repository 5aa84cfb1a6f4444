//! Read-only cell view for renderers.

use super::layout::Grid;
use super::types::Coord;
use crate::catalog::{BuildingType, Kind, Variant};

/// What a renderer needs to know about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub coord: Coord,
    pub variant: Variant,
    pub building_type: BuildingType,
    pub kind: Kind,
    pub is_start: bool,
}

impl Grid {
    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.coords().map(move |coord| {
            let variant = self
                .variant_at(coord)
                .expect("row-major coordinates are in bounds");
            CellView {
                coord,
                variant,
                building_type: variant.building_type(),
                kind: variant.kind(),
                is_start: coord == self.start(),
            }
        })
    }
}
