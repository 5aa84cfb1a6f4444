//! Coordinates and building instances.

use crate::catalog::Variant;
use std::fmt;

/// A cell position. Pure value, usable as a map key or graph vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shifts by a signed offset. `None` when either axis would go negative.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Coord> {
        Some(Coord {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// `|dx| + |dy|`.
    pub fn manhattan(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Per-axis box containment: `|dx| <= rx && |dy| <= ry`.
    pub fn within_box(self, center: Coord, (rx, ry): (usize, usize)) -> bool {
        self.x.abs_diff(center.x) <= rx && self.y.abs_diff(center.y) <= ry
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Index of a building in a grid's arena.
///
/// Only meaningful for the grid that issued it; a clone keeps the same ids
/// but owns separate instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildingId(pub(crate) u32);

impl BuildingId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A realized placement: a variant and the cells it occupies.
///
/// The first cell is the anchor the footprint was grown from.
#[derive(Debug, Clone)]
pub struct Building {
    variant: Variant,
    cells: Vec<Coord>,
}

impl Building {
    pub(crate) fn new(variant: Variant, cells: Vec<Coord>) -> Self {
        Self { variant, cells }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// The placement anchor.
    pub fn anchor(&self) -> Coord {
        self.cells[0]
    }

    /// Inclusive bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Coord, Coord) {
        let mut min = self.cells[0];
        let mut max = self.cells[0];
        for c in &self.cells[1..] {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
        }
        (min, max)
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }
}

/// Same variant and same coordinate set, regardless of cell order.
impl PartialEq for Building {
    fn eq(&self, other: &Self) -> bool {
        if self.variant != other.variant || self.cells.len() != other.cells.len() {
            return false;
        }
        let mut a = self.cells.clone();
        let mut b = other.cells.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl Eq for Building {}
