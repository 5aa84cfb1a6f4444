//! Breadth-first reachability over transit cells.

use crate::catalog::BuildingType;
use crate::grid::{Coord, Grid};
use std::collections::VecDeque;

/// Result of a breadth-first traversal.
///
/// Membership is an O(1) mask lookup; iteration follows visit order, which
/// is deterministic for a given grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachSet {
    width: usize,
    mask: Vec<bool>,
    order: Vec<Coord>,
}

impl ReachSet {
    fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            mask: vec![false; grid.area()],
            order: Vec::new(),
        }
    }

    /// Marks `c` as visited. Returns `false` if it already was.
    fn insert(&mut self, c: Coord) -> bool {
        let i = c.y * self.width + c.x;
        if self.mask[i] {
            return false;
        }
        self.mask[i] = true;
        self.order.push(c);
        true
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.x < self.width && self.mask.get(c.y * self.width + c.x).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited cells in breadth-first order.
    pub fn as_slice(&self) -> &[Coord] {
        &self.order
    }
}

/// Breadth-first traversal from `roots` through cells whose building type
/// satisfies `traversable`. Roots are always part of the result.
pub fn reachable<F>(grid: &Grid, roots: impl IntoIterator<Item = Coord>, traversable: F) -> ReachSet
where
    F: Fn(BuildingType) -> bool,
{
    let mut visited = ReachSet::new(grid);
    let mut queue = VecDeque::new();

    for root in roots {
        if grid.in_bounds(root) && visited.insert(root) {
            queue.push_back(root);
        }
    }

    while let Some(c) = queue.pop_front() {
        for n in grid.neighbors4(c) {
            let passable = grid.building_type_at(n).is_some_and(&traversable);
            if passable && visited.insert(n) {
                queue.push_back(n);
            }
        }
    }

    visited
}

/// Road network reachable from `start` through roads and crossings.
pub fn road_reachable(grid: &Grid) -> ReachSet {
    reachable(grid, [grid.start()], BuildingType::is_road_network)
}

/// Rail network reachable from any railway station through rails,
/// crossings and stations.
pub fn rail_reachable(grid: &Grid) -> ReachSet {
    let stations = grid
        .coords()
        .filter(|&c| grid.building_type_at(c) == Some(BuildingType::RailwayStation));
    reachable(grid, stations, BuildingType::is_rail_network)
}
