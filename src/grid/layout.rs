//! The grid arena.

use super::types::{Building, BuildingId, Coord};
use crate::catalog::{BuildingType, Variant};
use crate::error::{CityError, Result};

/// Mirror orientations tried by [`Grid::set_building`], in priority order.
const ORIENTATIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal neighbour offsets.
const NEIGHBORS4: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A width × height city layout.
///
/// Cells map to building ids and ids map to [`Building`]s holding their
/// cell lists, all inside one arena. Every cell references exactly one
/// live building and the buildings' cell lists partition the grid. Unbuilt
/// cells each hold their own [`Variant::Void`] building.
///
/// `Clone` is a deep copy: the arena stores indices only, so a clone never
/// shares an instance with its source.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    start: Coord,
    cells: Vec<BuildingId>,
    slots: Vec<Option<Building>>,
    free: Vec<BuildingId>,
}

impl Grid {
    /// Creates a grid with one road row through the middle.
    ///
    /// `start` is the leftmost cell of that row. Every road cell is its own
    /// single-cell building.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CityError::InvalidDimensions { width, height });
        }

        let road_row = height / 2;
        let mut grid = Self {
            width,
            height,
            start: Coord::new(0, road_row),
            cells: Vec::with_capacity(width * height),
            slots: Vec::with_capacity(width * height),
            free: Vec::new(),
        };

        for y in 0..height {
            for x in 0..width {
                let c = Coord::new(x, y);
                let variant = if y == road_row {
                    Variant::Road
                } else {
                    Variant::Void
                };
                let id = grid.alloc(Building::new(variant, vec![c]));
                grid.cells.push(id);
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Root of the road network. Always road, never placeable.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// In bounds and not `start`.
    pub fn inside(&self, c: Coord) -> bool {
        self.in_bounds(c) && c != self.start
    }

    /// `inside(c)` and occupied by a non-void building.
    pub fn has_building(&self, c: Coord) -> bool {
        self.inside(c) && !self.cell(c).variant().is_void()
    }

    /// In bounds and void. `start` is never void.
    pub fn is_void(&self, c: Coord) -> bool {
        self.in_bounds(c) && self.cell(c).variant().is_void()
    }

    pub fn building_id_at(&self, c: Coord) -> Option<BuildingId> {
        self.in_bounds(c).then(|| self.cells[self.index(c)])
    }

    pub fn building_at(&self, c: Coord) -> Option<&Building> {
        self.in_bounds(c).then(|| self.cell(c))
    }

    pub fn variant_at(&self, c: Coord) -> Option<Variant> {
        self.building_at(c).map(Building::variant)
    }

    pub fn building_type_at(&self, c: Coord) -> Option<BuildingType> {
        self.variant_at(c).map(Variant::building_type)
    }

    /// Looks up a building by id.
    ///
    /// # Panics
    ///
    /// Panics if the id refers to a freed slot. Ids obtained from this grid
    /// and not invalidated by a later edit are always live.
    pub fn building(&self, id: BuildingId) -> &Building {
        self.slots[id.index()]
            .as_ref()
            .expect("grid cell references a freed building slot")
    }

    /// Attempts to place `variant` anchored at `c`.
    ///
    /// The footprint is grown from `c` towards `+x+y`, `+x−y`, `−x+y` and
    /// `−x−y`, in that order; the first orientation whose cells are all
    /// inside and void wins. Returns `false` without touching the grid when
    /// no orientation fits or `variant` is void.
    pub fn set_building(&mut self, c: Coord, variant: Variant) -> bool {
        if variant.is_void() {
            return false;
        }
        let Some(cells) = ORIENTATIONS
            .iter()
            .find_map(|&dir| self.footprint(c, variant, dir))
        else {
            return false;
        };

        for &cell in &cells {
            let old = self.cells[self.index(cell)];
            self.release(old);
        }
        let id = self.alloc(Building::new(variant, cells.clone()));
        for cell in cells {
            let i = self.index(cell);
            self.cells[i] = id;
        }
        true
    }

    /// Demolishes the building covering `c`.
    ///
    /// Every cell of the building gets a fresh void building. No-op (and
    /// `false`) when `c` is not inside or already void.
    pub fn rm_building(&mut self, c: Coord) -> bool {
        if !self.has_building(c) {
            return false;
        }
        let id = self.cells[self.index(c)];
        let removed = self.release(id);
        for cell in removed.cells().iter().copied() {
            let void = self.alloc(Building::new(Variant::Void, vec![cell]));
            let i = self.index(cell);
            self.cells[i] = void;
        }
        true
    }

    /// Orthogonal in-bounds neighbours in `+x, −x, +y, −y` order.
    pub fn neighbors4(&self, c: Coord) -> impl Iterator<Item = Coord> {
        let (width, height) = (self.width, self.height);
        NEIGHBORS4
            .into_iter()
            .filter_map(move |(dx, dy)| c.offset(dx, dy))
            .filter(move |n| n.x < width && n.y < height)
    }

    /// Independent copy of this grid.
    pub fn deep_copy(&self) -> Grid {
        self.clone()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.area()).map(move |i| Coord::new(i % width, i / width))
    }

    /// Distinct buildings, ordered by the row-major position of their first
    /// visited cell.
    pub fn buildings(&self) -> impl Iterator<Item = (BuildingId, &Building)> + '_ {
        let mut seen = vec![false; self.slots.len()];
        self.cells.iter().filter_map(move |&id| {
            if std::mem::replace(&mut seen[id.index()], true) {
                None
            } else {
                Some((id, self.building(id)))
            }
        })
    }

    /// Checks the partition invariant: every cell references a live
    /// building that lists it, every live building lists only cells that
    /// reference it, and footprint sizes match the catalog.
    pub fn is_partitioned(&self) -> bool {
        if self.cells.len() != self.area() {
            return false;
        }
        let mut covered = vec![false; self.area()];
        for (id, building) in self.slots.iter().enumerate() {
            let Some(building) = building else { continue };
            let (w, h) = building.variant().footprint();
            if building.cells().len() != w * h {
                return false;
            }
            for &c in building.cells() {
                if !self.in_bounds(c) {
                    return false;
                }
                let i = self.index(c);
                if covered[i] || self.cells[i].index() != id {
                    return false;
                }
                covered[i] = true;
            }
        }
        covered.into_iter().all(|c| c)
    }

    fn cell(&self, c: Coord) -> &Building {
        self.building(self.cells[self.index(c)])
    }

    fn index(&self, c: Coord) -> usize {
        c.y * self.width + c.x
    }

    fn footprint(&self, c: Coord, variant: Variant, (sx, sy): (isize, isize)) -> Option<Vec<Coord>> {
        let (w, h) = variant.footprint();
        let mut cells = Vec::with_capacity(w * h);
        for dy in 0..h {
            for dx in 0..w {
                let cell = c.offset(sx * dx as isize, sy * dy as isize)?;
                if !self.inside(cell) || !self.cell(cell).variant().is_void() {
                    return None;
                }
                cells.push(cell);
            }
        }
        Some(cells)
    }

    fn alloc(&mut self, building: Building) -> BuildingId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(building);
                id
            }
            None => {
                let id = BuildingId(self.slots.len() as u32);
                self.slots.push(Some(building));
                id
            }
        }
    }

    fn release(&mut self, id: BuildingId) -> Building {
        let building = self.slots[id.index()]
            .take()
            .expect("released building slot is already free");
        self.free.push(id);
        building
    }
}

/// Structural equality: same dimensions, same `start`, and equal buildings
/// (variant and cell set) at every coordinate. Arena ids are ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.start == other.start
            && self.coords().all(|c| self.cell(c) == other.cell(c))
    }
}

impl Eq for Grid {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: usize, y: usize) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(CityError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn test_start() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.start(), c(0, 1));
        assert_ne!(grid.start(), c(0, 0));
        assert_eq!(grid.variant_at(grid.start()), Some(Variant::Road));
    }

    #[test]
    fn test_road_row() {
        let grid = Grid::new(3, 3).unwrap();
        for x in 0..3 {
            assert_eq!(grid.variant_at(c(x, 1)), Some(Variant::Road));
            assert_eq!(grid.building_at(c(x, 1)).unwrap().cells(), &[c(x, 1)]);
        }
        assert_eq!(grid.variant_at(c(0, 0)), Some(Variant::Void));
        assert!(grid.is_partitioned());
    }

    #[test]
    fn test_inside() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(!grid.inside(c(0, 1)));
        assert!(grid.inside(c(1, 1)));
        assert!(!grid.inside(c(3, 1)));
        assert!(!grid.inside(c(1, 3)));
    }

    #[test]
    fn test_set_building_bounds_and_start() {
        let mut grid = Grid::new(4, 6).unwrap();
        assert!(!grid.set_building(c(4, 4), Variant::BasicHealthClinic));
        assert!(!grid.set_building(grid.start(), Variant::SmallFountainPark));
        assert!(grid.set_building(c(0, 0), Variant::BasicHealthClinic));
        assert!(grid.has_building(c(1, 1)));
        assert!(grid.is_partitioned());
    }

    #[test]
    fn test_clinic_does_not_fit_three_by_three() {
        // The middle road row leaves single-row strips only.
        let mut grid = Grid::new(3, 3).unwrap();
        let before = grid.clone();
        for y in 0..3 {
            for x in 0..3 {
                assert!(!grid.set_building(c(x, y), Variant::BasicHealthClinic));
            }
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_orientation_priority() {
        // 5x5, road on row 2. A 2x2 at (4, 0) cannot grow +x, nor -y;
        // the first legal orientation is -x+y.
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(grid.set_building(c(4, 0), Variant::Residential));
        let b = grid.building_at(c(4, 0)).unwrap();
        let (min, max) = b.bounds();
        assert_eq!((min, max), (c(3, 0), c(4, 1)));
        assert_eq!(b.anchor(), c(4, 0));

        // At (1, 4): +x+y leaves the grid, +x-y fits.
        assert!(grid.set_building(c(1, 4), Variant::Residential));
        let (min, max) = grid.building_at(c(1, 4)).unwrap().bounds();
        assert_eq!((min, max), (c(1, 3), c(2, 4)));
    }

    #[test]
    fn test_set_building_shares_one_instance() {
        let mut grid = Grid::new(6, 6).unwrap();
        assert!(grid.set_building(c(1, 0), Variant::GradeSchool));
        let id = grid.building_id_at(c(1, 0)).unwrap();
        for cell in [c(1, 0), c(2, 0), c(3, 0), c(1, 1), c(2, 1), c(3, 1)] {
            assert_eq!(grid.building_id_at(cell), Some(id));
        }
        assert_eq!(grid.building(id).cells().len(), 6);
    }

    #[test]
    fn test_placement_exclusivity() {
        let mut grid = Grid::new(6, 6).unwrap();
        assert!(grid.set_building(c(0, 0), Variant::Residential));
        let before = grid.clone();
        assert!(!grid.set_building(c(1, 1), Variant::SmallFountainPark));
        assert!(!grid.set_building(c(0, 0), Variant::Residential));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_void_placement_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert!(!grid.set_building(c(0, 0), Variant::Void));
    }

    #[test]
    fn test_rm_building_clears_whole_footprint() {
        let mut grid = Grid::new(6, 6).unwrap();
        assert!(grid.set_building(c(0, 0), Variant::Residential));
        assert!(grid.rm_building(c(1, 1)));
        for cell in [c(0, 0), c(1, 0), c(0, 1), c(1, 1)] {
            assert!(grid.is_void(cell));
            assert_eq!(grid.building_at(cell).unwrap().cells(), &[cell]);
        }
        let ids: Vec<_> = [c(0, 0), c(1, 0)]
            .iter()
            .map(|&cell| grid.building_id_at(cell).unwrap())
            .collect();
        assert_ne!(ids[0], ids[1]);
        assert!(grid.is_partitioned());
    }

    #[test]
    fn test_rm_building_idempotent() {
        let mut grid = Grid::new(5, 5).unwrap();
        let before = grid.clone();
        assert!(!grid.rm_building(c(0, 0)));
        assert!(!grid.rm_building(c(9, 9)));
        assert!(!grid.rm_building(grid.start()));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_neighbors4() {
        let grid = Grid::new(3, 3).unwrap();
        let res: Vec<_> = grid.neighbors4(c(1, 1)).collect();
        assert_eq!(res, vec![c(2, 1), c(0, 1), c(1, 2), c(1, 0)]);
        let corner: Vec<_> = grid.neighbors4(c(0, 0)).collect();
        assert_eq!(corner, vec![c(1, 0), c(0, 1)]);
        let far: Vec<_> = grid.neighbors4(c(2, 2)).collect();
        assert_eq!(far, vec![c(1, 2), c(2, 1)]);
    }

    #[test]
    fn test_deep_copy_independent() {
        let grid = Grid::new(6, 6).unwrap();
        let mut copy = grid.deep_copy();
        assert_eq!(grid, copy);
        assert!(copy.set_building(c(0, 0), Variant::Residential));
        assert_ne!(grid, copy);
        assert!(grid.is_void(c(0, 0)));
        assert!(grid.coords().all(|p| grid.variant_at(p) != Some(Variant::Residential)));
    }

    #[test]
    fn test_equality_ignores_arena_ids() {
        let mut a = Grid::new(6, 6).unwrap();
        let b = a.clone();
        assert!(a.set_building(c(0, 0), Variant::Residential));
        assert!(a.rm_building(c(0, 0)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_buildings_distinct() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert!(grid.set_building(c(0, 0), Variant::Residential));
        let all: Vec<_> = grid.buildings().collect();
        // 16 cells, one 2x2 building: 13 buildings.
        assert_eq!(all.len(), 13);
        assert_eq!(all[0].1.variant(), Variant::Residential);
    }

    #[test]
    fn test_coords_row_major() {
        let grid = Grid::new(3, 3).unwrap();
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(coords.len(), 9);
        assert_eq!(coords[0], c(0, 0));
        assert_eq!(coords[1], c(1, 0));
        assert_eq!(coords[3], c(0, 1));
        assert_eq!(coords[8], c(2, 2));
    }

    proptest! {
        #[test]
        fn prop_partition_survives_edits(
            ops in proptest::collection::vec((0usize..8, 0usize..8, 0usize..Variant::ALL.len(), any::<bool>()), 0..60)
        ) {
            let mut grid = Grid::new(8, 8).unwrap();
            for (x, y, v, place) in ops {
                let before = grid.clone();
                if place {
                    if !grid.set_building(c(x, y), Variant::ALL[v]) {
                        prop_assert_eq!(&grid, &before);
                    }
                } else {
                    grid.rm_building(c(x, y));
                }
                prop_assert!(grid.is_partitioned());
                prop_assert_eq!(grid.variant_at(grid.start()), Some(Variant::Road));
            }
        }

        #[test]
        fn prop_copy_isolated(x in 0usize..6, y in 0usize..6, v in 1usize..Variant::ALL.len()) {
            let original = Grid::new(6, 6).unwrap();
            let snapshot: Vec<_> = original.coords().map(|p| original.variant_at(p)).collect();
            let mut copy = original.deep_copy();
            copy.set_building(c(x, y), Variant::ALL[v]);
            copy.rm_building(c(x, y));
            let after: Vec<_> = original.coords().map(|p| original.variant_at(p)).collect();
            prop_assert_eq!(snapshot, after);
        }
    }
}
