//! City grid.
//!
//! Cells, building instances and placement rules. A [`Grid`] owns every
//! building reachable from its cells; cloning it yields a fully
//! independent layout, which is what mutation operators work on.

mod layout;
mod seed;
mod types;
mod view;

pub use layout::Grid;
pub use types::{Building, BuildingId, Coord};
pub use view::CellView;
