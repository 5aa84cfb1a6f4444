//! Building catalog.
//!
//! An immutable table of building variants: footprint, coverage radius,
//! adjacency requirements and construction cost. The optimization core
//! only reads it.

mod variant;

pub use variant::{BuildingType, Kind, Variant};
