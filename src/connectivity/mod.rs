//! Connectivity analysis.
//!
//! Breadth-first reachability over the two transit networks and the
//! side-based frontage rule that decides whether a residence is served by
//! the road network.
//!
//! - **Road network**: rooted at the grid's `start`, through roads and
//!   crossings.
//! - **Rail network**: rooted at every railway-station cell, through rails,
//!   crossings and stations.

mod frontage;
mod reach;

pub use frontage::is_well_connected;
pub use reach::{rail_reachable, reachable, road_reachable, ReachSet};
