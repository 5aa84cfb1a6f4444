//! Layout scoring.
//!
//! [`score`] is a pure function of the grid. A [`Census`] of the grid is
//! taken once and shared by the residential terms, the penalties and the
//! mutation operators that need local scores.
//!
//! Score terms, summed:
//!
//! - shortfall against one residential cell per eight grid cells;
//! - per residential cell local utility ([`local_score`]);
//! - construction cost;
//! - unmet road and rail adjacency;
//! - transit cells cut off from their network;
//! - building counts outside [`COUNT_BOUNDS`].
//!
//! A grid without residences scores [`UNINHABITED`] regardless of the rest.

mod census;
mod local;
mod penalty;
mod scorer;
mod summary;

pub use census::Census;
pub use local::{find_worst_residence, local_score, WorstResidence, DISCONNECTED_RESIDENCE};
pub(crate) use local::worst_in;
pub use penalty::{
    adjacency_penalty, count_bounds_penalty, disconnection_penalty, penalty, COUNT_BOUNDS,
};
pub use scorer::{breakdown, score, ScoreBreakdown, UNINHABITED};
pub use summary::Summary;
