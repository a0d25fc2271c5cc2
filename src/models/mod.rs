//! Core data models for the wager tracker.

mod fixture;
mod ids;
mod player;
mod position;
mod roster;
mod snapshot;
mod stats;

pub use fixture::*;
pub use ids::*;
pub use player::*;
pub use position::*;
pub use roster::*;
pub use snapshot::*;
pub use stats::*;
