//! Identifier types for upstream FPL entities.
//!
//! The FPL API hands out stable numeric ids for players, teams and fixtures
//! within a season, so these are plain aliases rather than generated ids.

/// Player element id from the bootstrap (`elements[].id`).
pub type PlayerId = u32;

/// Team id from the bootstrap (`teams[].id`).
pub type TeamId = u32;

/// Fixture id (`fixtures[].id`).
pub type FixtureId = u32;

/// Gameweek number (`events[].id`), 1-based within a season.
pub type Gameweek = u32;
