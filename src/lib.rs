//! # FPL Wager
//!
//! A local tracker for a standing fantasy-football wager between two
//! participants sharing one club's players.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, fixtures, stats, rosters)
//! - **scoring**: The pure scoring engine (category evaluators, bonus
//!   ranking, totals, settlement)
//! - **fetch**: FPL API client producing gameweek snapshots
//! - **storage**: Per-gameweek wager state on the filesystem
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod fetch;
pub mod models;
pub mod scoring;
pub mod storage;

pub use models::*;
