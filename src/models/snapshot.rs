//! Immutable gameweek snapshot: everything the scoring engine reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Fixture, Gameweek, MatchStats, Player, PlayerId, TeamId};

/// All upstream data for one gameweek, frozen at fetch time.
///
/// The engine is a pure function over one of these; refreshing is the fetch
/// layer's job. A partial snapshot (no fixtures yet, no live stats yet) is
/// valid and simply scores as zeros.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameweekSnapshot {
    pub gameweek: Gameweek,
    pub players: Vec<Player>,
    pub fixtures: Vec<Fixture>,
    /// Live per-player stats keyed by element id.
    pub live: HashMap<PlayerId, MatchStats>,
}

impl GameweekSnapshot {
    pub fn new(gameweek: Gameweek) -> Self {
        Self {
            gameweek,
            ..Default::default()
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Live stats for a player; an all-zero record when none were reported.
    pub fn stats(&self, id: PlayerId) -> MatchStats {
        self.live.get(&id).cloned().unwrap_or_default()
    }

    /// The fixture a team plays in this gameweek, if any.
    pub fn fixture_for_team(&self, team: TeamId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.involves(team))
    }
}
