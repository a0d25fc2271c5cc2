//! Fixture model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FixtureId, Gameweek, TeamId};

/// One match in a gameweek.
///
/// The engine only uses fixtures to scope bonus-point ranking to the players
/// who actually took part in a given match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,

    /// Gameweek this fixture belongs to (`event` upstream).
    #[serde(rename = "event")]
    pub gameweek: Option<Gameweek>,

    /// Home team id (`team_h` upstream).
    #[serde(rename = "team_h")]
    pub home_team: TeamId,

    /// Away team id (`team_a` upstream).
    #[serde(rename = "team_a")]
    pub away_team: TeamId,

    /// Final home score, absent until the match has been played.
    #[serde(rename = "team_h_score", default)]
    pub home_score: Option<i32>,

    /// Final away score, absent until the match has been played.
    #[serde(rename = "team_a_score", default)]
    pub away_score: Option<i32>,

    /// Kickoff time; absent for unscheduled fixtures.
    #[serde(default)]
    pub kickoff_time: Option<DateTime<Utc>>,
}

impl Fixture {
    /// Whether a team is on either side of this fixture.
    pub fn involves(&self, team: TeamId) -> bool {
        self.home_team == team || self.away_team == team
    }
}
