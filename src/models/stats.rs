//! Per-player match statistics for a single gameweek.

use serde::{Deserialize, Serialize};

/// Raw match statistics for one player in one gameweek.
///
/// Mirrors the `stats` object of the FPL live endpoint. Every field defaults
/// to 0 when the source omits it; absence and zero are indistinguishable to
/// callers, which matches upstream semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    #[serde(default)]
    pub minutes: i32,
    #[serde(default)]
    pub goals_scored: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub clean_sheets: i32,
    #[serde(default)]
    pub penalties_saved: i32,
    #[serde(default)]
    pub saves: i32,
    #[serde(default)]
    pub own_goals: i32,
    #[serde(default)]
    pub penalties_missed: i32,
    #[serde(default)]
    pub goals_conceded: i32,
    #[serde(default)]
    pub yellow_cards: i32,
    #[serde(default)]
    pub red_cards: i32,
    #[serde(default)]
    pub bps: i32,
    #[serde(default)]
    pub defensive_contribution: i32,
    #[serde(default)]
    pub clearances_blocks_interceptions: i32,
    #[serde(default)]
    pub tackles: i32,
    #[serde(default)]
    pub ball_recoveries: i32,
}

/// Named stat fields, for callers that address stats generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Minutes,
    GoalsScored,
    Assists,
    CleanSheets,
    PenaltiesSaved,
    Saves,
    OwnGoals,
    PenaltiesMissed,
    GoalsConceded,
    YellowCards,
    RedCards,
    Bps,
    DefensiveContribution,
    ClearancesBlocksInterceptions,
    Tackles,
    BallRecoveries,
}

impl MatchStats {
    /// Look up a stat by name. Never fails; missing data was already
    /// defaulted to 0 at decode time.
    pub fn value(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Minutes => self.minutes,
            Stat::GoalsScored => self.goals_scored,
            Stat::Assists => self.assists,
            Stat::CleanSheets => self.clean_sheets,
            Stat::PenaltiesSaved => self.penalties_saved,
            Stat::Saves => self.saves,
            Stat::OwnGoals => self.own_goals,
            Stat::PenaltiesMissed => self.penalties_missed,
            Stat::GoalsConceded => self.goals_conceded,
            Stat::YellowCards => self.yellow_cards,
            Stat::RedCards => self.red_cards,
            Stat::Bps => self.bps,
            Stat::DefensiveContribution => self.defensive_contribution,
            Stat::ClearancesBlocksInterceptions => self.clearances_blocks_interceptions,
            Stat::Tackles => self.tackles,
            Stat::BallRecoveries => self.ball_recoveries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let stats = MatchStats::default();
        assert_eq!(stats.value(Stat::Minutes), 0);
        assert_eq!(stats.value(Stat::GoalsScored), 0);
        assert_eq!(stats.value(Stat::Bps), 0);
        assert_eq!(stats.value(Stat::BallRecoveries), 0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        // Partial record, as the live endpoint serves mid-match
        let stats: MatchStats =
            serde_json::from_str(r#"{"minutes": 45, "goals_scored": 1}"#).unwrap();
        assert_eq!(stats.minutes, 45);
        assert_eq!(stats.goals_scored, 1);
        assert_eq!(stats.assists, 0);
        assert_eq!(stats.saves, 0);
        assert_eq!(stats.bps, 0);
    }

    #[test]
    fn test_value_matches_fields() {
        let stats = MatchStats {
            minutes: 90,
            goals_scored: 2,
            assists: 1,
            clearances_blocks_interceptions: 7,
            tackles: 3,
            ball_recoveries: 5,
            ..Default::default()
        };
        assert_eq!(stats.value(Stat::Minutes), 90);
        assert_eq!(stats.value(Stat::GoalsScored), 2);
        assert_eq!(stats.value(Stat::Assists), 1);
        assert_eq!(stats.value(Stat::ClearancesBlocksInterceptions), 7);
        assert_eq!(stats.value(Stat::Tackles), 3);
        assert_eq!(stats.value(Stat::BallRecoveries), 5);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let stats: MatchStats =
            serde_json::from_str(r#"{"minutes": 60, "influence": "33.4"}"#).unwrap();
        assert_eq!(stats.minutes, 60);
    }
}
