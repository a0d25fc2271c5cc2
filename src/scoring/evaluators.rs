//! Per-category scoring rules.
//!
//! One pure function per scoring category. Each combines raw match stats
//! with the position table and returns a signed point contribution. Every
//! function is total: missing data is zero, zero scores zero points.

use serde::{Deserialize, Serialize};

use crate::models::{MatchStats, Position};

/// Scoring categories that make up a player's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Minutes,
    Goals,
    Assists,
    CleanSheets,
    PenaltySaves,
    Saves,
    OwnGoals,
    PenaltiesMissed,
    GoalsConceded,
    YellowCards,
    RedCards,
    Bonus,
    DefensiveContribution,
}

impl Category {
    /// All categories except bonus, which needs fixture-wide ranking and is
    /// evaluated separately.
    pub const STAT_CATEGORIES: [Category; 12] = [
        Category::Minutes,
        Category::Goals,
        Category::Assists,
        Category::CleanSheets,
        Category::PenaltySaves,
        Category::Saves,
        Category::OwnGoals,
        Category::PenaltiesMissed,
        Category::GoalsConceded,
        Category::YellowCards,
        Category::RedCards,
        Category::DefensiveContribution,
    ];
}

/// 0 for no appearance, 1 for a cameo, 2 from an hour up.
pub fn minutes_points(stats: &MatchStats) -> i32 {
    match stats.minutes {
        m if m <= 0 => 0,
        m if m < 60 => 1,
        _ => 2,
    }
}

pub fn goal_points(stats: &MatchStats, position: Position) -> i32 {
    stats.goals_scored * position.goal_points()
}

pub fn assist_points(stats: &MatchStats) -> i32 {
    stats.assists * 3
}

pub fn clean_sheet_points(stats: &MatchStats, position: Position) -> i32 {
    stats.clean_sheets * position.clean_sheet_points()
}

pub fn penalty_save_points(stats: &MatchStats) -> i32 {
    stats.penalties_saved * 5
}

/// One point per three saves.
pub fn save_points(stats: &MatchStats) -> i32 {
    stats.saves / 3
}

pub fn own_goal_points(stats: &MatchStats) -> i32 {
    stats.own_goals * -2
}

pub fn penalty_miss_points(stats: &MatchStats) -> i32 {
    stats.penalties_missed * -2
}

/// Minus one point per two goals conceded, keepers and defenders only.
pub fn goals_conceded_points(stats: &MatchStats, position: Position) -> i32 {
    if position.concedes_penalized() {
        -(stats.goals_conceded / 2)
    } else {
        0
    }
}

pub fn yellow_card_points(stats: &MatchStats) -> i32 {
    stats.yellow_cards * -1
}

pub fn red_card_points(stats: &MatchStats) -> i32 {
    stats.red_cards * -3
}

/// Qualifying defensive actions for the defensive-contribution award.
///
/// Defenders count clearances/blocks/interceptions plus tackles; midfielders
/// and forwards also count ball recoveries.
pub fn defensive_actions(stats: &MatchStats, position: Position) -> i32 {
    let mut actions = stats.clearances_blocks_interceptions + stats.tackles;
    if position.defensive_counts_recoveries() {
        actions += stats.ball_recoveries;
    }
    actions
}

/// Flat +2 once the qualifying actions reach the position threshold.
/// Not scaled by how far over the threshold the player went.
pub fn defensive_contribution_points(stats: &MatchStats, position: Position) -> i32 {
    match position.defensive_threshold() {
        Some(threshold) if defensive_actions(stats, position) >= threshold => 2,
        _ => 0,
    }
}

/// Evaluate one stat-derived category. Bonus is excluded here because it
/// depends on every participant of the fixture, not just this player.
pub fn evaluate(category: Category, stats: &MatchStats, position: Position) -> i32 {
    match category {
        Category::Minutes => minutes_points(stats),
        Category::Goals => goal_points(stats, position),
        Category::Assists => assist_points(stats),
        Category::CleanSheets => clean_sheet_points(stats, position),
        Category::PenaltySaves => penalty_save_points(stats),
        Category::Saves => save_points(stats),
        Category::OwnGoals => own_goal_points(stats),
        Category::PenaltiesMissed => penalty_miss_points(stats),
        Category::GoalsConceded => goals_conceded_points(stats, position),
        Category::YellowCards => yellow_card_points(stats),
        Category::RedCards => red_card_points(stats),
        Category::DefensiveContribution => defensive_contribution_points(stats, position),
        Category::Bonus => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(f: impl FnOnce(&mut MatchStats)) -> MatchStats {
        let mut stats = MatchStats::default();
        f(&mut stats);
        stats
    }

    #[test]
    fn test_minutes_banding() {
        assert_eq!(minutes_points(&with(|s| s.minutes = 0)), 0);
        assert_eq!(minutes_points(&with(|s| s.minutes = 1)), 1);
        assert_eq!(minutes_points(&with(|s| s.minutes = 59)), 1);
        assert_eq!(minutes_points(&with(|s| s.minutes = 60)), 2);
        assert_eq!(minutes_points(&with(|s| s.minutes = 90)), 2);
    }

    #[test]
    fn test_goal_points_by_position() {
        let stats = with(|s| s.goals_scored = 2);
        assert_eq!(goal_points(&stats, Position::Forward), 8);
        assert_eq!(goal_points(&stats, Position::Midfielder), 10);
        assert_eq!(goal_points(&stats, Position::Defender), 12);
        assert_eq!(goal_points(&stats, Position::Goalkeeper), 12);
    }

    #[test]
    fn test_assists() {
        assert_eq!(assist_points(&with(|s| s.assists = 2)), 6);
    }

    #[test]
    fn test_clean_sheets_by_position() {
        let stats = with(|s| s.clean_sheets = 1);
        assert_eq!(clean_sheet_points(&stats, Position::Goalkeeper), 4);
        assert_eq!(clean_sheet_points(&stats, Position::Defender), 4);
        assert_eq!(clean_sheet_points(&stats, Position::Midfielder), 1);
        assert_eq!(clean_sheet_points(&stats, Position::Forward), 0);
    }

    #[test]
    fn test_penalty_saves() {
        assert_eq!(penalty_save_points(&with(|s| s.penalties_saved = 1)), 5);
    }

    #[test]
    fn test_saves_floor() {
        for (saves, expected) in [(0, 0), (1, 0), (2, 0), (3, 1), (4, 1), (5, 1), (6, 2)] {
            assert_eq!(save_points(&with(|s| s.saves = saves)), expected);
        }
    }

    #[test]
    fn test_negative_categories() {
        assert_eq!(own_goal_points(&with(|s| s.own_goals = 1)), -2);
        assert_eq!(penalty_miss_points(&with(|s| s.penalties_missed = 2)), -4);
        assert_eq!(yellow_card_points(&with(|s| s.yellow_cards = 1)), -1);
        assert_eq!(red_card_points(&with(|s| s.red_cards = 1)), -3);
    }

    #[test]
    fn test_goals_conceded_penalized_positions_only() {
        let stats = with(|s| s.goals_conceded = 3);
        assert_eq!(goals_conceded_points(&stats, Position::Goalkeeper), -1);
        assert_eq!(goals_conceded_points(&stats, Position::Defender), -1);
        assert_eq!(goals_conceded_points(&stats, Position::Midfielder), 0);
        assert_eq!(goals_conceded_points(&stats, Position::Forward), 0);

        let four = with(|s| s.goals_conceded = 4);
        assert_eq!(goals_conceded_points(&four, Position::Defender), -2);
    }

    #[test]
    fn test_defender_defensive_threshold() {
        let at_threshold = with(|s| {
            s.clearances_blocks_interceptions = 6;
            s.tackles = 4;
        });
        assert_eq!(
            defensive_contribution_points(&at_threshold, Position::Defender),
            2
        );

        let below = with(|s| {
            s.clearances_blocks_interceptions = 6;
            s.tackles = 3;
        });
        assert_eq!(defensive_contribution_points(&below, Position::Defender), 0);
    }

    #[test]
    fn test_defender_recoveries_do_not_count() {
        let stats = with(|s| {
            s.clearances_blocks_interceptions = 5;
            s.tackles = 4;
            s.ball_recoveries = 10;
        });
        assert_eq!(defensive_actions(&stats, Position::Defender), 9);
        assert_eq!(defensive_contribution_points(&stats, Position::Defender), 0);
    }

    #[test]
    fn test_midfielder_defensive_threshold() {
        let below = with(|s| {
            s.clearances_blocks_interceptions = 5;
            s.tackles = 4;
            s.ball_recoveries = 2;
        });
        assert_eq!(defensive_actions(&below, Position::Midfielder), 11);
        assert_eq!(
            defensive_contribution_points(&below, Position::Midfielder),
            0
        );

        let at_threshold = with(|s| {
            s.clearances_blocks_interceptions = 5;
            s.tackles = 4;
            s.ball_recoveries = 3;
        });
        assert_eq!(
            defensive_contribution_points(&at_threshold, Position::Midfielder),
            2
        );
    }

    #[test]
    fn test_goalkeeper_has_no_defensive_award() {
        let stats = with(|s| {
            s.clearances_blocks_interceptions = 20;
            s.tackles = 20;
        });
        assert_eq!(
            defensive_contribution_points(&stats, Position::Goalkeeper),
            0
        );
    }

    #[test]
    fn test_all_zero_stats_score_zero_everywhere() {
        let stats = MatchStats::default();
        for position in [
            Position::Goalkeeper,
            Position::Defender,
            Position::Midfielder,
            Position::Forward,
        ] {
            for category in Category::STAT_CATEGORIES {
                assert_eq!(evaluate(category, &stats, position), 0);
            }
        }
    }
}
