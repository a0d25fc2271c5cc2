//! Scoring engine.
//!
//! Pure computation over an immutable [`GameweekSnapshot`]: per-category
//! evaluators, fixture-scoped bonus ranking, per-player and per-participant
//! totals, and the wager settlement. No I/O, no shared state; safe to call
//! repeatedly and concurrently.

pub mod bonus;
pub mod evaluators;
pub mod outcome;

pub use bonus::{allocate_bonus, bonus_points};
pub use evaluators::Category;
pub use outcome::{resolve_outcome, Outcome, DEFAULT_STAKE_MULTIPLIER};

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{Gameweek, GameweekSnapshot, MatchStats, Player, PlayerId, RosterEntry};

/// One category's contribution to a player's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPoints {
    pub category: Category,
    pub points: i32,
}

/// A player's full per-category breakdown for one gameweek.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub player_id: PlayerId,
    pub contributions: Vec<CategoryPoints>,
    pub total: i32,
}

impl ScoreBreakdown {
    /// Points for one category; 0 when the category is absent.
    pub fn points(&self, category: Category) -> i32 {
        self.contributions
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.points)
            .unwrap_or(0)
    }

    fn zero(player_id: PlayerId) -> Self {
        Self {
            player_id,
            contributions: Vec::new(),
            total: 0,
        }
    }
}

/// Score one player from their stats and a pre-computed bonus award.
pub fn score_player(player: &Player, stats: &MatchStats, bonus: i32) -> ScoreBreakdown {
    let mut contributions: Vec<CategoryPoints> = Category::STAT_CATEGORIES
        .iter()
        .map(|&category| CategoryPoints {
            category,
            points: evaluators::evaluate(category, stats, player.position),
        })
        .collect();
    contributions.push(CategoryPoints {
        category: Category::Bonus,
        points: bonus,
    });

    let total = contributions.iter().map(|c| c.points).sum();
    ScoreBreakdown {
        player_id: player.id,
        contributions,
        total,
    }
}

/// Score a player by id against the whole snapshot, including the bonus
/// ranking for their fixture. Unknown players score zero rather than failing;
/// an incomplete snapshot is not an error.
pub fn compute_player_score(player_id: PlayerId, snapshot: &GameweekSnapshot) -> ScoreBreakdown {
    let Some(player) = snapshot.player(player_id) else {
        return ScoreBreakdown::zero(player_id);
    };
    let stats = snapshot.stats(player_id);
    let bonus = bonus_points(player_id, snapshot);
    score_player(player, &stats, bonus)
}

/// Fold a name to a comparison key: NFKD-decompose, drop combining marks,
/// lowercase, keep only alphanumerics. "Ó Riley", "O'Riley" and "oriley"
/// all collapse to the same key.
pub fn normalize_name(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Whether a roster name and a live `web_name` refer to the same player,
/// ignoring case, diacritics and punctuation.
pub fn names_match(roster_name: &str, web_name: &str) -> bool {
    let key = normalize_name(roster_name);
    !key.is_empty() && key == normalize_name(web_name)
}

/// Find a snapshot player by roster name.
pub fn find_player<'a>(snapshot: &'a GameweekSnapshot, name: &str) -> Option<&'a Player> {
    snapshot
        .players
        .iter()
        .find(|p| names_match(name, &p.web_name))
}

/// Per-player breakdowns for the roster entries active at this gameweek.
/// Entries whose player is missing from the snapshot are skipped.
pub fn roster_breakdowns(
    roster: &[RosterEntry],
    gameweek: Gameweek,
    snapshot: &GameweekSnapshot,
) -> Vec<ScoreBreakdown> {
    roster
        .iter()
        .filter(|entry| entry.active_at(gameweek))
        .filter_map(|entry| find_player(snapshot, &entry.name))
        .map(|player| compute_player_score(player.id, snapshot))
        .collect()
}

/// Total points for one participant's active roster at a gameweek.
pub fn participant_total(
    roster: &[RosterEntry],
    gameweek: Gameweek,
    snapshot: &GameweekSnapshot,
) -> i32 {
    roster_breakdowns(roster, gameweek, snapshot)
        .iter()
        .map(|b| b.total)
        .sum()
}
