//! Bonus-point allocation.
//!
//! Approximates the platform's in-play bonus: rank the participants of one
//! fixture by raw BPS, then hand 3/2/1 points to the top three rank groups.
//! Ties share a rank and the next distinct value takes the next rank, so a
//! two-way tie at the top still leaves rank 2 available. This exact
//! tie-breaking is load-bearing; downstream consumers depend on it.

use std::collections::HashMap;

use crate::models::{Fixture, GameweekSnapshot, PlayerId};

/// Bonus points for every ranked participant of a fixture.
///
/// Players whose team is not in the fixture, or whose BPS is zero or
/// negative, are excluded and implicitly score 0.
pub fn allocate_bonus(fixture: &Fixture, snapshot: &GameweekSnapshot) -> HashMap<PlayerId, i32> {
    let mut ranked: Vec<(PlayerId, i32)> = snapshot
        .players
        .iter()
        .filter(|p| fixture.involves(p.team))
        .map(|p| (p.id, snapshot.stats(p.id).bps))
        .filter(|(_, bps)| *bps > 0)
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut awards = HashMap::new();
    let mut rank = 0;
    let mut previous_bps = None;
    for (id, bps) in ranked {
        if previous_bps != Some(bps) {
            rank += 1;
            previous_bps = Some(bps);
        }
        if rank > 3 {
            break;
        }
        awards.insert(id, 4 - rank);
    }
    awards
}

/// Bonus points for a single player: 0 unless their team has a fixture in
/// the snapshot and they made one of the top three BPS groups.
pub fn bonus_points(player_id: PlayerId, snapshot: &GameweekSnapshot) -> i32 {
    let Some(player) = snapshot.player(player_id) else {
        return 0;
    };
    let Some(fixture) = snapshot.fixture_for_team(player.team) else {
        return 0;
    };
    allocate_bonus(fixture, snapshot)
        .get(&player_id)
        .copied()
        .unwrap_or(0)
}
