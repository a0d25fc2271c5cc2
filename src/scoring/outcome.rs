//! Wager settlement from two participant totals.

use serde::{Deserialize, Serialize};

use crate::models::Participant;

/// Default stake: £2 per point of difference.
pub const DEFAULT_STAKE_MULTIPLIER: f64 = 2.0;

/// The settled outcome of one gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    Draw,
    Decided {
        winner: Participant,
        /// What the loser owes, in pounds. Zero when the stake multiplier
        /// is zero; the winner is still recorded.
        amount: f64,
    },
}

impl Outcome {
    pub fn payer(&self) -> Option<Participant> {
        match self {
            Outcome::Draw => None,
            Outcome::Decided { winner, .. } => Some(winner.other()),
        }
    }

    pub fn payee(&self) -> Option<Participant> {
        match self {
            Outcome::Draw => None,
            Outcome::Decided { winner, .. } => Some(*winner),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Draw => write!(f, "It's a draw"),
            Outcome::Decided { winner, amount } => {
                write!(f, "{} pays {} £{}", winner.other(), winner, amount)
            }
        }
    }
}

/// Compare the two totals and derive who owes whom.
///
/// The stake multiplier scales the point difference into money and must be
/// non-negative; per-gameweek overrides come from the store, not from here.
pub fn resolve_outcome(james_total: i32, laurie_total: i32, stake_multiplier: f64) -> Outcome {
    let winner = match james_total.cmp(&laurie_total) {
        std::cmp::Ordering::Greater => Participant::James,
        std::cmp::Ordering::Less => Participant::Laurie,
        std::cmp::Ordering::Equal => return Outcome::Draw,
    };
    let amount = f64::from((james_total - laurie_total).abs()) * stake_multiplier;
    Outcome::Decided { winner, amount }
}
