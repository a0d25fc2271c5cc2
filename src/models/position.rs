//! Player positions and position-dependent scoring rules.

use serde::{Deserialize, Serialize};

/// A player's position category.
///
/// The FPL bootstrap encodes this as `element_type` 1..=4. Any other value
/// is a corrupt record and fails decoding rather than being absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            other => Err(format!("unknown element_type: {}", other)),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        match position {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Goalkeeper => write!(f, "GKP"),
            Position::Defender => write!(f, "DEF"),
            Position::Midfielder => write!(f, "MID"),
            Position::Forward => write!(f, "FWD"),
        }
    }
}

impl Position {
    /// Points awarded per goal scored.
    pub fn goal_points(&self) -> i32 {
        match self {
            Position::Goalkeeper | Position::Defender => 6,
            Position::Midfielder => 5,
            Position::Forward => 4,
        }
    }

    /// Points awarded per clean sheet.
    pub fn clean_sheet_points(&self) -> i32 {
        match self {
            Position::Goalkeeper | Position::Defender => 4,
            Position::Midfielder => 1,
            Position::Forward => 0,
        }
    }

    /// Whether goals conceded count against this position.
    pub fn concedes_penalized(&self) -> bool {
        matches!(self, Position::Goalkeeper | Position::Defender)
    }

    /// Defensive-contribution threshold, if this position earns the award.
    ///
    /// Goalkeepers have no defensive-contribution award at all.
    pub fn defensive_threshold(&self) -> Option<i32> {
        match self {
            Position::Goalkeeper => None,
            Position::Defender => Some(10),
            Position::Midfielder | Position::Forward => Some(12),
        }
    }

    /// Whether ball recoveries count toward the defensive threshold.
    pub fn defensive_counts_recoveries(&self) -> bool {
        matches!(self, Position::Midfielder | Position::Forward)
    }
}
