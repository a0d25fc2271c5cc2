//! Roster membership: which participant owns which player, and when.

use serde::{Deserialize, Serialize};

use super::Gameweek;

/// The two sides of the wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    James,
    Laurie,
}

impl Participant {
    pub fn other(&self) -> Participant {
        match self {
            Participant::James => Participant::Laurie,
            Participant::Laurie => Participant::James,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Participant::James => "james",
            Participant::Laurie => "laurie",
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Participant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "james" => Ok(Participant::James),
            "laurie" => Ok(Participant::Laurie),
            other => Err(format!("unknown participant: {}", other)),
        }
    }
}

/// One roster entry: a player name owned over a half-open gameweek window.
///
/// Names are matched against live `web_name` records accent- and
/// case-insensitively, since the two sources disagree on encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,

    /// First gameweek the player counts for this participant.
    pub from_gw: Gameweek,

    /// First gameweek the player no longer counts (exclusive).
    /// Absent means the membership is open-ended.
    #[serde(default)]
    pub to_gw: Option<Gameweek>,
}

impl RosterEntry {
    /// Whether this membership covers the given gameweek.
    /// The window is half-open: `from_gw <= gw < to_gw`.
    pub fn active_at(&self, gameweek: Gameweek) -> bool {
        if gameweek < self.from_gw {
            return false;
        }
        match self.to_gw {
            Some(end) => gameweek < end,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(from_gw: Gameweek, to_gw: Option<Gameweek>) -> RosterEntry {
        RosterEntry {
            name: "Mitoma".to_string(),
            from_gw,
            to_gw,
        }
    }

    #[test]
    fn test_window_half_open() {
        let e = entry(10, Some(15));
        assert!(!e.active_at(9));
        assert!(e.active_at(10));
        assert!(e.active_at(14));
        assert!(!e.active_at(15));
        assert!(!e.active_at(16));
    }

    #[test]
    fn test_open_ended_window() {
        let e = entry(22, None);
        assert!(!e.active_at(21));
        assert!(e.active_at(22));
        assert!(e.active_at(38));
    }

    #[test]
    fn test_participant_roundtrip() {
        assert_eq!("james".parse::<Participant>(), Ok(Participant::James));
        assert_eq!("Laurie".parse::<Participant>(), Ok(Participant::Laurie));
        assert!("steve".parse::<Participant>().is_err());
        assert_eq!(Participant::James.other(), Participant::Laurie);
    }

    #[test]
    fn test_roster_entry_decode() {
        let e: RosterEntry = serde_json::from_str(r#"{"name": "O'Riley", "from_gw": 1}"#).unwrap();
        assert_eq!(e.to_gw, None);
        assert!(e.active_at(1));
    }
}
