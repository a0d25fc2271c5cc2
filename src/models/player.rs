//! Player identity model.

use serde::{Deserialize, Serialize};

use super::{PlayerId, Position, TeamId};

/// A player as described by the FPL bootstrap.
///
/// Immutable per gameweek snapshot; owned by the upstream data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Element id, the key used by the live stats endpoint.
    pub id: PlayerId,

    /// Display name (e.g. "João Pedro").
    pub web_name: String,

    /// Position category, decoded from `element_type`.
    #[serde(rename = "element_type")]
    pub position: Position,

    /// Team the player belongs to.
    pub team: TeamId,

    /// Image-asset code used by the Premier League photo CDN.
    pub code: u64,

    /// Season-to-date points as reported upstream; informational only,
    /// the engine recomputes the selected gameweek from raw stats.
    #[serde(default)]
    pub event_points: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bootstrap_element() {
        let json = r#"{
            "id": 433,
            "web_name": "Estupiñan",
            "element_type": 2,
            "team": 5,
            "code": 222531,
            "event_points": 6,
            "now_cost": 51
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, 433);
        assert_eq!(player.web_name, "Estupiñan");
        assert_eq!(player.position, Position::Defender);
        assert_eq!(player.team, 5);
        assert_eq!(player.code, 222531);
        assert_eq!(player.event_points, 6);
    }

    #[test]
    fn test_event_points_optional() {
        let json = r#"{"id": 1, "web_name": "Verbruggen", "element_type": 1, "team": 5, "code": 111}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.event_points, 0);
    }
}
