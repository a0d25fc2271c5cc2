//! Score, outcome and settlement endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Gameweek, GameweekSnapshot, Participant, Position};
use crate::scoring::{self, CategoryPoints, Outcome};
use crate::storage::GameweekResult;

#[derive(Debug, Serialize)]
pub struct PlayerScore {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub total: i32,
    pub breakdown: Vec<CategoryPoints>,
}

#[derive(Debug, Serialize)]
pub struct ParticipantScores {
    pub participant: Participant,
    pub total: i32,
    pub players: Vec<PlayerScore>,
}

#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub gameweek: Gameweek,
    pub multiplier: f64,
    pub james: ParticipantScores,
    pub laurie: ParticipantScores,
    pub outcome: Outcome,
    pub settlement: String,
}

#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub gameweek: Gameweek,
    pub james_total: i32,
    pub laurie_total: i32,
    pub multiplier: f64,
    pub outcome: Outcome,
    pub settlement: String,
}

/// The stored per-gameweek override, or the configured default stake.
fn effective_multiplier(state: &AppState, gameweek: Gameweek) -> Result<f64, ApiError> {
    Ok(state
        .store
        .multiplier(gameweek)?
        .unwrap_or(state.config.wager.default_multiplier))
}

fn score_participant(
    state: &AppState,
    participant: Participant,
    gameweek: Gameweek,
    snapshot: &GameweekSnapshot,
) -> ParticipantScores {
    let roster = state.config.rosters.for_participant(participant);
    let players: Vec<PlayerScore> = roster
        .iter()
        .filter(|entry| entry.active_at(gameweek))
        .filter_map(|entry| scoring::find_player(snapshot, &entry.name))
        .map(|player| {
            let breakdown = scoring::compute_player_score(player.id, snapshot);
            PlayerScore {
                id: player.id,
                name: player.web_name.clone(),
                position: player.position,
                total: breakdown.total,
                breakdown: breakdown.contributions,
            }
        })
        .collect();

    let total = players.iter().map(|p| p.total).sum();
    ParticipantScores {
        participant,
        total,
        players,
    }
}

pub async fn gameweek_scores(
    State(state): State<AppState>,
    Path(gameweek): Path<Gameweek>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let snapshot = state.source.snapshot(gameweek).await?;
    let multiplier = effective_multiplier(&state, gameweek)?;

    let james = score_participant(&state, Participant::James, gameweek, &snapshot);
    let laurie = score_participant(&state, Participant::Laurie, gameweek, &snapshot);
    let outcome = scoring::resolve_outcome(james.total, laurie.total, multiplier);
    let settlement = outcome.to_string();

    Ok(Json(ScoresResponse {
        gameweek,
        multiplier,
        james,
        laurie,
        outcome,
        settlement,
    }))
}

pub async fn gameweek_outcome(
    State(state): State<AppState>,
    Path(gameweek): Path<Gameweek>,
) -> Result<Json<OutcomeResponse>, ApiError> {
    let snapshot = state.source.snapshot(gameweek).await?;
    let multiplier = effective_multiplier(&state, gameweek)?;

    let james_total =
        scoring::participant_total(&state.config.rosters.james, gameweek, &snapshot);
    let laurie_total =
        scoring::participant_total(&state.config.rosters.laurie, gameweek, &snapshot);
    let outcome = scoring::resolve_outcome(james_total, laurie_total, multiplier);
    let settlement = outcome.to_string();

    Ok(Json(OutcomeResponse {
        gameweek,
        james_total,
        laurie_total,
        multiplier,
        outcome,
        settlement,
    }))
}

/// Compute the gameweek and persist it as a settled result.
pub async fn settle_gameweek(
    State(state): State<AppState>,
    Path(gameweek): Path<Gameweek>,
) -> Result<Json<GameweekResult>, ApiError> {
    let snapshot = state.source.snapshot(gameweek).await?;
    let multiplier = effective_multiplier(&state, gameweek)?;

    let james_total =
        scoring::participant_total(&state.config.rosters.james, gameweek, &snapshot);
    let laurie_total =
        scoring::participant_total(&state.config.rosters.laurie, gameweek, &snapshot);

    let result = GameweekResult::settle(gameweek, james_total, laurie_total, multiplier);
    state.store.save_result(&result)?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::config::AppConfig;
    use crate::fetch::{FetchError, SnapshotSource};
    use crate::models::{
        Gameweek, GameweekSnapshot, MatchStats, Player, Position, RosterEntry,
    };
    use crate::storage::{StateStore, StorageConfig};

    struct FakeSource {
        snapshot: GameweekSnapshot,
    }

    #[async_trait]
    impl SnapshotSource for FakeSource {
        async fn active_gameweek(&self) -> Result<Gameweek, FetchError> {
            Ok(self.snapshot.gameweek)
        }

        async fn snapshot(&self, gameweek: Gameweek) -> Result<GameweekSnapshot, FetchError> {
            let mut snapshot = self.snapshot.clone();
            snapshot.gameweek = gameweek;
            Ok(snapshot)
        }
    }

    fn player(id: u32, name: &str, position: Position) -> Player {
        Player {
            id,
            web_name: name.to_string(),
            position,
            team: 5,
            code: id as u64,
            event_points: 0,
        }
    }

    fn entry(name: &str) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            from_gw: 1,
            to_gw: None,
        }
    }

    fn test_snapshot() -> GameweekSnapshot {
        let mut snapshot = GameweekSnapshot::new(22);
        snapshot.fixtures.push(
            serde_json::from_str(r#"{"id": 1, "event": 22, "team_h": 5, "team_a": 12}"#).unwrap(),
        );
        snapshot
            .players
            .push(player(1, "Mitoma", Position::Midfielder));
        snapshot
            .players
            .push(player(2, "João Pedro", Position::Forward));
        snapshot.live.insert(
            1,
            MatchStats {
                minutes: 90,
                goals_scored: 2,
                bps: 50,
                ..Default::default()
            },
        );
        snapshot.live.insert(
            2,
            MatchStats {
                minutes: 70,
                goals_scored: 1,
                bps: 30,
                ..Default::default()
            },
        );
        snapshot
    }

    fn setup(dir: &std::path::Path) -> AppState {
        let mut config = AppConfig::default();
        config.rosters.james.push(entry("Mitoma"));
        config.rosters.laurie.push(entry("Joao Pedro"));
        AppState {
            config: Arc::new(config),
            store: Arc::new(StateStore::new(StorageConfig::new(dir.to_path_buf()))),
            source: Arc::new(FakeSource {
                snapshot: test_snapshot(),
            }),
        }
    }

    async fn request(
        app: axum::Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        request(app, Method::GET, uri, None).await
    }

    // Mitoma: 2 minutes + 10 goals + 3 bonus = 15
    // João Pedro: 2 minutes + 4 goal + 2 bonus = 8

    #[tokio::test]
    async fn test_scores_endpoint() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup(tmp.path()));

        let (status, json) = get_json(app, "/api/gameweek/22/scores").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["gameweek"], 22);
        assert_eq!(json["multiplier"], 2.0);
        assert_eq!(json["james"]["total"], 15);
        assert_eq!(json["james"]["players"][0]["name"], "Mitoma");
        // Roster "Joao Pedro" matches live "João Pedro" despite the accent
        assert_eq!(json["laurie"]["total"], 8);
        assert_eq!(json["outcome"]["result"], "decided");
        assert_eq!(json["outcome"]["winner"], "james");
        assert_eq!(json["outcome"]["amount"], 14.0);
        assert_eq!(json["settlement"], "laurie pays james £14");
    }

    #[tokio::test]
    async fn test_outcome_endpoint_uses_stored_multiplier() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup(tmp.path());
        state.store.set_multiplier(22, 5.0).unwrap();
        let app = build_router(state);

        let (status, json) = get_json(app, "/api/gameweek/22/outcome").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["james_total"], 15);
        assert_eq!(json["laurie_total"], 8);
        assert_eq!(json["multiplier"], 5.0);
        assert_eq!(json["outcome"]["amount"], 35.0);
    }

    #[tokio::test]
    async fn test_settle_persists_result() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup(tmp.path());
        let store = state.store.clone();
        let app = build_router(state);

        let (status, json) =
            request(app, Method::POST, "/api/gameweek/22/settle", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["james_points"], 15);
        assert_eq!(json["laurie_points"], 8);
        assert_eq!(json["difference"], 14.0);
        assert_eq!(json["laurie_paid"], 14.0);
        assert_eq!(json["james_paid"], 0.0);

        let stored = store.result(22).unwrap().unwrap();
        assert_eq!(stored.james_points, 15);
    }

    #[tokio::test]
    async fn test_health() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup(tmp.path()));
        let (status, json) = get_json(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }
}
