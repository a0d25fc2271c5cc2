//! Per-gameweek stored state: captains, multiplier overrides, qualifying
//! flags and settled results.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Gameweek, Participant, PlayerId};
use crate::storage::GameweekResult;

#[derive(Debug, Deserialize)]
pub struct SetMultiplierBody {
    pub multiplier: f64,
}

#[derive(Debug, Deserialize)]
pub struct SetCaptainBody {
    pub player_id: PlayerId,
}

#[derive(Debug, Deserialize)]
pub struct SetQualifyingBody {
    pub qualifying: bool,
}

#[derive(Debug, Serialize)]
pub struct StoredValue<T> {
    pub gameweek: Gameweek,
    pub value: T,
}

pub async fn set_multiplier(
    State(state): State<AppState>,
    Path(gameweek): Path<Gameweek>,
    Json(body): Json<SetMultiplierBody>,
) -> Result<Json<StoredValue<f64>>, ApiError> {
    if body.multiplier < 0.0 {
        return Err(ApiError::BadRequest(
            "multiplier must be non-negative".to_string(),
        ));
    }
    state.store.set_multiplier(gameweek, body.multiplier)?;
    Ok(Json(StoredValue {
        gameweek,
        value: body.multiplier,
    }))
}

pub async fn clear_multiplier(
    State(state): State<AppState>,
    Path(gameweek): Path<Gameweek>,
) -> Result<Json<StoredValue<f64>>, ApiError> {
    state.store.clear_multiplier(gameweek)?;
    Ok(Json(StoredValue {
        gameweek,
        value: state.config.wager.default_multiplier,
    }))
}

pub async fn set_captain(
    State(state): State<AppState>,
    Path((gameweek, participant)): Path<(Gameweek, String)>,
    Json(body): Json<SetCaptainBody>,
) -> Result<Json<StoredValue<PlayerId>>, ApiError> {
    let participant: Participant = participant.parse().map_err(ApiError::BadRequest)?;
    state
        .store
        .set_captain(participant, gameweek, body.player_id)?;
    Ok(Json(StoredValue {
        gameweek,
        value: body.player_id,
    }))
}

pub async fn set_qualifying(
    State(state): State<AppState>,
    Path(gameweek): Path<Gameweek>,
    Json(body): Json<SetQualifyingBody>,
) -> Result<Json<StoredValue<bool>>, ApiError> {
    state.store.set_qualifying(gameweek, body.qualifying)?;
    Ok(Json(StoredValue {
        gameweek,
        value: body.qualifying,
    }))
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: BTreeMap<String, GameweekResult>,
    pub multipliers: BTreeMap<String, f64>,
    pub qualifying: BTreeMap<String, bool>,
    pub captains: BTreeMap<String, PlayerId>,
}

pub async fn all_results(
    State(state): State<AppState>,
) -> Result<Json<ResultsResponse>, ApiError> {
    Ok(Json(ResultsResponse {
        results: state.store.all_results()?,
        multipliers: state.store.all_multipliers()?,
        qualifying: state.store.all_qualifying()?,
        captains: state.store.all_captains()?,
    }))
}
