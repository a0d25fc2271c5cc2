//! REST API endpoints.
//!
//! Axum-based HTTP API for gameweek scores, the wager outcome, and the
//! per-gameweek stored state (captains, multiplier overrides, results).

pub mod routes;
pub mod state;

use axum::routing::{get, post, put};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::fetch::FetchError;
use crate::storage::StorageError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/gameweek/:gw/scores", get(routes::scores::gameweek_scores))
        .route("/api/gameweek/:gw/outcome", get(routes::scores::gameweek_outcome))
        .route("/api/gameweek/:gw/settle", post(routes::scores::settle_gameweek))
        .route(
            "/api/gameweek/:gw/multiplier",
            put(routes::overrides::set_multiplier).delete(routes::overrides::clear_multiplier),
        )
        .route(
            "/api/gameweek/:gw/captain/:participant",
            put(routes::overrides::set_captain),
        )
        .route(
            "/api/gameweek/:gw/qualifying",
            put(routes::overrides::set_qualifying),
        )
        .route("/api/results", get(routes::overrides::all_results))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
