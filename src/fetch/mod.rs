//! FPL API client.
//!
//! Fetches the three per-gameweek collections the engine consumes: the
//! bootstrap (players and gameweek calendar), the fixtures list, and the
//! live per-player stats, and composes them into a [`GameweekSnapshot`].
//! All failure here is recoverable; the engine happily scores whatever
//! snapshot it is handed, including an empty one.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::FplConfig;
use crate::models::{Fixture, Gameweek, GameweekSnapshot, MatchStats, Player, PlayerId};

/// Errors that can occur while talking to the FPL API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stats unavailable for gameweek {gameweek}")]
    StatsUnavailable { gameweek: Gameweek },

    #[error("No active gameweek in the bootstrap calendar")]
    NoActiveGameweek,
}

/// One entry of the bootstrap `events` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GameweekEvent {
    pub id: Gameweek,
    pub name: String,
    pub finished: bool,
}

/// The subset of bootstrap-static the tracker needs.
#[derive(Debug, Clone, Deserialize)]
pub struct Bootstrap {
    pub events: Vec<GameweekEvent>,
    pub elements: Vec<Player>,
}

impl Bootstrap {
    /// The active gameweek: the first one not yet finished, as the original
    /// tracker picked it.
    pub fn active_gameweek(&self) -> Option<Gameweek> {
        self.events.iter().find(|e| !e.finished).map(|e| e.id)
    }
}

#[derive(Debug, Deserialize)]
struct LiveElement {
    id: PlayerId,
    stats: MatchStats,
}

#[derive(Debug, Deserialize)]
struct LiveResponse {
    elements: Vec<LiveElement>,
}

/// A source of gameweek snapshots. The HTTP client implements this; tests
/// substitute a canned source.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn active_gameweek(&self) -> Result<Gameweek, FetchError>;

    async fn snapshot(&self, gameweek: Gameweek) -> Result<GameweekSnapshot, FetchError>;
}

/// HTTP client for the FPL API.
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &FplConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("fpl-wager/0.1.0"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with default configuration.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(&FplConfig::default())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch bootstrap-static: players plus the gameweek calendar.
    pub async fn bootstrap(&self) -> Result<Bootstrap, FetchError> {
        self.get_json("bootstrap-static/").await
    }

    /// Fetch the fixtures of one gameweek.
    pub async fn fixtures(&self, gameweek: Gameweek) -> Result<Vec<Fixture>, FetchError> {
        self.get_json(&format!("fixtures/?event={}", gameweek)).await
    }

    /// Fetch live per-player stats for one gameweek.
    pub async fn live(&self, gameweek: Gameweek) -> Result<Vec<(PlayerId, MatchStats)>, FetchError> {
        let response: LiveResponse = self
            .get_json(&format!("event/{}/live/", gameweek))
            .await
            .map_err(|e| match e {
                // The live endpoint 404s before a gameweek starts
                FetchError::HttpStatus { status: 404, .. } => {
                    FetchError::StatsUnavailable { gameweek }
                }
                other => other,
            })?;
        Ok(response
            .elements
            .into_iter()
            .map(|e| (e.id, e.stats))
            .collect())
    }
}

#[async_trait]
impl SnapshotSource for FplClient {
    async fn active_gameweek(&self) -> Result<Gameweek, FetchError> {
        self.bootstrap()
            .await?
            .active_gameweek()
            .ok_or(FetchError::NoActiveGameweek)
    }

    /// Compose bootstrap, fixtures and live stats into one snapshot.
    /// Missing live stats are not fatal; the snapshot just has no stats and
    /// every player scores zero.
    async fn snapshot(&self, gameweek: Gameweek) -> Result<GameweekSnapshot, FetchError> {
        let bootstrap = self.bootstrap().await?;
        let fixtures = self.fixtures(gameweek).await?;

        let mut snapshot = GameweekSnapshot::new(gameweek);
        snapshot.players = bootstrap.elements;
        snapshot.fixtures = fixtures;

        match self.live(gameweek).await {
            Ok(live) => {
                snapshot.live = live.into_iter().collect();
            }
            Err(FetchError::StatsUnavailable { .. }) => {
                info!("No live stats yet for gameweek {}", gameweek);
            }
            Err(e) => return Err(e),
        }

        info!(
            "Snapshot for gameweek {}: {} players, {} fixtures, {} live records",
            gameweek,
            snapshot.players.len(),
            snapshot.fixtures.len(),
            snapshot.live.len()
        );
        Ok(snapshot)
    }
}
