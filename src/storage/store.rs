//! Typed per-gameweek key/value store.
//!
//! Each state kind lives in its own JSON file holding a map keyed by
//! gameweek (or participant + gameweek for captains). Upsert reads the map,
//! replaces the key, and rewrites the file through a temp-file rename so a
//! crash never leaves a half-written store behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::models::{Gameweek, Participant, PlayerId};

use super::{StorageConfig, StorageError};

/// A settled gameweek, as written after an evaluation is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameweekResult {
    pub gameweek: Gameweek,
    pub james_points: i32,
    pub laurie_points: i32,
    pub multiplier: f64,
    /// Money difference: |james - laurie| scaled by the multiplier.
    pub difference: f64,
    pub james_paid: f64,
    pub laurie_paid: f64,
    pub updated_at: DateTime<Utc>,
}

impl GameweekResult {
    /// Derive a result from two totals and the effective multiplier.
    pub fn settle(
        gameweek: Gameweek,
        james_points: i32,
        laurie_points: i32,
        multiplier: f64,
    ) -> Self {
        let difference = f64::from((james_points - laurie_points).abs()) * multiplier;
        Self {
            gameweek,
            james_points,
            laurie_points,
            multiplier,
            difference,
            james_paid: if james_points < laurie_points {
                difference
            } else {
                0.0
            },
            laurie_paid: if laurie_points < james_points {
                difference
            } else {
                0.0
            },
            updated_at: Utc::now(),
        }
    }
}

/// Filesystem-backed wager state.
#[derive(Debug, Clone)]
pub struct StateStore {
    config: StorageConfig,
}

impl StateStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    fn read_map<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<String, T>, StorageError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_map<T: Serialize>(
        path: &Path,
        map: &BTreeMap<String, T>,
    ) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(map)?)?;
        fs::rename(&tmp, path)?;
        debug!("Wrote state file {:?}", path);
        Ok(())
    }

    fn upsert<T: Serialize + DeserializeOwned>(
        path: &Path,
        key: String,
        value: T,
    ) -> Result<(), StorageError> {
        let mut map = Self::read_map::<T>(path)?;
        map.insert(key, value);
        Self::write_map(path, &map)
    }

    fn remove<T: Serialize + DeserializeOwned>(
        path: &Path,
        key: &str,
    ) -> Result<(), StorageError> {
        let mut map = Self::read_map::<T>(path)?;
        if map.remove(key).is_some() {
            Self::write_map(path, &map)?;
        }
        Ok(())
    }

    fn gw_key(gameweek: Gameweek) -> String {
        format!("gw{}", gameweek)
    }

    fn captain_key(participant: Participant, gameweek: Gameweek) -> String {
        format!("{}:gw{}", participant, gameweek)
    }

    // ── Captain selections ───────────────────────────────────────

    pub fn set_captain(
        &self,
        participant: Participant,
        gameweek: Gameweek,
        player_id: PlayerId,
    ) -> Result<(), StorageError> {
        Self::upsert(
            &self.config.captains_path(),
            Self::captain_key(participant, gameweek),
            player_id,
        )
    }

    pub fn captain(
        &self,
        participant: Participant,
        gameweek: Gameweek,
    ) -> Result<Option<PlayerId>, StorageError> {
        let map = Self::read_map::<PlayerId>(&self.config.captains_path())?;
        Ok(map.get(&Self::captain_key(participant, gameweek)).copied())
    }

    pub fn all_captains(&self) -> Result<BTreeMap<String, PlayerId>, StorageError> {
        Self::read_map(&self.config.captains_path())
    }

    // ── Stake-multiplier overrides ───────────────────────────────

    pub fn set_multiplier(&self, gameweek: Gameweek, multiplier: f64) -> Result<(), StorageError> {
        Self::upsert(
            &self.config.multipliers_path(),
            Self::gw_key(gameweek),
            multiplier,
        )
    }

    pub fn multiplier(&self, gameweek: Gameweek) -> Result<Option<f64>, StorageError> {
        let map = Self::read_map::<f64>(&self.config.multipliers_path())?;
        Ok(map.get(&Self::gw_key(gameweek)).copied())
    }

    pub fn clear_multiplier(&self, gameweek: Gameweek) -> Result<(), StorageError> {
        Self::remove::<f64>(&self.config.multipliers_path(), &Self::gw_key(gameweek))
    }

    pub fn all_multipliers(&self) -> Result<BTreeMap<String, f64>, StorageError> {
        Self::read_map(&self.config.multipliers_path())
    }

    // ── Qualifying games ─────────────────────────────────────────

    pub fn set_qualifying(&self, gameweek: Gameweek, qualifying: bool) -> Result<(), StorageError> {
        Self::upsert(
            &self.config.qualifying_path(),
            Self::gw_key(gameweek),
            qualifying,
        )
    }

    pub fn is_qualifying(&self, gameweek: Gameweek) -> Result<bool, StorageError> {
        let map = Self::read_map::<bool>(&self.config.qualifying_path())?;
        Ok(map.get(&Self::gw_key(gameweek)).copied().unwrap_or(false))
    }

    pub fn all_qualifying(&self) -> Result<BTreeMap<String, bool>, StorageError> {
        Self::read_map(&self.config.qualifying_path())
    }

    // ── Gameweek results ─────────────────────────────────────────

    pub fn save_result(&self, result: &GameweekResult) -> Result<(), StorageError> {
        Self::upsert(
            &self.config.results_path(),
            Self::gw_key(result.gameweek),
            result.clone(),
        )
    }

    pub fn result(&self, gameweek: Gameweek) -> Result<Option<GameweekResult>, StorageError> {
        let map = Self::read_map::<GameweekResult>(&self.config.results_path())?;
        Ok(map.get(&Self::gw_key(gameweek)).cloned())
    }

    pub fn all_results(&self) -> Result<BTreeMap<String, GameweekResult>, StorageError> {
        Self::read_map(&self.config.results_path())
    }
}
