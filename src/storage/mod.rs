//! Filesystem state storage.
//!
//! Persists per-gameweek wager state (captain selections, stake-multiplier
//! overrides, qualifying-game flags, settled results) as JSON files under
//! the data directory. The scoring engine never touches this; callers fetch
//! overrides before scoring and save results after.

mod store;

pub use store::{GameweekResult, StateStore};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.data_dir.join("state")
    }

    pub fn captains_path(&self) -> PathBuf {
        self.state_dir().join("captains.json")
    }

    pub fn multipliers_path(&self) -> PathBuf {
        self.state_dir().join("multipliers.json")
    }

    pub fn qualifying_path(&self) -> PathBuf {
        self.state_dir().join("qualifying.json")
    }

    pub fn results_path(&self) -> PathBuf {
        self.state_dir().join("results.json")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
