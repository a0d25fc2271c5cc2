//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Participant, RosterEntry};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// FPL data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FplConfig {
    /// Base URL for the FPL API
    #[serde(default = "default_fpl_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_fpl_base_url() -> String {
    "https://fantasy.premierleague.com/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for FplConfig {
    fn default() -> Self {
        Self {
            base_url: default_fpl_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Wager configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WagerConfig {
    /// Pounds per point of difference, unless a gameweek override is stored
    #[serde(default = "default_multiplier")]
    pub default_multiplier: f64,
}

fn default_multiplier() -> f64 {
    crate::scoring::DEFAULT_STAKE_MULTIPLIER
}

impl Default for WagerConfig {
    fn default() -> Self {
        Self {
            default_multiplier: default_multiplier(),
        }
    }
}

/// The two rosters, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub james: Vec<RosterEntry>,

    #[serde(default)]
    pub laurie: Vec<RosterEntry>,
}

impl RosterConfig {
    pub fn for_participant(&self, participant: Participant) -> &[RosterEntry] {
        match participant {
            Participant::James => &self.james,
            Participant::Laurie => &self.laurie,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub fpl: FplConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub wager: WagerConfig,

    #[serde(default)]
    pub rosters: RosterConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            fpl: FplConfig::default(),
            server: ServerConfig::default(),
            wager: WagerConfig::default(),
            rosters: RosterConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &PathBuf) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration. A bad roster window or negative
    /// multiplier is corrupt input and fails loudly at load time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fpl.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "FPL timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.wager.default_multiplier < 0.0 {
            return Err(ConfigError::ValidationError(
                "Stake multiplier must be non-negative".to_string(),
            ));
        }

        for participant in [Participant::James, Participant::Laurie] {
            for entry in self.rosters.for_participant(participant) {
                if entry.name.trim().is_empty() {
                    return Err(ConfigError::ValidationError(format!(
                        "Empty player name in {}'s roster",
                        participant
                    )));
                }
                if let Some(to_gw) = entry.to_gw {
                    if entry.from_gw > to_gw {
                        return Err(ConfigError::ValidationError(format!(
                            "Roster entry '{}' has from_gw {} after to_gw {}",
                            entry.name, entry.from_gw, to_gw
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
