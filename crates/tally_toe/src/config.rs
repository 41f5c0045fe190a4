//! Game configuration.

use super::Player;
use super::turn::StarterPolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// File holding the persisted scores.
    #[serde(default = "default_store_path")]
    store_path: PathBuf,

    /// Pause before announcing a win or draw, in milliseconds.
    #[serde(default = "default_announce_delay_ms")]
    announce_delay_ms: u64,

    /// Player who starts the first game.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Who starts each following game.
    #[serde(default)]
    starter_policy: StarterPolicy,
}

#[instrument]
fn default_store_path() -> PathBuf {
    PathBuf::from("tally_toe_scores.json")
}

#[instrument]
fn default_announce_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_first_player() -> Player {
    Player::X
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(store = %config.store_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Pause before an announcement.
    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
    }

    /// Returns the config with a different store path.
    #[must_use]
    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }

    /// Returns the config with a different announcement pause.
    #[must_use]
    pub fn with_announce_delay_ms(mut self, announce_delay_ms: u64) -> Self {
        self.announce_delay_ms = announce_delay_ms;
        self
    }

    /// Returns the config with a different starter policy.
    #[must_use]
    pub fn with_starter_policy(mut self, starter_policy: StarterPolicy) -> Self {
        self.starter_policy = starter_policy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            announce_delay_ms: default_announce_delay_ms(),
            first_player: default_first_player(),
            starter_policy: StarterPolicy::default(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
