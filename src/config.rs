use std::path::Path;

use crate::ai::{Difficulty, MoveSelector};
use crate::error::ConfigError;
use crate::game::Player;
use crate::session::GameMode;

/// Deepest hard-mode search accepted from configuration.
pub const MAX_HARD_DEPTH: usize = 10;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub game: GameConfig,
}

/// Computer player settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Plies searched by the hard difficulty, the candidate move included
    pub hard_depth: usize,
    /// Search center columns first
    pub move_ordering: bool,
    /// Seed for easy-mode randomness; random when absent
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            hard_depth: MoveSelector::DEFAULT_HARD_DEPTH,
            move_ordering: true,
            seed: None,
        }
    }
}

/// Match settings used by the front end.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub ai_player: Player,
    /// Pause before the computer answers, in milliseconds
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::Pve,
            difficulty: Difficulty::Hard,
            ai_player: Player::Yellow,
            ai_delay_ms: 0,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.hard_depth == 0 || self.ai.hard_depth > MAX_HARD_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.hard_depth must be in 1..={MAX_HARD_DEPTH}"
            )));
        }
        if self.game.ai_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "game.ai_delay_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
