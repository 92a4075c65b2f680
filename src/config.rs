use std::path::Path;

use crate::error::ConfigError;
use crate::game::{BoardConfig, Player, CLASSIC_COLS, CLASSIC_ROWS};

/// Smallest board dimension the front-ends accept.
pub const MIN_DIMENSION: usize = 3;
/// Largest board dimension the front-ends accept.
pub const MAX_DIMENSION: usize = 12;

/// Board size settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: CLASSIC_ROWS,
            cols: CLASSIC_COLS,
        }
    }
}

impl GameConfig {
    pub fn board(&self) -> BoardConfig {
        BoardConfig::new(self.rows, self.cols)
    }
}

/// Automated opponent settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub enabled: bool,
    pub plays: Player,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig {
            enabled: true,
            plays: Player::O,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub opponent: OpponentConfig,
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
        for (name, value) in [("game.rows", self.game.rows), ("game.cols", self.game.cols)] {
            if value < MIN_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} must be >= {MIN_DIMENSION}"
                )));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_DIMENSION}"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
