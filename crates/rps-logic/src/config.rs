//! Game configuration

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;

/// Configuration for a game session
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Round counter shown before setup is submitted
    pub default_rounds: u32,
    /// Largest round count accepted at setup
    pub max_rounds: u32,
    /// How many recent moves per side the presenter shows
    pub history_window: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_rounds: 5,
            max_rounds: 100,
            history_window: 3,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_rounds == 0 {
            return Err(ConfigError::Invalid("default_rounds must be at least 1".to_string()));
        }
        if self.max_rounds < self.default_rounds {
            return Err(ConfigError::Invalid(format!(
                "max_rounds ({}) is below default_rounds ({})",
                self.max_rounds, self.default_rounds
            )));
        }
        if self.history_window == 0 {
            return Err(ConfigError::Invalid("history_window must be at least 1".to_string()));
        }
        Ok(())
    }
}
