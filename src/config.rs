use crate::battle::stats::{MAX_LEVEL, MIN_LEVEL};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LEVEL: u8 = 50;
pub const DEFAULT_TURN_CAP: u32 = 20;
pub const MAX_TURN_CAP: u32 = 10_000;

/// How status effects behave once applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusMode {
    /// Applied and logged only.
    #[default]
    Cosmetic,
    /// Also slows turn order and deals end-of-turn damage.
    Persistent,
}

/// Tunables for a battle run. Every field has a default, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub default_level: u8,
    pub turn_cap: u32,
    pub status_mode: StatusMode,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL,
            turn_cap: DEFAULT_TURN_CAP,
            status_mode: StatusMode::Cosmetic,
        }
    }
}

impl BattleConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: BattleConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded battle config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.default_level) {
            return Err(ConfigError::DefaultLevel(self.default_level));
        }
        if self.turn_cap == 0 {
            return Err(ConfigError::ZeroTurnCap);
        }
        if self.turn_cap > MAX_TURN_CAP {
            return Err(ConfigError::TurnCapTooLarge {
                got: self.turn_cap,
                max: MAX_TURN_CAP,
            });
        }
        Ok(())
    }

    pub fn with_turn_cap(mut self, turn_cap: u32) -> Self {
        self.turn_cap = turn_cap;
        self
    }

    pub fn with_status_mode(mut self, status_mode: StatusMode) -> Self {
        self.status_mode = status_mode;
        self
    }
}
