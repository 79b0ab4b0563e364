//! Game configuration.
//!
//! The rules are fixed; the only tunable is how many red marbles a player
//! must capture to win. Starting boards and player seating are supplied
//! through `KubaGameBuilder`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Red marbles in the standard layout.
pub const NEUTRAL_MARBLES: u8 = 13;

/// Red captures needed to win a standard game.
pub const DEFAULT_CAPTURES_TO_WIN: u8 = 7;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Red marbles a player must push off the board to win.
    pub captures_to_win: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            captures_to_win: DEFAULT_CAPTURES_TO_WIN,
        }
    }
}

impl GameConfig {
    /// Set the capture target.
    #[must_use]
    pub fn with_captures_to_win(mut self, captures: u8) -> Self {
        self.captures_to_win = captures;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.captures_to_win == 0 {
            return Err(ConfigError::Validation(
                "captures_to_win must be > 0".into(),
            ));
        }
        if self.captures_to_win > NEUTRAL_MARBLES {
            return Err(ConfigError::Validation(format!(
                "captures_to_win must be <= {}",
                NEUTRAL_MARBLES
            )));
        }
        Ok(())
    }
}
