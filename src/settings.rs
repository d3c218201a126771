//! Game settings loaded from a TOML file.
//!
//! ```toml
//! preset = "connect-four"
//!
//! [[players]]
//! name = "Ada"
//! symbol = "X"
//!
//! [[players]]
//! computer = "strategic"
//! symbol = "O"
//! ```
//!
//! A custom board replaces `preset` with a `[board]` table holding
//! `rows`, `cols`, `win_length` and an optional `mode` (`free` or `gravity`).

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_inarow::{
    BoardConfig, ConfigError, GameConfig, PlacementMode, PlayerSpec, Preset, Skill, Symbol,
};
use tracing::{debug, info, instrument};

/// Custom board table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Board height.
    rows: usize,
    /// Board width.
    cols: usize,
    /// Run length needed to win.
    win_length: usize,
    /// Placement mode, free unless given.
    #[serde(default)]
    mode: PlacementMode,
}

/// One `[[players]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Name of a local player. Computer players are named by skill.
    #[serde(default)]
    name: Option<String>,
    /// Board symbol.
    symbol: char,
    /// Skill of a computer player; absent for local players.
    #[serde(default)]
    computer: Option<Skill>,
}

impl PlayerSettings {
    #[instrument(skip(self))]
    fn to_spec(&self) -> Result<PlayerSpec, ConfigError> {
        let symbol = Symbol::new(self.symbol).ok_or_else(|| {
            ConfigError::new(format!("{:?} cannot be used as a symbol", self.symbol))
        })?;
        match (&self.name, self.computer) {
            (Some(name), None) => Ok(PlayerSpec::local(name, symbol)),
            (None, Some(skill)) => Ok(PlayerSpec::computer(skill, symbol)),
            (Some(name), Some(_)) => Err(ConfigError::new(format!(
                "computer player '{}' cannot be named; computer players are named by skill",
                name
            ))),
            (None, None) => Err(ConfigError::new(
                "each player needs either a name or a computer skill",
            )),
        }
    }
}

/// Contents of a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Named board shape.
    #[serde(default)]
    preset: Option<Preset>,
    /// Custom board shape.
    #[serde(default)]
    board: Option<BoardSettings>,
    /// Exactly two players, in seat order.
    players: Vec<PlayerSettings>,
}

impl GameSettings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(players = settings.players.len(), "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid settings TOML.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Builds the validated game configuration.
    ///
    /// `preset_override` (from the command line) wins over the file's board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the board is missing or ambiguous, there
    /// are not exactly two players, or the players clash.
    #[instrument(skip(self))]
    pub fn into_config(self, preset_override: Option<Preset>) -> Result<GameConfig, ConfigError> {
        let board = match (preset_override, self.preset, &self.board) {
            (Some(preset), _, _) => preset.board_config(),
            (None, Some(_), Some(_)) => {
                return Err(ConfigError::new(
                    "settings give both a preset and a board; choose one",
                ));
            }
            (None, Some(preset), None) => preset.board_config(),
            (None, None, Some(b)) => BoardConfig::new(b.rows, b.cols, b.win_length, b.mode)?,
            (None, None, None) => {
                return Err(ConfigError::new("settings need a preset or a [board] table"));
            }
        };

        let [first, second] = self.players.as_slice() else {
            return Err(ConfigError::new(format!(
                "exactly two players are required, found {}",
                self.players.len()
            )));
        };
        GameConfig::new(board, [first.to_spec()?, second.to_spec()?])
    }
}
