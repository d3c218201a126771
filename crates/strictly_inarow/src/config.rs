//! Immutable game configuration: board shape, placement mode, presets and seats.

use crate::error::ConfigError;
use crate::player::{PlayerKind, PlayerSpec, Skill};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest allowed board height or width.
pub const MIN_DIMENSION: usize = 2;

/// Largest allowed board height or width.
pub const MAX_DIMENSION: usize = 10;

/// Shortest allowed winning run.
pub const MIN_WIN_LENGTH: usize = 3;

/// How a move is addressed and where the symbol lands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlacementMode {
    /// A move names an exact cell.
    #[default]
    Free,
    /// A move names a column; the symbol falls to the lowest empty row.
    Gravity,
}

/// Validated board dimensions, win length and placement mode.
///
/// Deserialization runs the same checks as [`BoardConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfigFields")]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
    mode: PlacementMode,
}

impl BoardConfig {
    /// Validates a board configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `rows` or `cols` lies outside
    /// `[MIN_DIMENSION, MAX_DIMENSION]`, or `win_length` lies outside
    /// `[MIN_WIN_LENGTH, max(rows, cols)]`.
    #[instrument]
    pub fn new(
        rows: usize,
        cols: usize,
        win_length: usize,
        mode: PlacementMode,
    ) -> Result<Self, ConfigError> {
        for (label, value) in [("rows", rows), ("cols", cols)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(ConfigError::new(format!(
                    "{} must be between {} and {}, got {}",
                    label, MIN_DIMENSION, MAX_DIMENSION, value
                )));
            }
        }
        let longest = rows.max(cols);
        if !(MIN_WIN_LENGTH..=longest).contains(&win_length) {
            return Err(ConfigError::new(format!(
                "win length must be between {} and {}, got {}",
                MIN_WIN_LENGTH, longest, win_length
            )));
        }
        debug!(rows, cols, win_length, %mode, "Board config validated");
        Ok(Self {
            rows,
            cols,
            win_length,
            mode,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the run needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Placement mode.
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }
}

/// Unchecked wire form of [`BoardConfig`].
#[derive(Deserialize)]
struct BoardConfigFields {
    rows: usize,
    cols: usize,
    win_length: usize,
    #[serde(default)]
    mode: PlacementMode,
}

impl TryFrom<BoardConfigFields> for BoardConfig {
    type Error = ConfigError;

    fn try_from(fields: BoardConfigFields) -> Result<Self, Self::Error> {
        BoardConfig::new(fields.rows, fields.cols, fields.win_length, fields.mode)
    }
}

/// Named board shapes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    /// 3×3, three in a row.
    TicTacToe,
    /// 6×7 with gravity, four in a row.
    ConnectFour,
    /// 10×10, five in a row.
    Gomoku,
}

impl Preset {
    /// Board configuration for this preset.
    #[instrument]
    pub fn board_config(self) -> BoardConfig {
        let (rows, cols, win_length, mode) = match self {
            Preset::TicTacToe => (3, 3, 3, PlacementMode::Free),
            Preset::ConnectFour => (6, 7, 4, PlacementMode::Gravity),
            Preset::Gomoku => (10, 10, 5, PlacementMode::Free),
        };
        BoardConfig {
            rows,
            cols,
            win_length,
            mode,
        }
    }
}

/// Everything a session needs, fixed before the first round.
///
/// Deserialization runs the same checks as [`GameConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameConfigFields")]
pub struct GameConfig {
    board: BoardConfig,
    players: [PlayerSpec; 2],
}

impl GameConfig {
    /// Validates a session configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a name is empty, both players share a
    /// name (ignoring ASCII case) or symbol, or a local player uses a
    /// computer player's name in any case.
    #[instrument(skip(players))]
    pub fn new(board: BoardConfig, players: [PlayerSpec; 2]) -> Result<Self, ConfigError> {
        for spec in &players {
            if spec.name().is_empty() {
                return Err(ConfigError::new("player name must not be empty"));
            }
            if *spec.kind() == PlayerKind::Local && Skill::is_reserved(spec.name()) {
                return Err(ConfigError::new(format!(
                    "'{}' is reserved for computer players",
                    spec.name()
                )));
            }
        }
        let [first, second] = &players;
        // Record keys must stay distinct on case-insensitive filesystems.
        if first.name().eq_ignore_ascii_case(second.name()) {
            return Err(ConfigError::new(format!(
                "players must have different names, both are '{}'",
                first.name()
            )));
        }
        if first.symbol() == second.symbol() {
            return Err(ConfigError::new(format!(
                "players must have different symbols, both are '{}'",
                first.symbol()
            )));
        }
        Ok(Self { board, players })
    }

    /// Board configuration.
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Both seats, in seat order.
    pub fn players(&self) -> &[PlayerSpec; 2] {
        &self.players
    }
}

/// Unchecked wire form of [`GameConfig`].
#[derive(Deserialize)]
struct GameConfigFields {
    board: BoardConfig,
    players: [PlayerSpec; 2],
}

impl TryFrom<GameConfigFields> for GameConfig {
    type Error = ConfigError;

    fn try_from(fields: GameConfigFields) -> Result<Self, Self::Error> {
        GameConfig::new(fields.board, fields.players)
    }
}
