//! Error types for board construction, placement, persistence and console I/O.

use crate::types::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Invalid board or player configuration.
///
/// Raised when a board or session is built with values outside the
/// supported range. These indicate a setup defect, never a user mistake
/// that can be re-prompted.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A placement that did not come from the board's legal moves.
///
/// Selectors only ever hand out legal moves, so seeing one of these means
/// a caller broke the placement precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The position lies outside the grid.
    #[display("Position {} is outside the board", _0)]
    OutOfBounds(Position),

    /// The cell already holds a symbol.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// Every row of the column is taken.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// A cell move was given to a gravity board or a drop to a free board.
    #[display("Move kind does not match the board's placement mode")]
    WrongMoveKind,
}

impl std::error::Error for PlaceError {}

/// Failure to persist a player record.
#[derive(Debug, Clone, Display, Error)]
#[display("Record error: {} at {}:{}", message, file, line)]
pub struct RecordError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RecordError {
    /// Creates a new record error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Failure talking to the console collaborator (prompting, display).
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Errors that stop a [`crate::TurnEngine`] session.
#[derive(Debug, Clone, Display)]
pub enum EngineError {
    /// A selector produced an illegal move.
    #[display("Illegal placement: {}", _0)]
    Place(PlaceError),

    /// A move was requested on a full board.
    #[display("No legal moves left on the board")]
    NoLegalMoves,

    /// The console could not deliver input or output.
    #[display("{}", _0)]
    Console(ConsoleError),
}

impl std::error::Error for EngineError {}

impl From<PlaceError> for EngineError {
    fn from(err: PlaceError) -> Self {
        EngineError::Place(err)
    }
}

impl From<ConsoleError> for EngineError {
    fn from(err: ConsoleError) -> Self {
        EngineError::Console(err)
    }
}
