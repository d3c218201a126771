//! Strictly In-a-Row - pure game logic for generalized N-in-a-row games.
//!
//! A configurable grid (height, width, win length, free or gravity
//! placement) on which two players, local or computer, alternate placing
//! symbols until one completes a run or the board fills.
//!
//! # Architecture
//!
//! - **Board**: grid state, legal moves, placement and the win/full predicates
//! - **Rules**: the bounded directional win scan, pure over the board
//! - **Selector**: local input or one-ply computer play
//! - **Engine**: the per-round turn state machine and record updates
//! - **Record**: win/loss/game counters and the store trait that persists them
//!
//! # Example
//!
//! ```
//! use strictly_inarow::{Board, Move, PlacementMode, Position, Symbol};
//!
//! let mut board = Board::new(3, 3, 3, PlacementMode::Free)?;
//! let x = Symbol::new('X').unwrap();
//! board.place(Move::Cell(Position::new(0, 0)), x)?;
//! board.place(Move::Cell(Position::new(0, 1)), x)?;
//! assert!(board.has_victory(Position::new(0, 2), x));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod engine;
mod error;
mod placement;
mod player;
mod record;
mod selector;
mod types;

// Public so the pure rule functions can be used without a Board method call.
pub mod rules;

// Crate-level exports - Board and configuration
pub use board::Board;
pub use config::{
    BoardConfig, GameConfig, MAX_DIMENSION, MIN_DIMENSION, MIN_WIN_LENGTH, PlacementMode, Preset,
};

// Crate-level exports - Domain types
pub use types::{LegalMove, Move, Position, Square, Symbol};

// Crate-level exports - Players and move selection
pub use player::{Player, PlayerKind, PlayerSpec, Skill};
pub use selector::{MoveSelector, blocking_move, random_move, strategic_move, winning_move};

// Crate-level exports - Turn engine
pub use engine::{GameConsole, GameEvent, RoundResult, Seat, TurnEngine};

// Crate-level exports - Records
pub use record::{MemoryRecordStore, Outcome, PlayerRecord, RecordStore};

// Crate-level exports - Errors
pub use error::{ConfigError, ConsoleError, EngineError, PlaceError, RecordError};
