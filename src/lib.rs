//! Strictly Rows - terminal front end for N-in-a-row games
//!
//! Wires the [`strictly_inarow`] engine to a console: validated prompts,
//! interactive or file-based setup, board rendering and per-player record
//! files.
//!
//! # Architecture
//!
//! - **Prompt**: re-asking input validation with specific diagnostics
//! - **Setup**: interactive board and player selection
//! - **Settings**: the same choices read from a TOML file
//! - **Console**: the engine's console seam over any reader and writer
//! - **File store**: one plain-text record file per player name
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use rand::{SeedableRng, rngs::StdRng};
//! use strictly_inarow::{MemoryRecordStore, Preset, TurnEngine};
//! use strictly_rows::{Prompter, configure};
//!
//! let answers = "1\nAda\nX\n1\nO\n";
//! let mut prompter = Prompter::new(Cursor::new(answers), Vec::new());
//! let config = configure(&mut prompter, Some(Preset::TicTacToe))?;
//!
//! let engine = TurnEngine::new(config, MemoryRecordStore::new(), StdRng::seed_from_u64(1));
//! assert_eq!(engine.players()[1].name(), "EasyBot");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod file_store;
mod prompt;
mod render;
mod settings;
mod setup;

// Crate-level exports - Input validation
pub use prompt::{Constraint, PromptError, Prompter};

// Crate-level exports - Session setup
pub use settings::{BoardSettings, GameSettings, PlayerSettings};
pub use setup::configure;

// Crate-level exports - Terminal console
pub use console::TerminalConsole;
pub use render::{SEPARATOR_WIDTH, render, separator};

// Crate-level exports - Record persistence
pub use file_store::FileRecordStore;
