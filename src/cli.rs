//! Command-line interface for strictly_rows.

use clap::Parser;
use std::path::PathBuf;
use strictly_inarow::Preset;

/// Strictly Rows - N-in-a-row games at the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_rows")]
#[command(about = "Tic-tac-toe, connect four, gomoku and custom N-in-a-row games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file describing the board and players; skips interactive setup
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board preset (tic-tac-toe, connect-four, gomoku); overrides the settings file board
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Directory holding one record file per player
    #[arg(long, default_value = ".")]
    pub records_dir: PathBuf,

    /// Seed for first-player choice and computer moves
    #[arg(long)]
    pub seed: Option<u64>,
}
