//! Strictly Rows - terminal N-in-a-row games
//!
//! Sets the game up from a settings file or interactive prompts, then plays
//! rounds until the players stop.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use strictly_inarow::TurnEngine;
use strictly_rows::{FileRecordStore, GameSettings, Prompter, TerminalConsole, configure};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

#[instrument(skip(cli), fields(records_dir = %cli.records_dir.display(), seed = ?cli.seed))]
fn run(cli: Cli) -> Result<()> {
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());

    let config = match &cli.config {
        Some(path) => GameSettings::from_file(path)
            .and_then(|settings| settings.into_config(cli.preset))
            .with_context(|| format!("Invalid settings file {}", path.display()))?,
        None => configure(&mut prompter, cli.preset).context("Game setup failed")?,
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let store = FileRecordStore::new(&cli.records_dir);
    let mut engine = TurnEngine::new(config, store, rng);
    let mut console = TerminalConsole::new(prompter);

    info!("Starting session");
    engine.run(&mut console).context("Game session failed")?;
    info!(rounds = engine.rounds_played(), "Session finished");
    Ok(())
}
