//! Per-player win/loss/game counters and the store that persists them.

use crate::error::RecordError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Round result from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// The player completed a run.
    Win,
    /// The opponent completed a run.
    Loss,
    /// The board filled with no run.
    Tie,
}

/// Lifetime counters for one player name.
///
/// Ties only bump `total_games`; there is no tie counter, so
/// `wins + losses` may be less than `total_games`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Getters, Serialize, Deserialize,
)]
pub struct PlayerRecord {
    /// Rounds won.
    wins: u32,
    /// Rounds lost.
    losses: u32,
    /// Rounds played, ties included.
    total_games: u32,
}

impl PlayerRecord {
    /// Creates a record with the given counters.
    pub fn new(wins: u32, losses: u32, total_games: u32) -> Self {
        Self {
            wins,
            losses,
            total_games,
        }
    }

    /// Counts one finished round.
    #[instrument(skip(self))]
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins = self.wins.saturating_add(1),
            Outcome::Loss => self.losses = self.losses.saturating_add(1),
            Outcome::Tie => {}
        }
        // Loaded counters may already sit at u32::MAX.
        self.total_games = self.total_games.saturating_add(1);
        debug!(
            wins = self.wins,
            losses = self.losses,
            total_games = self.total_games,
            "Record updated"
        );
    }
}

/// Persistence for player records, keyed by player name.
pub trait RecordStore {
    /// Loads the record for `name`.
    ///
    /// A missing or unreadable record is "no history" and yields a zeroed
    /// record rather than an error.
    fn load(&self, name: &str) -> PlayerRecord;

    /// Overwrites the stored record for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the record could not be written.
    fn save(&mut self, name: &str, record: &PlayerRecord) -> Result<(), RecordError>;
}

/// Record store held in memory, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: HashMap<String, PlayerRecord>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    #[instrument(skip(self))]
    fn load(&self, name: &str) -> PlayerRecord {
        self.records.get(name).copied().unwrap_or_default()
    }

    #[instrument(skip(self))]
    fn save(&mut self, name: &str, record: &PlayerRecord) -> Result<(), RecordError> {
        self.records.insert(name.to_string(), *record);
        Ok(())
    }
}
