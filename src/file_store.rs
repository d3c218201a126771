//! File-backed player records: one text file per player name.
//!
//! Each file holds three decimal integers, one per line: wins, losses and
//! total games.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use strictly_inarow::{PlayerRecord, RecordError, RecordStore};
use tracing::{debug, info, instrument, warn};

/// Stores each player's record in `<dir>/<name>.txt`.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        info!("Creating FileRecordStore");
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the record files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record file for `name`.
    ///
    /// ASCII letters, digits, space and `-` are kept. Every other byte of
    /// the name, `_` included, becomes `_` followed by two uppercase hex
    /// digits, so distinct names never share a file and a name can never
    /// escape the store directory.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", record_key(name)))
    }
}

/// Reversible file stem for a player name.
fn record_key(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }
    let mut key = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b' ' | b'-') {
            key.push(char::from(byte));
        } else {
            key.push_str(&format!("_{:02X}", byte));
        }
    }
    key
}

/// Parses exactly three counters, one per line.
fn parse_record(text: &str) -> Option<PlayerRecord> {
    let mut counters = text.lines().map(|line| line.trim().parse::<u32>());
    let wins = counters.next()?.ok()?;
    let losses = counters.next()?.ok()?;
    let total_games = counters.next()?.ok()?;
    if counters.next().is_some() {
        return None;
    }
    Some(PlayerRecord::new(wins, losses, total_games))
}

impl RecordStore for FileRecordStore {
    #[instrument(skip(self))]
    fn load(&self, name: &str) -> PlayerRecord {
        let path = self.path_for(name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No record yet");
                return PlayerRecord::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable record, starting fresh");
                return PlayerRecord::default();
            }
        };
        match parse_record(&text) {
            Some(record) => {
                debug!(path = %path.display(), ?record, "Record loaded");
                record
            }
            None => {
                warn!(path = %path.display(), "Malformed record, starting fresh");
                PlayerRecord::default()
            }
        }
    }

    #[instrument(skip(self, record))]
    fn save(&mut self, name: &str, record: &PlayerRecord) -> Result<(), RecordError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            RecordError::new(format!("Failed to create '{}': {}", self.dir.display(), e))
        })?;
        let path = self.path_for(name);
        let text = format!(
            "{}\n{}\n{}",
            record.wins(),
            record.losses(),
            record.total_games()
        );
        fs::write(&path, text)
            .map_err(|e| RecordError::new(format!("Failed to write '{}': {}", path.display(), e)))?;
        debug!(path = %path.display(), "Record saved");
        Ok(())
    }
}
