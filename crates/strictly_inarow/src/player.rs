//! Players: who they are, what they draw, and who decides their moves.

use crate::error::ConfigError;
use crate::record::PlayerRecord;
use crate::types::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Strength of a computer player.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Skill {
    /// Plays uniformly random legal moves.
    Basic,
    /// Takes an immediate win, else blocks an immediate loss, else plays randomly.
    Strategic,
}

impl Skill {
    /// Display name given to a computer player of this skill.
    #[instrument]
    pub fn computer_name(self) -> &'static str {
        match self {
            Skill::Basic => "EasyBot",
            Skill::Strategic => "HardBot",
        }
    }

    /// Names reserved for computer players.
    pub const RESERVED_NAMES: [&'static str; 2] = ["EasyBot", "HardBot"];

    /// Checks if `name` matches a computer player's name, ignoring ASCII case.
    pub fn is_reserved(name: &str) -> bool {
        Self::RESERVED_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
    }
}

/// Who chooses a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "skill", rename_all = "lowercase")]
pub enum PlayerKind {
    /// A person at the console.
    Local,
    /// A computer player of the given skill.
    Computer(Skill),
}

/// Identity and mark of a player, before any record is attached.
///
/// Deserialization goes through [`PlayerSpec::local`] or
/// [`PlayerSpec::computer`], so a computer player must carry its skill's name.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "PlayerSpecFields")]
pub struct PlayerSpec {
    /// Unique display name; also the key for the persisted record.
    name: String,
    /// Unique board symbol.
    symbol: Symbol,
    /// Local or computer.
    kind: PlayerKind,
}

impl PlayerSpec {
    /// Creates a local player.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn local(name: impl AsRef<str>, symbol: Symbol) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            symbol,
            kind: PlayerKind::Local,
        }
    }

    /// Creates a computer player named after its skill.
    #[instrument]
    pub fn computer(skill: Skill, symbol: Symbol) -> Self {
        Self {
            name: skill.computer_name().to_string(),
            symbol,
            kind: PlayerKind::Computer(skill),
        }
    }
}

/// Unchecked wire form of [`PlayerSpec`].
#[derive(Deserialize)]
struct PlayerSpecFields {
    name: String,
    symbol: Symbol,
    kind: PlayerKind,
}

impl TryFrom<PlayerSpecFields> for PlayerSpec {
    type Error = ConfigError;

    fn try_from(fields: PlayerSpecFields) -> Result<Self, Self::Error> {
        match fields.kind {
            PlayerKind::Local => {
                let spec = PlayerSpec::local(&fields.name, fields.symbol);
                if spec.name.is_empty() {
                    return Err(ConfigError::new("player name must not be empty"));
                }
                Ok(spec)
            }
            PlayerKind::Computer(skill) if fields.name == skill.computer_name() => {
                Ok(PlayerSpec::computer(skill, fields.symbol))
            }
            PlayerKind::Computer(skill) => Err(ConfigError::new(format!(
                "a {} computer player is named '{}', not '{}'",
                skill,
                skill.computer_name(),
                fields.name
            ))),
        }
    }
}

/// A seated player with the record loaded for their name.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    /// Unique display name.
    name: String,
    /// Board symbol.
    symbol: Symbol,
    /// Local or computer.
    kind: PlayerKind,
    /// Win/loss/game counters.
    record: PlayerRecord,
}

impl Player {
    /// Seats a player with an existing record.
    #[instrument(skip(spec), fields(name = %spec.name))]
    pub fn new(spec: PlayerSpec, record: PlayerRecord) -> Self {
        Self {
            name: spec.name,
            symbol: spec.symbol,
            kind: spec.kind,
            record,
        }
    }

    /// Mutable access to the record for outcome updates.
    pub(crate) fn record_mut(&mut self) -> &mut PlayerRecord {
        &mut self.record
    }
}
