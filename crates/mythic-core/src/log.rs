use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::GameId;

record_id! {
    /// Unique identifier for a log entry.
    LogEntryId
}

/// What produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// Free-form narrative text added by the player.
    Story,
    /// A fate chart or fate dice roll.
    DiceRoll,
    /// Scene start marker.
    SceneStart,
    /// Scene end marker.
    SceneEnd,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Story => write!(f, "story"),
            Self::DiceRoll => write!(f, "dice roll"),
            Self::SceneStart => write!(f, "scene start"),
            Self::SceneEnd => write!(f, "scene end"),
        }
    }
}

/// One immutable line in a game's story log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier.
    pub id: LogEntryId,
    /// Owning game.
    pub game_id: GameId,
    /// Entry type.
    pub kind: LogKind,
    /// The rendered text.
    pub text: String,
    /// When the entry was appended.
    pub created_at: DateTime<Utc>,
    /// Soft-delete marker (set by `log remove` and `game remove`).
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl LogEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(game_id: GameId, kind: LogKind, text: impl Into<String>) -> Self {
        Self {
            id: LogEntryId::new(),
            game_id,
            kind,
            text: text.into(),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Whether the entry has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
