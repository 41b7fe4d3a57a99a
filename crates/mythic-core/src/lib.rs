//! Core records for Mythic: games, story log entries, and scenes.
//!
//! This crate owns the persisted data model and the storage seam. The
//! oracle crate depends only on [`LogStore`] for appending roll results;
//! the CLI uses [`GameDb`] directly for game lifecycle commands.

/// Defines a `Uuid`-backed record identifier with a short display form.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", &self.0.to_string()[..8])
            }
        }
    };
}

/// Error types used throughout the crate.
pub mod error;
/// Game records and name handling.
pub mod game;
/// Chaos factor and odds level types.
pub mod level;
/// Story log entries.
pub mod log;
/// Scene records.
pub mod scene;
/// The log store trait and the JSON-file backed game database.
pub mod store;
/// Story themes.
pub mod theme;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export game types.
pub use game::{Game, GameId};
/// Re-export level types.
pub use level::{ChaosLevel, OddsLevel};
/// Re-export log types.
pub use log::{LogEntry, LogEntryId, LogKind};
/// Re-export scene types.
pub use scene::{SceneId, SceneRecord, SceneType};
/// Re-export storage types.
pub use store::{GameDb, LogStore};
/// Re-export theme types.
pub use theme::Theme;
