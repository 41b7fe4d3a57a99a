use crate::game::GameId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when validating or persisting game records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A user-facing chaos value outside 1-9.
    #[error("chaos must be between {min} and {max}")]
    ChaosOutOfRange {
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
        /// The rejected value.
        value: i64,
    },

    /// An internal chaos value outside 0-8 (usually a corrupted data file).
    #[error("internal chaos must be between 0 and 8, got {0}")]
    InvalidInternalChaos(u8),

    /// A game name that is empty, too long, or contains control characters.
    #[error("invalid game name: {0}")]
    InvalidGameName(String),

    /// A game with the same name already exists.
    #[error("game already exists: \"{0}\"")]
    DuplicateGame(String),

    /// No game with the given name exists.
    #[error("could not find game '{0}'")]
    GameNotFound(String),

    /// The game id does not refer to a live game.
    #[error("game not found: {0}")]
    UnknownGame(GameId),

    /// A command that needs an active game ran without one.
    #[error("no game selected")]
    NoActiveGame,

    /// Reading or writing the data file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file could not be encoded or decoded.
    #[error("storage format error: {0}")]
    Format(#[from] serde_json::Error),
}
