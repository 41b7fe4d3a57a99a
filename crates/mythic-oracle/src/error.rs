//! Error types for the roll pipeline.

use mythic_core::{CoreError, OddsLevel};
use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while resolving, rolling or logging.
///
/// Every variant except [`OracleError::Output`] and [`OracleError::Core`]
/// coming from an append is raised before any randomness is consumed.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Chaos validation or storage failure from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A numeric odds token outside the ladder.
    #[error("odds must be between 0 and {max}")]
    OddsOutOfRange {
        /// Highest valid index.
        max: i64,
        /// The rejected value.
        value: i64,
    },

    /// An odds token that matches no level name.
    #[error("invalid odds: '{token}'")]
    InvalidOdds {
        /// The token as the user typed it.
        token: String,
    },

    /// An odds token that is a prefix of several level names.
    #[error("multiple possible odds for '{token}'")]
    AmbiguousOdds {
        /// The token as the user typed it.
        token: String,
        /// Every level the token could mean, in ladder order.
        candidates: Vec<OddsLevel>,
    },

    /// The roll message exceeds the configured limit.
    #[error("message cannot be longer than {max} characters")]
    MessageTooLong {
        /// The limit.
        max: usize,
    },

    /// Unknown descriptor table name.
    #[error("unknown table: '{0}'")]
    UnknownTable(String),

    /// Writing the roll line to the output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
