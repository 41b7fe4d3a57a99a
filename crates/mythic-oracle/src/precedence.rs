//! Chaos and odds precedence.
//!
//! Each value is decided on its own: an explicit flag wins, then the active
//! game's stored value, then the configured fallback.

use mythic_core::{ChaosLevel, Game, OddsLevel};

use crate::config::RollConfig;
use crate::error::{OracleError, OracleResult};
use crate::odds::{OddsResolution, resolve_odds};

/// What the odds step decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OddsChoice {
    /// Roll with this level.
    Level(OddsLevel),
    /// Print the odds table and do not roll.
    ListRequested,
}

/// The chaos factor a roll will use.
///
/// `explicit` is the user-facing (1-9) flag value, `None` when the flag was
/// not given. Out-of-range values are rejected with the valid bounds.
pub fn effective_chaos(
    explicit: Option<i64>,
    game: Option<&Game>,
    config: &RollConfig,
) -> OracleResult<ChaosLevel> {
    if let Some(user) = explicit {
        return Ok(ChaosLevel::from_user(user)?);
    }
    Ok(game.map_or(config.fallback_chaos, |g| g.chaos))
}

/// The odds level a roll will use.
///
/// An explicit token is resolved and its failures propagate unchanged.
/// Without one, the game's stored default odds apply, then the fallback.
pub fn effective_odds(
    explicit: Option<&str>,
    game: Option<&Game>,
    config: &RollConfig,
) -> OracleResult<OddsChoice> {
    let Some(token) = explicit else {
        let stored = game.and_then(|g| g.odds);
        return Ok(OddsChoice::Level(stored.unwrap_or(config.fallback_odds)));
    };
    match resolve_odds(token) {
        OddsResolution::Resolved(level) => Ok(OddsChoice::Level(level)),
        OddsResolution::ListRequested => Ok(OddsChoice::ListRequested),
        OddsResolution::OutOfRange(value) => Err(OracleError::OddsOutOfRange {
            max: OddsLevel::MAX_INDEX,
            value,
        }),
        OddsResolution::Ambiguous(candidates) => {
            tracing::debug!(token, count = candidates.len(), "ambiguous odds");
            Err(OracleError::AmbiguousOdds {
                token: token.to_string(),
                candidates,
            })
        }
        OddsResolution::Invalid => {
            tracing::debug!(token, "invalid odds");
            Err(OracleError::InvalidOdds {
                token: token.to_string(),
            })
        }
    }
}
