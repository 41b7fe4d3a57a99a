//! Roll pipeline configuration.

use mythic_core::{ChaosLevel, OddsLevel};

/// Default cap on roll message length, in characters.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 256;

/// Fallbacks and limits for chart and fate rolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollConfig {
    /// Chaos used when no flag is given and no game is active.
    pub fallback_chaos: ChaosLevel,
    /// Odds used when no flag is given and the game has no stored default.
    pub fallback_odds: OddsLevel,
    /// Longest accepted roll message, in characters.
    pub max_message_len: usize,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            fallback_chaos: ChaosLevel::DEFAULT,
            fallback_odds: OddsLevel::FiftyFifty,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }
}

impl RollConfig {
    /// Set the fallback chaos.
    pub fn with_fallback_chaos(mut self, chaos: ChaosLevel) -> Self {
        self.fallback_chaos = chaos;
        self
    }

    /// Set the fallback odds.
    pub fn with_fallback_odds(mut self, odds: OddsLevel) -> Self {
        self.fallback_odds = odds;
        self
    }

    /// Set the message length cap.
    pub fn with_max_message_len(mut self, max: usize) -> Self {
        self.max_message_len = max;
        self
    }
}
