use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Lowest user-facing chaos factor.
pub const MIN_CHAOS_USER: i64 = 1;
/// Highest user-facing chaos factor.
pub const MAX_CHAOS_USER: i64 = 9;
/// Highest internal chaos value (the oracle's column index).
pub const MAX_CHAOS_INTERNAL: u8 = 8;

/// Convert a user-facing chaos value (1-9) to the internal scale (0-8).
pub fn chaos_user_to_internal(user: i64) -> i64 {
    user - 1
}

/// Convert an internal chaos value (0-8) to the user-facing scale (1-9).
pub fn chaos_internal_to_user(internal: i64) -> i64 {
    internal + 1
}

/// The chaos factor, stored on the internal 0-8 scale.
///
/// Users always see and type the 1-9 scale; the oracle and the data file use
/// 0-8. The only ways in are [`ChaosLevel::from_user`] and
/// [`ChaosLevel::from_internal`], both of which validate, so a `ChaosLevel`
/// is always a valid oracle column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ChaosLevel(u8);

impl ChaosLevel {
    /// Fallback chaos when neither a flag nor a game supplies one (user 5).
    pub const DEFAULT: Self = Self(4);

    /// Validate a user-facing value (1-9) and convert it to the internal scale.
    pub fn from_user(user: i64) -> CoreResult<Self> {
        if !(MIN_CHAOS_USER..=MAX_CHAOS_USER).contains(&user) {
            return Err(CoreError::ChaosOutOfRange {
                min: MIN_CHAOS_USER,
                max: MAX_CHAOS_USER,
                value: user,
            });
        }
        Ok(Self(chaos_user_to_internal(user) as u8))
    }

    /// Validate an internal value (0-8).
    pub fn from_internal(internal: u8) -> CoreResult<Self> {
        if internal > MAX_CHAOS_INTERNAL {
            return Err(CoreError::InvalidInternalChaos(internal));
        }
        Ok(Self(internal))
    }

    /// The internal 0-8 value.
    pub fn internal(self) -> u8 {
        self.0
    }

    /// The user-facing 1-9 value.
    pub fn user(self) -> u8 {
        self.0 + 1
    }

    /// One step more chaotic, capped at user 9.
    pub fn increased(self) -> Self {
        Self((self.0 + 1).min(MAX_CHAOS_INTERNAL))
    }

    /// One step calmer, floored at user 1.
    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for ChaosLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for ChaosLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreResult<Self> {
        Self::from_internal(value)
    }
}

impl From<ChaosLevel> for u8 {
    fn from(level: ChaosLevel) -> Self {
        level.0
    }
}

/// Displays the user-facing value.
impl fmt::Display for ChaosLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user())
    }
}

/// The odds ladder, from least to most likely (indices 0-8).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OddsLevel {
    /// Index 0.
    Impossible,
    /// Index 1.
    NearlyImpossible,
    /// Index 2.
    VeryUnlikely,
    /// Index 3.
    Unlikely,
    /// Index 4, the midpoint.
    #[default]
    FiftyFifty,
    /// Index 5.
    Likely,
    /// Index 6.
    VeryLikely,
    /// Index 7.
    NearlyCertain,
    /// Index 8.
    Certain,
}

const ODDS_LADDER: [OddsLevel; 9] = [
    OddsLevel::Impossible,
    OddsLevel::NearlyImpossible,
    OddsLevel::VeryUnlikely,
    OddsLevel::Unlikely,
    OddsLevel::FiftyFifty,
    OddsLevel::Likely,
    OddsLevel::VeryLikely,
    OddsLevel::NearlyCertain,
    OddsLevel::Certain,
];

impl OddsLevel {
    /// Highest valid index.
    pub const MAX_INDEX: i64 = 8;

    /// All odds levels in ladder order.
    pub fn all() -> &'static [Self] {
        &ODDS_LADDER
    }

    /// Look up a level by its ladder index.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| ODDS_LADDER.get(i))
            .copied()
    }

    /// Position on the ladder (0-8).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The canonical display name. Names are matched case-insensitively.
    pub fn name(self) -> &'static str {
        match self {
            Self::Impossible => "Impossible",
            Self::NearlyImpossible => "Nearly Impossible",
            Self::VeryUnlikely => "Very Unlikely",
            Self::Unlikely => "Unlikely",
            Self::FiftyFifty => "Fifty Fifty",
            Self::Likely => "Likely",
            Self::VeryLikely => "Very Likely",
            Self::NearlyCertain => "Nearly Certain",
            Self::Certain => "Certain",
        }
    }
}

impl fmt::Display for OddsLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
