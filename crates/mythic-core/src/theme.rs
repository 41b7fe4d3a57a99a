use std::fmt;

use serde::{Deserialize, Serialize};

/// A story theme. Each game ranks all five; the ranking decides which plot
/// chart column a plot point is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Fights, chases, and danger.
    Action,
    /// Dread and rising stakes.
    Tension,
    /// Clues and the unexplained.
    Mystery,
    /// Factions, favors, and standing.
    Social,
    /// The characters' own bonds and wounds.
    Personal,
}

impl Theme {
    /// All themes in declaration order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Action,
            Self::Tension,
            Self::Mystery,
            Self::Social,
            Self::Personal,
        ]
    }

    /// The ranking given to games stored before themes existed.
    pub fn default_ranking() -> Vec<Self> {
        Self::all().to_vec()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action => write!(f, "Action"),
            Self::Tension => write!(f, "Tension"),
            Self::Mystery => write!(f, "Mystery"),
            Self::Social => write!(f, "Social"),
            Self::Personal => write!(f, "Personal"),
        }
    }
}
