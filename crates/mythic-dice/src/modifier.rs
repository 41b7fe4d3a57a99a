//! Labeled roll modifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A signed adjustment to a roll with a human-readable label (e.g. "skill").
///
/// Modifiers are additive; their order only matters for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollModifier {
    /// The signed value added to the total.
    pub value: i8,
    /// What the modifier represents.
    pub label: String,
}

impl RollModifier {
    /// Create a modifier.
    pub fn new(value: i8, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// A modifier labeled "skill".
    pub fn skill(value: i8) -> Self {
        Self::new(value, "skill")
    }
}

impl fmt::Display for RollModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.label, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_label() {
        let m = RollModifier::skill(2);
        assert_eq!(m.label, "skill");
        assert_eq!(m.to_string(), "skill +2");
    }

    #[test]
    fn negative_display() {
        assert_eq!(RollModifier::new(-1, "wound").to_string(), "wound -1");
    }
}
