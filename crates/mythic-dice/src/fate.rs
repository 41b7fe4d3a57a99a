//! The 4dF roll.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::modifier::RollModifier;

/// Number of dice in a fate roll.
pub const FATE_DICE: usize = 4;

/// Four fate dice and the modifiers attached to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FateRoll {
    dice: [i8; FATE_DICE],
    modifiers: Vec<RollModifier>,
}

impl FateRoll {
    /// Roll four independent fate dice.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut dice = [0; FATE_DICE];
        for die in &mut dice {
            *die = rng.random_range(-1..=1);
        }
        Self {
            dice,
            modifiers: Vec::new(),
        }
    }

    /// Build a roll from known faces. Returns `None` if any face is outside
    /// -1..=1.
    pub fn from_faces(dice: [i8; FATE_DICE]) -> Option<Self> {
        if dice.iter().any(|d| !(-1..=1).contains(d)) {
            return None;
        }
        Some(Self {
            dice,
            modifiers: Vec::new(),
        })
    }

    /// Attach a modifier.
    pub fn with_modifier(mut self, modifier: RollModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// The four die faces.
    pub fn faces(&self) -> [i8; FATE_DICE] {
        self.dice
    }

    /// Attached modifiers in the order they were added.
    pub fn modifiers(&self) -> &[RollModifier] {
        &self.modifiers
    }

    /// Sum of the dice alone, in -4..=4.
    pub fn dice_total(&self) -> i32 {
        self.dice.iter().map(|&d| i32::from(d)).sum()
    }

    /// Sum of the dice plus every modifier.
    pub fn total(&self) -> i32 {
        self.dice_total()
            + self
                .modifiers
                .iter()
                .map(|m| i32::from(m.value))
                .sum::<i32>()
    }
}

/// Renders the faces and the unmodified total, e.g. `{ -1, 0, 1, 1 } +1`.
impl fmt::Display for FateRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.dice;
        write!(f, "{{ {a}, {b}, {c}, {d} }} {:+}", self.dice_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn display_shows_unmodified_total() {
        let roll = FateRoll::from_faces([-1, 0, 1, 1])
            .unwrap()
            .with_modifier(RollModifier::skill(3));
        assert_eq!(roll.to_string(), "{ -1, 0, 1, 1 } +1");
        assert_eq!(roll.total(), 4);
    }

    #[test]
    fn display_zero_has_sign() {
        let roll = FateRoll::from_faces([0, 0, 0, 0]).unwrap();
        assert_eq!(roll.to_string(), "{ 0, 0, 0, 0 } +0");
    }

    #[test]
    fn display_negative_total() {
        let roll = FateRoll::from_faces([-1, -1, 0, 1]).unwrap();
        assert_eq!(roll.to_string(), "{ -1, -1, 0, 1 } -1");
    }

    #[test]
    fn from_faces_rejects_bad_face() {
        assert!(FateRoll::from_faces([2, 0, 0, 0]).is_none());
        assert!(FateRoll::from_faces([0, 0, -2, 0]).is_none());
    }

    #[test]
    fn seeded_rolls_repeat() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(FateRoll::roll(&mut a), FateRoll::roll(&mut b));
    }

    #[test]
    fn every_face_shows_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            for face in FateRoll::roll(&mut rng).faces() {
                seen[(face + 1) as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    proptest! {
        #[test]
        fn totals_stay_in_bounds(seed in any::<u64>(), mods in prop::collection::vec(-5i8..=5, 0..4)) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut roll = FateRoll::roll(&mut rng);
            for (i, m) in mods.iter().enumerate() {
                roll = roll.with_modifier(RollModifier::new(*m, format!("m{i}")));
            }
            prop_assert!((-4..=4).contains(&roll.dice_total()));
            prop_assert!(roll.faces().iter().all(|f| (-1..=1).contains(f)));
            let mod_sum: i32 = mods.iter().map(|&m| i32::from(m)).sum();
            prop_assert_eq!(roll.total(), roll.dice_total() + mod_sum);
            prop_assert_eq!(roll.modifiers().len(), mods.len());
        }
    }
}
