//! Fate/Fudge dice for Mythic.
//!
//! A fate roll is four trinary dice (-1, 0, +1) summed to a value in
//! -4..=4, plus any number of labeled modifiers. Rolling never fails; the
//! only side effect is consuming randomness from the caller's generator.

pub mod fate;
pub mod modifier;

pub use fate::{FATE_DICE, FateRoll};
pub use modifier::RollModifier;
