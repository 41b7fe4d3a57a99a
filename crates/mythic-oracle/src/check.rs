//! Fate dice checks against a difficulty.

use std::fmt;

use mythic_dice::FateRoll;

/// The four-tier result of comparing a total to a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckLabel {
    /// Beat the difficulty by three or more.
    SuccessWithStyle,
    /// Beat the difficulty.
    Success,
    /// Matched the difficulty.
    Tie,
    /// Fell short.
    Fail,
}

impl CheckLabel {
    /// Classify `total - difficulty`.
    pub fn classify(outcome: i64) -> Self {
        if outcome >= 3 {
            Self::SuccessWithStyle
        } else if outcome > 0 {
            Self::Success
        } else if outcome < 0 {
            Self::Fail
        } else {
            Self::Tie
        }
    }
}

impl fmt::Display for CheckLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuccessWithStyle => write!(f, "Success With Style"),
            Self::Success => write!(f, "Success"),
            Self::Tie => write!(f, "Tie"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// How a fate roll is compared, if at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opposition {
    /// No difficulty given.
    None,
    /// A fixed difficulty.
    Fixed(i32),
    /// A stated difficulty plus the defender's own roll.
    Opposed {
        /// The stated difficulty (the defender's skill).
        difficulty: i32,
        /// The defender's dice.
        defender: FateRoll,
    },
}

/// Render the roll string that follows `4dF ` in a log line.
///
/// `skill` is the explicitly supplied skill, already attached to `roll` as a
/// modifier; it only controls the `; skill S -> T` annotation.
pub fn describe_fate_roll(roll: &FateRoll, skill: Option<i8>, opposition: &Opposition) -> String {
    let mut text = roll.to_string();
    if let Some(skill) = skill {
        text.push_str(&format!("; skill {skill} -> {}", roll.total()));
    }
    match opposition {
        Opposition::None => {}
        Opposition::Fixed(difficulty) => {
            let outcome = i64::from(roll.total()) - i64::from(*difficulty);
            text.push_str(&format!(
                " vs diff {difficulty}: {} ({outcome:+})",
                CheckLabel::classify(outcome)
            ));
        }
        Opposition::Opposed {
            difficulty,
            defender,
        } => {
            // Difficulties span all of i32, so widen before adding dice.
            let effective = i64::from(*difficulty) + i64::from(defender.total());
            let outcome = i64::from(roll.total()) - effective;
            text.push_str(&format!(
                " vs Opponent ({defender}; skill {difficulty} -> {effective}): {} ({outcome:+})",
                CheckLabel::classify(outcome)
            ));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use mythic_dice::RollModifier;

    fn faces(dice: [i8; 4]) -> FateRoll {
        FateRoll::from_faces(dice).unwrap()
    }

    #[test]
    fn classify_tiers() {
        assert_eq!(CheckLabel::classify(5), CheckLabel::SuccessWithStyle);
        assert_eq!(CheckLabel::classify(3), CheckLabel::SuccessWithStyle);
        assert_eq!(CheckLabel::classify(2), CheckLabel::Success);
        assert_eq!(CheckLabel::classify(1), CheckLabel::Success);
        assert_eq!(CheckLabel::classify(0), CheckLabel::Tie);
        assert_eq!(CheckLabel::classify(-1), CheckLabel::Fail);
    }

    #[test]
    fn plain_roll() {
        let text = describe_fate_roll(&faces([1, 0, -1, 1]), None, &Opposition::None);
        assert_eq!(text, "{ 1, 0, -1, 1 } +1");
    }

    #[test]
    fn fixed_difficulty_fail() {
        let text = describe_fate_roll(&faces([1, 0, 0, 0]), None, &Opposition::Fixed(2));
        assert_eq!(text, "{ 1, 0, 0, 0 } +1 vs diff 2: Fail (-1)");
    }

    #[test]
    fn skill_annotation() {
        let roll = faces([1, 1, 0, 0]).with_modifier(RollModifier::skill(2));
        let text = describe_fate_roll(&roll, Some(2), &Opposition::Fixed(1));
        assert_eq!(
            text,
            "{ 1, 1, 0, 0 } +2; skill 2 -> 4 vs diff 1: Success With Style (+3)"
        );
    }

    #[test]
    fn tie_shows_plus_zero() {
        let text = describe_fate_roll(&faces([0, 0, 0, 0]), None, &Opposition::Fixed(0));
        assert_eq!(text, "{ 0, 0, 0, 0 } +0 vs diff 0: Tie (+0)");
    }

    #[test]
    fn opposed_adds_defender_total() {
        let defender = faces([-1, 0, 0, 0]);
        let roll = faces([1, 1, 0, 0]);
        let text = describe_fate_roll(
            &roll,
            None,
            &Opposition::Opposed {
                difficulty: 2,
                defender,
            },
        );
        assert_eq!(
            text,
            "{ 1, 1, 0, 0 } +2 vs Opponent ({ -1, 0, 0, 0 } -1; skill 2 -> 1): Success (+1)"
        );
    }

    #[test]
    fn extreme_fixed_difficulties_do_not_wrap() {
        let text = describe_fate_roll(&faces([1, 0, 0, 0]), None, &Opposition::Fixed(i32::MIN));
        assert_eq!(
            text,
            "{ 1, 0, 0, 0 } +1 vs diff -2147483648: Success With Style (+2147483649)"
        );
        let text = describe_fate_roll(&faces([-1, 0, 0, 0]), None, &Opposition::Fixed(i32::MAX));
        assert_eq!(text, "{ -1, 0, 0, 0 } -1 vs diff 2147483647: Fail (-2147483648)");
    }

    #[test]
    fn extreme_opposed_difficulty_does_not_wrap() {
        let text = describe_fate_roll(
            &faces([1, 0, 0, 0]),
            None,
            &Opposition::Opposed {
                difficulty: i32::MAX,
                defender: faces([1, 0, 0, 0]),
            },
        );
        assert_eq!(
            text,
            "{ 1, 0, 0, 0 } +1 vs Opponent ({ 1, 0, 0, 0 } +1; skill 2147483647 -> 2147483648): \
             Fail (-2147483647)"
        );
    }
}
