//! Fate chart oracle for yes/no questions.
//!
//! The chart maps an odds level and the chaos factor to a d100 target. At or
//! under the target is a yes; the outer fifth of each side is exceptional.
//! Doubles (11, 22, ... 99) whose digit is at most the user-facing chaos
//! trigger a random event.

use std::fmt;

use mythic_core::{ChaosLevel, OddsLevel};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::event::{RandomEvent, generate_random_event};

/// A source of graded yes/no answers.
pub trait Oracle {
    /// Answer one question at the given odds and chaos.
    fn consult<R: Rng + ?Sized>(
        &self,
        odds: OddsLevel,
        chaos: ChaosLevel,
        rng: &mut R,
    ) -> ChartResult;
}

/// The oracle's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartAnswer {
    /// Yes, and more than expected.
    ExceptionalYes,
    /// Yes.
    Yes,
    /// No.
    No,
    /// No, and worse than expected.
    ExceptionalNo,
}

impl ChartAnswer {
    /// Whether the answer is some form of yes.
    pub fn is_yes(self) -> bool {
        matches!(self, Self::ExceptionalYes | Self::Yes)
    }
}

impl fmt::Display for ChartAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExceptionalYes => write!(f, "Exceptional Yes"),
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::ExceptionalNo => write!(f, "Exceptional No"),
        }
    }
}

/// Full result of one chart consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartResult {
    /// The answer.
    pub answer: ChartAnswer,
    /// The d100 roll (1-100).
    pub roll: u32,
    /// The yes target for this odds/chaos cell.
    pub target: u32,
    /// A random event, if the roll triggered one.
    pub event: Option<RandomEvent>,
}

impl fmt::Display for ChartResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.answer)?;
        if let Some(event) = &self.event {
            write!(f, " (Random Event: {event})")?;
        }
        Ok(())
    }
}

/// Yes targets along the diagonal `odds index + internal chaos` (0-16).
///
/// Moving one step up the odds ladder has the same effect as one more point
/// of chaos, so the 9x9 chart collapses to this single ladder.
const TARGETS: [u32; 17] = [
    1, 1, 1, 5, 10, 15, 25, 35, 50, 65, 75, 85, 90, 95, 99, 99, 99,
];

/// The standard fate chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FateChart;

impl FateChart {
    /// The d100 yes target for a cell.
    pub fn target(odds: OddsLevel, chaos: ChaosLevel) -> u32 {
        TARGETS[usize::from(odds.index()) + usize::from(chaos.internal())]
    }

    /// Grade a d100 roll against a target.
    pub fn grade(roll: u32, target: u32) -> ChartAnswer {
        if roll <= target {
            if roll <= (target / 5).max(1) {
                ChartAnswer::ExceptionalYes
            } else {
                ChartAnswer::Yes
            }
        } else if roll > 100 - (100 - target) / 5 {
            ChartAnswer::ExceptionalNo
        } else {
            ChartAnswer::No
        }
    }
}

/// Whether a d100 roll is a double whose digit is at most the user chaos.
pub fn triggers_random_event(roll: u32, chaos: ChaosLevel) -> bool {
    (11..=99).contains(&roll) && roll % 11 == 0 && roll / 11 <= u32::from(chaos.user())
}

impl Oracle for FateChart {
    fn consult<R: Rng + ?Sized>(
        &self,
        odds: OddsLevel,
        chaos: ChaosLevel,
        rng: &mut R,
    ) -> ChartResult {
        let target = Self::target(odds, chaos);
        let roll: u32 = rng.random_range(1..=100);
        let answer = Self::grade(roll, target);
        let event = triggers_random_event(roll, chaos).then(|| generate_random_event(rng));
        tracing::debug!(%odds, chaos = chaos.user(), roll, target, %answer, "consulted fate chart");
        ChartResult {
            answer,
            roll,
            target,
            event,
        }
    }
}
