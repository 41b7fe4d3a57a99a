//! Random events.
//!
//! A random event is a focus (what the event is about) plus an action and a
//! subject word for the player to interpret.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tables::{random_action, random_subject};

/// What a random event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventFocus {
    /// Something happens away from the player character.
    RemoteEvent,
    /// Could be good or bad; the player decides.
    AmbiguousEvent,
    /// Someone new enters the story.
    NewNpc,
    /// An NPC acts on their own.
    NpcAction,
    /// Bad news for an NPC.
    NpcNegative,
    /// Good news for an NPC.
    NpcPositive,
    /// A thread moves closer to resolution.
    MoveTowardThread,
    /// A thread gets harder.
    MoveAwayFromThread,
    /// A thread ends.
    CloseThread,
    /// Bad news for the player character.
    PcNegative,
    /// Good news for the player character.
    PcPositive,
    /// Something tied to what is already happening.
    CurrentContext,
}

impl EventFocus {
    /// Map a d100 roll onto the focus table.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=5 => Self::RemoteEvent,
            6..=10 => Self::AmbiguousEvent,
            11..=20 => Self::NewNpc,
            21..=40 => Self::NpcAction,
            41..=45 => Self::NpcNegative,
            46..=50 => Self::NpcPositive,
            51..=55 => Self::MoveTowardThread,
            56..=65 => Self::MoveAwayFromThread,
            66..=70 => Self::CloseThread,
            71..=80 => Self::PcNegative,
            81..=85 => Self::PcPositive,
            _ => Self::CurrentContext,
        }
    }
}

impl fmt::Display for EventFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoteEvent => write!(f, "Remote Event"),
            Self::AmbiguousEvent => write!(f, "Ambiguous Event"),
            Self::NewNpc => write!(f, "New NPC"),
            Self::NpcAction => write!(f, "NPC Action"),
            Self::NpcNegative => write!(f, "NPC Negative"),
            Self::NpcPositive => write!(f, "NPC Positive"),
            Self::MoveTowardThread => write!(f, "Move Toward A Thread"),
            Self::MoveAwayFromThread => write!(f, "Move Away From A Thread"),
            Self::CloseThread => write!(f, "Close A Thread"),
            Self::PcNegative => write!(f, "PC Negative"),
            Self::PcPositive => write!(f, "PC Positive"),
            Self::CurrentContext => write!(f, "Current Context"),
        }
    }
}

/// A generated random event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomEvent {
    /// What the event is about.
    pub focus: EventFocus,
    /// Action word.
    pub action: String,
    /// Subject word.
    pub subject: String,
}

impl fmt::Display for RandomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.focus, self.action, self.subject)
    }
}

/// Roll a focus and a pair of meaning words.
pub fn generate_random_event<R: Rng + ?Sized>(rng: &mut R) -> RandomEvent {
    let focus = EventFocus::from_roll(rng.random_range(1..=100));
    RandomEvent {
        focus,
        action: random_action(rng).to_string(),
        subject: random_subject(rng).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn focus_table_boundaries() {
        assert_eq!(EventFocus::from_roll(1), EventFocus::RemoteEvent);
        assert_eq!(EventFocus::from_roll(5), EventFocus::RemoteEvent);
        assert_eq!(EventFocus::from_roll(6), EventFocus::AmbiguousEvent);
        assert_eq!(EventFocus::from_roll(40), EventFocus::NpcAction);
        assert_eq!(EventFocus::from_roll(70), EventFocus::CloseThread);
        assert_eq!(EventFocus::from_roll(86), EventFocus::CurrentContext);
        assert_eq!(EventFocus::from_roll(100), EventFocus::CurrentContext);
    }

    #[test]
    fn every_focus_is_reachable() {
        let seen: HashSet<_> = (1..=100).map(EventFocus::from_roll).collect();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn generated_event_has_words() {
        let mut rng = StdRng::seed_from_u64(42);
        let event = generate_random_event(&mut rng);
        assert!(!event.action.is_empty());
        assert!(!event.subject.is_empty());
    }

    #[test]
    fn event_display() {
        let event = RandomEvent {
            focus: EventFocus::NpcAction,
            action: "Betray".into(),
            subject: "Alliance".into(),
        };
        assert_eq!(event.to_string(), "NPC Action: Betray Alliance");
    }
}
