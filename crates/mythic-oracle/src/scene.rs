//! Scene start and end.
//!
//! Starting a scene rolls the chaos die: a d10 at or under the user-facing
//! chaos factor changes the scene (odd = altered, even = interrupted) and
//! brings a random event with it.

use mythic_core::{ChaosLevel, Game, GameDb, SceneRecord, SceneType};
use rand::Rng;

use crate::error::OracleResult;
use crate::event::{RandomEvent, generate_random_event};

/// Log line written when a scene ends.
pub const SCENE_END_TEXT: &str = "--- Scene End ---";

/// Result of the chaos die.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaosDieCheck {
    /// The d10 roll.
    pub roll: u32,
    /// What the roll made of the scene.
    pub scene_type: SceneType,
    /// Event for altered and interrupted scenes.
    pub event: Option<RandomEvent>,
}

/// Roll the chaos die for a new scene.
pub fn roll_chaos_die<R: Rng + ?Sized>(chaos: ChaosLevel, rng: &mut R) -> ChaosDieCheck {
    let roll: u32 = rng.random_range(1..=10);
    let scene_type = if roll > u32::from(chaos.user()) {
        SceneType::Expected
    } else if roll % 2 == 1 {
        SceneType::Altered
    } else {
        SceneType::Interrupted
    };
    let event = (scene_type != SceneType::Expected).then(|| generate_random_event(rng));
    ChaosDieCheck {
        roll,
        scene_type,
        event,
    }
}

/// The log line for a scene start.
pub fn scene_start_text(concept: &str, check: &ChaosDieCheck) -> String {
    match &check.event {
        None => format!("--- Scene Start: {} | {concept} ---", check.scene_type),
        Some(event) => format!(
            "--- Scene Start: {} | Expected: {concept} | Event: {event} ---",
            check.scene_type
        ),
    }
}

/// How the scene went for the player character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SceneVerdict {
    /// Leave the chaos factor alone.
    #[default]
    Neutral,
    /// In control: chaos goes down one.
    Well,
    /// Out of control: chaos goes up one.
    Badly,
}

impl SceneVerdict {
    /// The chaos factor after this verdict, or `None` if unchanged.
    pub fn adjust(self, chaos: ChaosLevel) -> Option<ChaosLevel> {
        match self {
            Self::Neutral => None,
            Self::Well => Some(chaos.decreased()),
            Self::Badly => Some(chaos.increased()),
        }
    }
}

/// Start a scene for `game`: roll the chaos die, replace any active scene
/// and log the start.
pub fn start_scene<R: Rng + ?Sized>(
    db: &mut GameDb,
    game: &Game,
    concept: &str,
    rng: &mut R,
) -> OracleResult<(SceneRecord, ChaosDieCheck)> {
    let check = roll_chaos_die(game.chaos, rng);
    let text = scene_start_text(concept, &check);
    let scene = SceneRecord::new(
        game.id,
        check.scene_type,
        concept,
        check.roll,
        check.event.as_ref().map(ToString::to_string),
    );
    db.start_scene(scene.clone(), &text)?;
    tracing::info!(game = %game.name, scene_type = %check.scene_type, roll = check.roll, "scene started");
    Ok((scene, check))
}

/// End the active scene of `game`, adjusting chaos per the verdict. Returns
/// `None` when no scene was active.
pub fn end_scene(
    db: &mut GameDb,
    game: &Game,
    verdict: SceneVerdict,
) -> OracleResult<Option<SceneRecord>> {
    let chaos = verdict.adjust(game.chaos);
    let ended = db.end_scene(game.id, SCENE_END_TEXT, chaos)?;
    if ended.is_some() {
        tracing::info!(game = %game.name, ?verdict, "scene ended");
    }
    Ok(ended)
}
