use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::GameId;

record_id! {
    /// Unique identifier for a scene.
    SceneId
}

/// How a scene turned out after the chaos die check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    /// The scene plays out as the player expected.
    Expected,
    /// Something about the expected scene is different.
    Altered,
    /// A random event replaces the expected scene.
    Interrupted,
}

impl fmt::Display for SceneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected => write!(f, "Expected"),
            Self::Altered => write!(f, "Altered"),
            Self::Interrupted => write!(f, "Interrupted"),
        }
    }
}

/// A persisted scene. At most one scene per game is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Unique identifier.
    pub id: SceneId,
    /// Owning game.
    pub game_id: GameId,
    /// Result of the chaos die check.
    pub scene_type: SceneType,
    /// The player's expected scene concept.
    pub concept: String,
    /// The d10 chaos die roll.
    pub chaos_die_roll: u32,
    /// Random event text for altered/interrupted scenes.
    #[serde(default)]
    pub event: Option<String>,
    /// Whether this is the game's current scene.
    pub active: bool,
    /// When the scene started.
    pub started_at: DateTime<Utc>,
    /// When the scene ended.
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
}

impl SceneRecord {
    /// Create a new active scene.
    pub fn new(
        game_id: GameId,
        scene_type: SceneType,
        concept: impl Into<String>,
        chaos_die_roll: u32,
        event: Option<String>,
    ) -> Self {
        Self {
            id: SceneId::new(),
            game_id,
            scene_type,
            concept: concept.into(),
            chaos_die_roll,
            event,
            active: true,
            started_at: Utc::now(),
            ended_at: None,
        }
    }
}
