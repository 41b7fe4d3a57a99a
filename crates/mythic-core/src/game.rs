use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::level::{ChaosLevel, OddsLevel};
use crate::theme::Theme;

/// Longest accepted game name, in characters.
pub const MAX_GAME_NAME_LEN: usize = 64;

record_id! {
    /// Unique identifier for a game.
    GameId
}

/// A persisted game: a name, a chaos factor, and optional default odds.
///
/// Log entries and scenes reference the game by [`GameId`]; the game record
/// itself never embeds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier.
    pub id: GameId,
    /// Unique display name.
    pub name: String,
    /// Current chaos factor.
    pub chaos: ChaosLevel,
    /// Odds used for chart rolls when no `--odds` flag is given.
    #[serde(default)]
    pub odds: Option<OddsLevel>,
    /// Story themes, highest ranked first.
    #[serde(default = "Theme::default_ranking")]
    pub themes: Vec<Theme>,
    /// When the game was created.
    pub created_at: DateTime<Utc>,
    /// When the game record was last changed.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Create a new game record. The name is not validated here; use
    /// [`sanitize_game_name`] and [`validate_game_name`] first.
    pub fn new(name: impl Into<String>, chaos: ChaosLevel) -> Self {
        let now = Utc::now();
        Self {
            id: GameId::new(),
            name: name.into(),
            chaos,
            odds: None,
            themes: Theme::default_ranking(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Replace the theme ranking.
    pub fn with_themes(mut self, themes: Vec<Theme>) -> Self {
        self.themes = themes;
        self
    }

    /// Whether the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Trim a user-typed game name and collapse inner whitespace runs.
pub fn sanitize_game_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reject empty, overlong, or control-character names.
pub fn validate_game_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidGameName("name cannot be empty".into()));
    }
    if name.chars().count() > MAX_GAME_NAME_LEN {
        return Err(CoreError::InvalidGameName(format!(
            "name cannot be longer than {MAX_GAME_NAME_LEN} characters"
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(CoreError::InvalidGameName(
            "name cannot contain control characters".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(sanitize_game_name("  Kat   in\tShadow "), "Kat in Shadow");
    }

    #[test]
    fn validate_rejects_empty_and_long() {
        assert!(validate_game_name("").is_err());
        assert!(validate_game_name(&"x".repeat(65)).is_err());
        assert!(validate_game_name(&"x".repeat(64)).is_ok());
    }

    #[test]
    fn validate_rejects_control_chars() {
        assert!(validate_game_name("bad\u{7}name").is_err());
    }

    #[test]
    fn new_game_has_no_default_odds() {
        let g = Game::new("Test", ChaosLevel::DEFAULT);
        assert!(g.odds.is_none());
        assert!(!g.is_deleted());
        assert_eq!(g.created_at, g.updated_at);
    }

    #[test]
    fn games_without_themes_load_default_ranking() {
        let mut value = serde_json::to_value(Game::new("Old", ChaosLevel::DEFAULT)).unwrap();
        value.as_object_mut().unwrap().remove("themes");
        let game: Game = serde_json::from_value(value).unwrap();
        assert_eq!(game.themes, Theme::all());
    }

    #[test]
    fn game_id_display_is_short() {
        assert_eq!(GameId::new().to_string().len(), 8);
    }
}
