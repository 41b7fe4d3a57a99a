use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::game::{Game, GameId};
use crate::level::{ChaosLevel, OddsLevel};
use crate::log::{LogEntry, LogKind};
use crate::scene::SceneRecord;

/// Append-only persistence of story log entries.
///
/// `append` either stores exactly one entry or returns an error with nothing
/// written. Entries are never updated.
pub trait LogStore {
    /// Append one entry to a game's log.
    fn append(&mut self, game: GameId, kind: LogKind, text: &str) -> CoreResult<LogEntry>;

    /// The most recent live entries of a game, newest first.
    fn recent_entries(&self, game: GameId, limit: usize) -> Vec<LogEntry>;
}

/// Everything that lives in the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    active: Option<GameId>,
    #[serde(default)]
    games: Vec<Game>,
    #[serde(default)]
    entries: Vec<LogEntry>,
    #[serde(default)]
    scenes: Vec<SceneRecord>,
}

/// The game database: games, their logs and scenes, and the active game.
///
/// Backed by a single JSON file, rewritten atomically (temp file + rename)
/// after every mutation. A database created with [`GameDb::in_memory`] never
/// touches the filesystem.
///
/// Entries are kept in append order, which is also chronological order.
#[derive(Debug, Default)]
pub struct GameDb {
    path: Option<PathBuf>,
    data: Snapshot,
}

impl GameDb {
    /// Create an empty database that lives only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the database at `path`. A missing file yields an empty database;
    /// the file is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Snapshot::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), "opened game database");
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // -----------------------------------------------------------------------
    // Games
    // -----------------------------------------------------------------------

    /// All live games in creation order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.data.games.iter().filter(|g| !g.is_deleted())
    }

    /// Look up a live game by id.
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games().find(|g| g.id == id)
    }

    /// Look up a live game by exact name.
    pub fn find_game(&self, name: &str) -> Option<&Game> {
        self.games().find(|g| g.name == name)
    }

    /// The currently active game, if one is selected and still live.
    pub fn active_game(&self) -> Option<&Game> {
        self.data.active.and_then(|id| self.game(id))
    }

    /// The active game, or [`CoreError::NoActiveGame`].
    pub fn require_active(&self) -> CoreResult<&Game> {
        self.active_game().ok_or(CoreError::NoActiveGame)
    }

    /// Create a game with the default theme ranking and make it active.
    pub fn create_game(&mut self, name: &str, chaos: ChaosLevel) -> CoreResult<Game> {
        self.insert_game(Game::new(name, chaos))
    }

    /// Store a prepared game record and make it active. Names stay unique.
    pub fn insert_game(&mut self, game: Game) -> CoreResult<Game> {
        if self.find_game(&game.name).is_some() {
            return Err(CoreError::DuplicateGame(game.name));
        }
        let created = game.clone();
        self.commit(|data| {
            data.active = Some(game.id);
            data.games.push(game);
            Ok(())
        })?;
        tracing::info!(game = %created.name, chaos = created.chaos.user(), "created game");
        Ok(created)
    }

    /// Select a game (or none) as the active game.
    pub fn set_active(&mut self, id: Option<GameId>) -> CoreResult<()> {
        if let Some(id) = id {
            self.game(id).ok_or(CoreError::UnknownGame(id))?;
        }
        self.commit(|data| {
            data.active = id;
            Ok(())
        })
    }

    /// Change a game's chaos factor.
    pub fn set_chaos(&mut self, id: GameId, chaos: ChaosLevel) -> CoreResult<Game> {
        self.update_game(id, |g| g.chaos = chaos)
    }

    /// Change a game's default odds.
    pub fn set_odds(&mut self, id: GameId, odds: Option<OddsLevel>) -> CoreResult<Game> {
        self.update_game(id, |g| g.odds = odds)
    }

    /// Soft-delete a game and its log entries. Returns the number of entries
    /// removed. Clears the active selection if it pointed at this game.
    pub fn remove_game(&mut self, id: GameId) -> CoreResult<usize> {
        self.game(id).ok_or(CoreError::UnknownGame(id))?;
        let removed = self.commit(|data| {
            let now = Utc::now();
            let mut removed = 0;
            for entry in data
                .entries
                .iter_mut()
                .filter(|e| e.game_id == id && !e.is_deleted())
            {
                entry.deleted_at = Some(now);
                removed += 1;
            }
            for scene in data.scenes.iter_mut().filter(|s| s.game_id == id) {
                scene.active = false;
            }
            if let Some(game) = data.games.iter_mut().find(|g| g.id == id) {
                game.deleted_at = Some(now);
                game.updated_at = now;
            }
            if data.active == Some(id) {
                data.active = None;
            }
            Ok(removed)
        })?;
        tracing::info!(game = %id, entries = removed, "removed game");
        Ok(removed)
    }

    fn update_game(&mut self, id: GameId, change: impl FnOnce(&mut Game)) -> CoreResult<Game> {
        self.commit(|data| {
            let game = data
                .games
                .iter_mut()
                .find(|g| g.id == id && !g.is_deleted())
                .ok_or(CoreError::UnknownGame(id))?;
            change(game);
            game.updated_at = Utc::now();
            Ok(game.clone())
        })
    }

    // -----------------------------------------------------------------------
    // Log entries
    // -----------------------------------------------------------------------

    /// All live entries of a game, oldest first.
    pub fn entries(&self, game: GameId) -> Vec<&LogEntry> {
        self.data
            .entries
            .iter()
            .filter(|e| e.game_id == game && !e.is_deleted())
            .collect()
    }

    /// Number of live entries in a game's log.
    pub fn entry_count(&self, game: GameId) -> usize {
        self.data
            .entries
            .iter()
            .filter(|e| e.game_id == game && !e.is_deleted())
            .count()
    }

    /// Soft-delete the newest `n` live entries of a game. Returns how many
    /// were actually removed (fewer than `n` if the log is shorter).
    pub fn remove_last_entries(&mut self, game: GameId, n: usize) -> CoreResult<usize> {
        self.game(game).ok_or(CoreError::UnknownGame(game))?;
        self.commit(|data| {
            let now = Utc::now();
            let mut removed = 0;
            for entry in data
                .entries
                .iter_mut()
                .rev()
                .filter(|e| e.game_id == game && !e.is_deleted())
                .take(n)
            {
                entry.deleted_at = Some(now);
                removed += 1;
            }
            Ok(removed)
        })
    }

    // -----------------------------------------------------------------------
    // Scenes
    // -----------------------------------------------------------------------

    /// The game's active scene, if any.
    pub fn active_scene(&self, game: GameId) -> Option<&SceneRecord> {
        self.data
            .scenes
            .iter()
            .find(|s| s.game_id == game && s.active)
    }

    /// Store a new scene and its start log entry together, deactivating any
    /// previously active scene of the same game.
    pub fn start_scene(&mut self, scene: SceneRecord, log_text: &str) -> CoreResult<LogEntry> {
        let game = scene.game_id;
        self.game(game).ok_or(CoreError::UnknownGame(game))?;
        let entry = LogEntry::new(game, LogKind::SceneStart, log_text);
        let stored = entry.clone();
        self.commit(|data| {
            let now = Utc::now();
            for old in data
                .scenes
                .iter_mut()
                .filter(|s| s.game_id == game && s.active)
            {
                old.active = false;
                old.ended_at = Some(now);
            }
            data.scenes.push(scene);
            data.entries.push(entry);
            Ok(())
        })?;
        Ok(stored)
    }

    /// Deactivate the game's active scene, append the end log entry and
    /// optionally set a new chaos factor, all in one write. Returns `None`
    /// (and writes nothing) when no scene is active.
    pub fn end_scene(
        &mut self,
        game: GameId,
        log_text: &str,
        chaos: Option<ChaosLevel>,
    ) -> CoreResult<Option<SceneRecord>> {
        if self.active_scene(game).is_none() {
            return Ok(None);
        }
        let entry = LogEntry::new(game, LogKind::SceneEnd, log_text);
        self.commit(|data| {
            let now = Utc::now();
            let ended = data
                .scenes
                .iter_mut()
                .find(|s| s.game_id == game && s.active)
                .map(|s| {
                    s.active = false;
                    s.ended_at = Some(now);
                    s.clone()
                });
            let target = data.games.iter_mut().find(|g| g.id == game);
            if let (Some(chaos), Some(g)) = (chaos, target) {
                g.chaos = chaos;
                g.updated_at = now;
            }
            data.entries.push(entry);
            Ok(ended)
        })
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Apply a mutation and persist it. If writing fails the in-memory state
    /// is restored, so memory and disk never disagree.
    fn commit<T>(&mut self, f: impl FnOnce(&mut Snapshot) -> CoreResult<T>) -> CoreResult<T> {
        let backup = self.data.clone();
        let out = match f(&mut self.data) {
            Ok(out) => out,
            Err(e) => {
                self.data = backup;
                return Err(e);
            }
        };
        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "failed to write game database");
            self.data = backup;
            return Err(e);
        }
        Ok(out)
    }

    fn persist(&self) -> CoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl LogStore for GameDb {
    fn append(&mut self, game: GameId, kind: LogKind, text: &str) -> CoreResult<LogEntry> {
        self.game(game).ok_or(CoreError::UnknownGame(game))?;
        let entry = LogEntry::new(game, kind, text);
        let stored = entry.clone();
        self.commit(|data| {
            data.entries.push(entry);
            Ok(())
        })?;
        tracing::debug!(game = %game, kind = %kind, "appended log entry");
        Ok(stored)
    }

    fn recent_entries(&self, game: GameId, limit: usize) -> Vec<LogEntry> {
        self.data
            .entries
            .iter()
            .rev()
            .filter(|e| e.game_id == game && !e.is_deleted())
            .take(limit)
            .cloned()
            .collect()
    }
}
