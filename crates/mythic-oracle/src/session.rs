//! The roll orchestrator.
//!
//! A [`Session`] bundles the log store, the active game (if any) and the roll
//! configuration. Each roll resolves its parameters, validates the message,
//! draws randomness, prints one line and, when a game is active, appends
//! exactly one log entry with that line.

use std::io::Write;

use mythic_core::{Game, LogEntry, LogKind, LogStore};
use mythic_dice::{FateRoll, RollModifier};
use rand::Rng;

use crate::chart::Oracle;
use crate::check::{Opposition, describe_fate_roll};
use crate::config::RollConfig;
use crate::error::{OracleError, OracleResult};
use crate::precedence::{OddsChoice, effective_chaos, effective_odds};

/// Parameters for a fate chart roll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartRollRequest {
    /// Free-text question; may be empty.
    pub message: String,
    /// User-facing chaos flag, if given.
    pub chaos: Option<i64>,
    /// Odds token, if given.
    pub odds: Option<String>,
}

/// Parameters for a 4dF roll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FateRollRequest {
    /// Free-text description; may be empty.
    pub message: String,
    /// Skill modifier, if given.
    pub skill: Option<i8>,
    /// Difficulty to beat, if given.
    pub difficulty: Option<i32>,
    /// Roll 4dF for the defender and add it to the difficulty.
    pub opposed: bool,
}

/// A completed roll.
#[derive(Debug, Clone, PartialEq)]
pub struct RollRecord {
    /// The printed line.
    pub text: String,
    /// The stored entry, when a game was active.
    pub entry: Option<LogEntry>,
}

/// Result of a chart roll request.
#[derive(Debug, Clone, PartialEq)]
pub enum RollOutcome {
    /// The oracle was consulted.
    Rolled(RollRecord),
    /// The odds token asked for the odds table; nothing was rolled.
    ListRequested,
}

/// One roll context: a store, the active game, and the configuration.
pub struct Session<'a, S: LogStore> {
    store: &'a mut S,
    game: Option<Game>,
    config: RollConfig,
}

impl<'a, S: LogStore> Session<'a, S> {
    /// Create a session. `game` is the active game, or `None` to roll without
    /// logging.
    pub fn new(store: &'a mut S, game: Option<Game>) -> Self {
        Self {
            store,
            game,
            config: RollConfig::default(),
        }
    }

    /// Replace the roll configuration.
    pub fn with_config(mut self, config: RollConfig) -> Self {
        self.config = config;
        self
    }

    /// Roll on the oracle.
    ///
    /// Validation (chaos range, odds token, message length) happens before
    /// the oracle is consulted, so a rejected request draws no randomness.
    pub fn roll_on_chart<O, R, W>(
        &mut self,
        request: &ChartRollRequest,
        oracle: &O,
        rng: &mut R,
        out: &mut W,
    ) -> OracleResult<RollOutcome>
    where
        O: Oracle,
        R: Rng + ?Sized,
        W: Write,
    {
        let chaos = effective_chaos(request.chaos, self.game.as_ref(), &self.config)?;
        let odds = match effective_odds(request.odds.as_deref(), self.game.as_ref(), &self.config)?
        {
            OddsChoice::Level(level) => level,
            OddsChoice::ListRequested => return Ok(RollOutcome::ListRequested),
        };
        self.check_message(&request.message)?;

        let result = oracle.consult(odds, chaos, rng);
        let text = format!("{} (C:{}) -> {result}", request.message, chaos.user())
            .trim()
            .to_string();
        self.record(text, out).map(RollOutcome::Rolled)
    }

    /// Roll 4dF, optionally with a skill and against a difficulty.
    ///
    /// `opposed` only has an effect together with a difficulty.
    pub fn roll_fate_dice<R, W>(
        &mut self,
        request: &FateRollRequest,
        rng: &mut R,
        out: &mut W,
    ) -> OracleResult<RollRecord>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        self.check_message(&request.message)?;

        let mut roll = FateRoll::roll(rng);
        if let Some(skill) = request.skill {
            roll = roll.with_modifier(RollModifier::skill(skill));
        }
        let opposition = match request.difficulty {
            None => Opposition::None,
            Some(difficulty) if request.opposed => Opposition::Opposed {
                difficulty,
                defender: FateRoll::roll(rng),
            },
            Some(difficulty) => Opposition::Fixed(difficulty),
        };
        let described = describe_fate_roll(&roll, request.skill, &opposition);
        let text = if request.message.trim().is_empty() {
            format!("4dF {described}")
        } else {
            format!("{} | 4dF {described}", request.message)
        };
        self.record(text, out)
    }

    fn check_message(&self, message: &str) -> OracleResult<()> {
        if message.chars().count() > self.config.max_message_len {
            return Err(OracleError::MessageTooLong {
                max: self.config.max_message_len,
            });
        }
        Ok(())
    }

    /// Print the line, then persist it. A failed append is reported after the
    /// line has already been shown.
    fn record<W: Write>(&mut self, text: String, out: &mut W) -> OracleResult<RollRecord> {
        writeln!(out, "{text}")?;
        let entry = match &self.game {
            Some(game) => Some(self.store.append(game.id, LogKind::DiceRoll, &text)?),
            None => {
                tracing::debug!("no active game, roll not logged");
                None
            }
        };
        Ok(RollRecord { text, entry })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use mythic_core::{ChaosLevel, CoreError, CoreResult, GameDb, GameId, OddsLevel};
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::*;
    use crate::chart::{ChartAnswer, ChartResult, FateChart};

    /// Counts every draw so tests can assert that none happened.
    struct CountingRng {
        inner: StdRng,
        calls: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self {
                inner: StdRng::seed_from_u64(seed),
                calls: 0,
            }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.calls += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.calls += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.calls += 1;
            self.inner.fill_bytes(dst);
        }
    }

    #[derive(Default)]
    struct RecordingOracle {
        seen: Cell<Option<(OddsLevel, ChaosLevel)>>,
    }

    impl Oracle for RecordingOracle {
        fn consult<R: Rng + ?Sized>(
            &self,
            odds: OddsLevel,
            chaos: ChaosLevel,
            _rng: &mut R,
        ) -> ChartResult {
            self.seen.set(Some((odds, chaos)));
            ChartResult {
                answer: ChartAnswer::Yes,
                roll: 1,
                target: 50,
                event: None,
            }
        }
    }

    struct FailingStore;

    impl LogStore for FailingStore {
        fn append(&mut self, _: GameId, _: LogKind, _: &str) -> CoreResult<LogEntry> {
            Err(CoreError::Io(std::io::Error::other("disk full")))
        }

        fn recent_entries(&self, _: GameId, _: usize) -> Vec<LogEntry> {
            Vec::new()
        }
    }

    fn db_with_game(chaos_internal: u8) -> (GameDb, Game) {
        let mut db = GameDb::in_memory();
        let game = db
            .create_game("Test", ChaosLevel::from_internal(chaos_internal).unwrap())
            .unwrap();
        (db, game)
    }

    fn chart_request(message: &str) -> ChartRollRequest {
        ChartRollRequest {
            message: message.to_string(),
            ..Default::default()
        }
    }

    fn rolled(outcome: RollOutcome) -> RollRecord {
        match outcome {
            RollOutcome::Rolled(record) => record,
            RollOutcome::ListRequested => panic!("expected a roll"),
        }
    }

    #[test]
    fn stored_chaos_shows_user_value() {
        let (mut db, game) = db_with_game(3);
        let mut session = Session::new(&mut db, Some(game));
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(42);
        let record = rolled(
            session
                .roll_on_chart(&chart_request("Is it locked?"), &FateChart, &mut rng, &mut out)
                .unwrap(),
        );
        assert!(record.text.starts_with("Is it locked? (C:4) -> "), "{}", record.text);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", record.text));
    }

    #[test]
    fn explicit_chaos_overrides_game() {
        let (mut db, game) = db_with_game(3);
        let mut session = Session::new(&mut db, Some(game));
        let request = ChartRollRequest {
            message: "Q".into(),
            chaos: Some(9),
            odds: Some("likely".into()),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let record = rolled(
            session
                .roll_on_chart(&request, &FateChart, &mut rng, &mut Vec::new())
                .unwrap(),
        );
        assert!(record.text.starts_with("Q (C:9) -> "));
    }

    #[test]
    fn empty_message_is_trimmed() {
        let mut db = GameDb::in_memory();
        let mut session = Session::new(&mut db, None);
        let mut rng = StdRng::seed_from_u64(3);
        let record = rolled(
            session
                .roll_on_chart(&chart_request(""), &FateChart, &mut rng, &mut Vec::new())
                .unwrap(),
        );
        assert!(record.text.starts_with("(C:5) -> "), "{}", record.text);
    }

    #[test]
    fn oversize_message_draws_nothing() {
        let (mut db, game) = db_with_game(4);
        let id = game.id;
        let mut session = Session::new(&mut db, Some(game));
        let mut rng = CountingRng::new(0);
        let mut out = Vec::new();
        let long = "x".repeat(257);

        let err = session
            .roll_on_chart(&chart_request(&long), &FateChart, &mut rng, &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "message cannot be longer than 256 characters");

        let fate = FateRollRequest {
            message: long,
            ..Default::default()
        };
        assert!(session.roll_fate_dice(&fate, &mut rng, &mut out).is_err());

        assert_eq!(rng.calls, 0);
        assert!(out.is_empty());
        assert_eq!(db.entry_count(id), 0);
    }

    #[test]
    fn message_at_limit_is_accepted() {
        let mut db = GameDb::in_memory();
        let mut session = Session::new(&mut db, None);
        let mut rng = CountingRng::new(0);
        let request = chart_request(&"x".repeat(256));
        assert!(
            session
                .roll_on_chart(&request, &FateChart, &mut rng, &mut Vec::new())
                .is_ok()
        );
        assert!(rng.calls > 0);
    }

    #[test]
    fn invalid_odds_draws_nothing() {
        let (mut db, game) = db_with_game(4);
        let id = game.id;
        let mut session = Session::new(&mut db, Some(game));
        let mut rng = CountingRng::new(0);
        let request = ChartRollRequest {
            message: "Q".into(),
            chaos: None,
            odds: Some("bogus-token".into()),
        };
        let err = session
            .roll_on_chart(&request, &FateChart, &mut rng, &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, OracleError::InvalidOdds { .. }));
        assert_eq!(rng.calls, 0);
        assert_eq!(db.entry_count(id), 0);
    }

    #[test]
    fn list_request_does_not_roll() {
        let mut db = GameDb::in_memory();
        let mut session = Session::new(&mut db, None);
        let mut rng = CountingRng::new(0);
        let request = ChartRollRequest {
            odds: Some("?".into()),
            ..Default::default()
        };
        let outcome = session
            .roll_on_chart(&request, &FateChart, &mut rng, &mut Vec::new())
            .unwrap();
        assert_eq!(outcome, RollOutcome::ListRequested);
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn no_game_prints_without_logging() {
        let mut db = GameDb::in_memory();
        let mut session = Session::new(&mut db, None);
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(9);
        let record = session
            .roll_fate_dice(&FateRollRequest::default(), &mut rng, &mut out)
            .unwrap();
        assert!(record.entry.is_none());
        assert!(record.text.starts_with("4dF { "));
        assert!(!out.is_empty());
    }

    #[test]
    fn repeated_rolls_make_distinct_entries() {
        let (mut db, game) = db_with_game(4);
        let id = game.id;
        let mut session = Session::new(&mut db, Some(game));
        let mut rng = StdRng::seed_from_u64(5);
        let request = chart_request("Same question");
        let first = rolled(
            session
                .roll_on_chart(&request, &FateChart, &mut rng, &mut Vec::new())
                .unwrap(),
        );
        let second = rolled(
            session
                .roll_on_chart(&request, &FateChart, &mut rng, &mut Vec::new())
                .unwrap(),
        );
        let (a, b) = (first.entry.unwrap(), second.entry.unwrap());
        assert_ne!(a.id, b.id);
        assert!(a.created_at <= b.created_at);
        assert_eq!(db.entry_count(id), 2);
        let recent = db.recent_entries(id, 2);
        assert!(recent.iter().all(|e| e.kind == LogKind::DiceRoll));
    }

    #[test]
    fn fate_roll_with_difficulty_and_message() {
        let (mut db, game) = db_with_game(4);
        let mut session = Session::new(&mut db, Some(game));
        let mut rng = StdRng::seed_from_u64(11);
        let request = FateRollRequest {
            message: "Climb the wall".into(),
            skill: Some(2),
            difficulty: Some(3),
            opposed: false,
        };
        let record = session
            .roll_fate_dice(&request, &mut rng, &mut Vec::new())
            .unwrap();
        assert!(record.text.starts_with("Climb the wall | 4dF { "));
        assert!(record.text.contains("; skill 2 -> "));
        assert!(record.text.contains(" vs diff 3: "));
        assert_eq!(record.entry.unwrap().text, record.text);
    }

    /// Every draw is zero, so every fate die lands on its lowest face.
    struct LowestFaceRng;

    impl RngCore for LowestFaceRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn fate_roll_line_below_difficulty() {
        let (mut db, game) = db_with_game(4);
        let id = game.id;
        let mut session = Session::new(&mut db, Some(game));
        let request = FateRollRequest {
            message: "Sneak".into(),
            skill: Some(5),
            difficulty: Some(2),
            opposed: false,
        };
        let mut out = Vec::new();
        let record = session
            .roll_fate_dice(&request, &mut LowestFaceRng, &mut out)
            .unwrap();
        let expected = "Sneak | 4dF { -1, -1, -1, -1 } -4; skill 5 -> 1 vs diff 2: Fail (-1)";
        assert_eq!(record.text, expected);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{expected}\n"));
        assert_eq!(db.recent_entries(id, 1)[0].text, expected);
    }

    #[test]
    fn opposed_fate_roll_mentions_opponent() {
        let mut db = GameDb::in_memory();
        let mut session = Session::new(&mut db, None);
        let mut rng = StdRng::seed_from_u64(12);
        let request = FateRollRequest {
            difficulty: Some(1),
            opposed: true,
            ..Default::default()
        };
        let record = session
            .roll_fate_dice(&request, &mut rng, &mut Vec::new())
            .unwrap();
        assert!(record.text.contains(" vs Opponent ({ "), "{}", record.text);
        assert!(record.text.contains("; skill 1 -> "));
    }

    #[test]
    fn stored_odds_are_used_by_default() {
        let (mut db, game) = db_with_game(2);
        let game = db.set_odds(game.id, Some(OddsLevel::VeryLikely)).unwrap();
        let mut session = Session::new(&mut db, Some(game));
        let oracle = RecordingOracle::default();
        let mut rng = StdRng::seed_from_u64(2);
        let record = rolled(
            session
                .roll_on_chart(&chart_request("Q"), &oracle, &mut rng, &mut Vec::new())
                .unwrap(),
        );
        assert_eq!(record.text, "Q (C:3) -> Yes");
        let (odds, chaos) = oracle.seen.get().unwrap();
        assert_eq!(odds, OddsLevel::VeryLikely);
        assert_eq!(chaos.internal(), 2);
    }

    #[test]
    fn append_failure_surfaces_after_print() {
        let game = Game::new("Orphan", ChaosLevel::DEFAULT);
        let mut store = FailingStore;
        let mut session = Session::new(&mut store, Some(game));
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(4);
        let err = session
            .roll_fate_dice(&FateRollRequest::default(), &mut rng, &mut out)
            .unwrap_err();
        assert!(matches!(err, OracleError::Core(CoreError::Io(_))));
        assert!(String::from_utf8(out).unwrap().starts_with("4dF "));
    }

    #[test]
    fn custom_message_limit() {
        let mut db = GameDb::in_memory();
        let mut session =
            Session::new(&mut db, None).with_config(RollConfig::default().with_max_message_len(4));
        let mut rng = CountingRng::new(0);
        let err = session
            .roll_on_chart(&chart_request("hello"), &FateChart, &mut rng, &mut Vec::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "message cannot be longer than 4 characters");
    }
}
