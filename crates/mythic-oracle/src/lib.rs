//! The Mythic roll pipeline.
//!
//! Decides which chaos factor and odds level a roll uses, resolves typed odds
//! tokens, consults the fate chart or rolls fate dice, and records the result
//! line in the active game's log. Also hosts the smaller table-driven pieces:
//! the scene chaos die, random events, meaning tables, plot points, and
//! Markdown export.

pub mod chart;
pub mod check;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod odds;
pub mod plot;
pub mod precedence;
pub mod scene;
pub mod session;
pub mod tables;

pub use chart::{ChartAnswer, ChartResult, FateChart, Oracle};
pub use check::{CheckLabel, Opposition, describe_fate_roll};
pub use config::RollConfig;
pub use error::{OracleError, OracleResult};
pub use event::{EventFocus, RandomEvent, generate_random_event};
pub use odds::{OddsResolution, format_odds_lines, normalize_odds_input, resolve_odds};
pub use plot::{
    PLOT_CHART, PlotPoint, PlotPointRoll, lookup_plot_point, pick_theme, random_themes,
    roll_plot_point,
};
pub use precedence::{OddsChoice, effective_chaos, effective_odds};
pub use scene::{ChaosDieCheck, SceneVerdict, end_scene, roll_chaos_die, start_scene};
pub use session::{ChartRollRequest, FateRollRequest, RollOutcome, RollRecord, Session};
pub use tables::{MeaningTable, TABLES, find_table};
