pub mod descriptor;
pub mod game;
pub mod log;
pub mod roll;
pub mod scene;
pub mod shell;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use mythic_core::{Game, GameDb, LogEntry};
use mythic_oracle::export::TIMESTAMP_FORMAT;
use mythic_oracle::{OracleError, format_odds_lines};

/// Every command, shared by the command line and the interactive shell.
#[derive(Subcommand)]
pub enum Commands {
    /// Roll on the fate chart using the game's chaos factor
    ///
    /// Use -o ? to list the available odds.
    Roll(RollArgs),

    /// Roll four Fate/Fudge dice (4dF)
    #[command(visible_alias = "rf")]
    Rollfate(FateArgs),

    /// Create, select, and inspect games
    Game {
        #[command(subcommand)]
        action: Option<GameCommand>,
    },

    /// Show or edit the current game's story log
    Log(LogArgs),

    /// Start, end, and inspect scenes
    Scene {
        #[command(subcommand)]
        action: SceneCommand,
    },

    /// Draw words from a meaning table, or `descriptor list`
    Descriptor {
        /// Table name, or "list"
        table: String,

        /// Number of words to draw (1-20)
        count: Option<i64>,
    },

    /// Run commands interactively
    Shell,
}

#[derive(Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct RollArgs {
    /// The question being asked (optional)
    pub message: Vec<String>,

    /// Chaos factor for this roll (1-9)
    #[arg(short, long, allow_negative_numbers = true)]
    pub chaos: Option<i64>,

    /// Odds name or number (0-8); ? lists them
    #[arg(short, long)]
    pub odds: Option<String>,

    #[command(subcommand)]
    pub fate: Option<RollSubcommand>,
}

#[derive(Subcommand)]
pub enum RollSubcommand {
    /// Roll four Fate/Fudge dice (4dF)
    #[command(visible_alias = "rf")]
    Rollfate(FateArgs),
}

#[derive(Args)]
pub struct FateArgs {
    /// What the roll is for (optional)
    pub message: Vec<String>,

    /// Skill value added to the roll
    #[arg(short, long, allow_negative_numbers = true)]
    pub skill: Option<i8>,

    /// Difficulty to compare the total against
    #[arg(short, long, allow_negative_numbers = true)]
    pub difficulty: Option<i32>,

    /// Add the defender's own 4dF to the difficulty
    #[arg(short, long)]
    pub opposed: bool,
}

#[derive(Subcommand)]
pub enum GameCommand {
    /// Create a game (or select it if it already exists)
    Create {
        /// Game name
        #[arg(required = true)]
        name: Vec<String>,

        /// Starting chaos factor (1-9)
        #[arg(short, long, default_value_t = 5)]
        chaos: i64,
    },

    /// Select an existing game
    Load {
        /// Game name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// List all games
    List,

    /// Show the current game, its themes and its latest entries
    Info,

    /// Roll a plot point for one of the current game's themes
    #[command(visible_aliases = ["pp", "plot"])]
    Plotpoint {
        /// Also show the theme, the roll and the chart row
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show or set the current game's chaos factor
    Chaos {
        /// New chaos factor (1-9)
        #[arg(allow_negative_numbers = true)]
        value: Option<i64>,
    },

    /// Show or set the current game's default odds
    Odds {
        /// Odds name or number (0-8); ? lists them
        token: Option<String>,

        /// Forget the stored odds and fall back to fifty fifty
        #[arg(long, conflicts_with = "token")]
        clear: bool,
    },

    /// Delete a game and its log
    Remove {
        /// Game name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Export a game to Markdown
    Export {
        /// Game name (default: the current game)
        name: Vec<String>,

        /// Output file (default: <game name>.md)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct LogArgs {
    /// Number of entries to show (default 20)
    pub count: Option<i64>,

    #[command(subcommand)]
    pub action: Option<LogCommand>,
}

#[derive(Subcommand)]
pub enum LogCommand {
    /// Print the latest entries, oldest first
    Print {
        /// Number of entries to show (default 20)
        count: Option<i64>,
    },

    /// Add a story entry
    Add {
        /// Entry text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Remove the latest entries
    Remove {
        /// Number of entries to remove (default 1)
        count: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum SceneCommand {
    /// Start a scene and roll the chaos die
    Start {
        /// What you expect the scene to be
        #[arg(required = true)]
        concept: Vec<String>,
    },

    /// End the current scene
    End {
        /// The scene went well: chaos goes down one
        #[arg(long, conflicts_with = "badly")]
        well: bool,

        /// The scene went badly: chaos goes up one
        #[arg(long)]
        badly: bool,
    },

    /// Show the current scene
    Status,
}

/// Run one parsed command against the database.
pub fn dispatch(db: &mut GameDb, command: Commands) -> Result<(), String> {
    match command {
        Commands::Roll(args) => roll::run(db, args),
        Commands::Rollfate(args) => roll::run_fate(db, args),
        Commands::Game { action } => game::run(db, action),
        Commands::Log(args) => log::run(db, args),
        Commands::Scene { action } => scene::run(db, action),
        Commands::Descriptor { table, count } => descriptor::run(&table, count),
        Commands::Shell => shell::run(db),
    }
}

/// The active game, or the error every game-bound command reports.
fn active_game(db: &GameDb) -> Result<Game, String> {
    db.active_game()
        .cloned()
        .ok_or_else(|| "no game selected. Use 'game load <name>' to select one".to_string())
}

/// Turn an odds failure into the command error, listing candidates first
/// when the token was ambiguous.
fn odds_error(err: OracleError) -> String {
    if let OracleError::AmbiguousOdds { candidates, .. } = &err {
        println!("Did you mean one of these odds?");
        print!("{}", format_odds_lines(candidates));
    }
    err.to_string()
}

fn print_odds_table() {
    println!("Available odds:");
    print!("{}", format_odds_lines(mythic_core::OddsLevel::all()));
}

/// Validate an optional positive count.
fn positive_count(count: Option<i64>, default: usize) -> Result<usize, String> {
    match count {
        None => Ok(default),
        Some(n) if n > 0 => usize::try_from(n).map_err(|e| e.to_string()),
        Some(_) => Err("count must be a positive number".into()),
    }
}

/// `YYYY-MM-DD HH:MM:SS - text` in local time.
fn format_entry(entry: &LogEntry) -> String {
    let local = entry.created_at.with_timezone(&chrono::Local);
    format!("{} - {}", local.format(TIMESTAMP_FORMAT), entry.text)
}
