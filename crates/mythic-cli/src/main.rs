//! CLI frontend for solo Mythic games.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use mythic_core::GameDb;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use commands::Commands;

#[derive(Parser)]
#[command(
    name = "mythic",
    about = "Mythic: a companion for solo roleplaying games",
    version,
    propagate_version = true
)]
struct Cli {
    /// Path to the game database file
    #[arg(long, global = true, env = "MYTHIC_DATA", default_value = "data/games.json")]
    data: PathBuf,

    /// Show debug diagnostics on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Diagnostics go to stderr so roll output on stdout stays clean.
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MYTHIC_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = GameDb::open(&cli.data)
        .map_err(|e| format!("failed to open {}: {e}", cli.data.display()))
        .and_then(|mut db| commands::dispatch(&mut db, cli.command));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
