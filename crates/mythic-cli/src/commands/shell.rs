use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::Colorize;
use mythic_core::GameDb;

use super::Commands;

/// One shell line, parsed without a binary name.
#[derive(Parser)]
#[command(name = "", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

fn prompt(db: &GameDb) -> String {
    match db.active_game() {
        Some(game) => format!("{} (C:{})> ", game.name, game.chaos),
        None => "shell> ".to_string(),
    }
}

pub fn run(db: &mut GameDb) -> Result<(), String> {
    println!("  {} Type 'help' for commands, 'quit' to exit.", "Mythic shell.".bold());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", prompt(db));
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.first() {
            None => continue,
            Some(&("quit" | "exit")) => break,
            Some(_) => {}
        }

        let parsed = match ShellLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Help and usage errors both print through clap.
                let _ = e.print();
                continue;
            }
        };
        if let Commands::Shell = parsed.command {
            eprintln!("{}", "already in a shell".yellow());
            continue;
        }
        tracing::debug!(line = line.trim(), "shell command");
        if let Err(e) = super::dispatch(db, parsed.command) {
            eprintln!("error: {e}");
        }
    }

    Ok(())
}
