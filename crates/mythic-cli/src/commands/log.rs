use mythic_core::{GameDb, LogKind, LogStore};

use super::{LogArgs, LogCommand};

/// Entries shown by `log` without a count.
const DEFAULT_ENTRIES: usize = 20;

pub fn run(db: &mut GameDb, args: LogArgs) -> Result<(), String> {
    match args.action {
        None => print(db, args.count),
        Some(LogCommand::Print { count }) => print(db, count),
        Some(LogCommand::Add { text }) => add(db, &text.join(" ")),
        Some(LogCommand::Remove { count }) => remove(db, count),
    }
}

fn print(db: &GameDb, count: Option<i64>) -> Result<(), String> {
    let limit = super::positive_count(count, DEFAULT_ENTRIES)?;
    let game = super::active_game(db)?;
    let mut entries = db.recent_entries(game.id, limit);
    if entries.is_empty() {
        println!("No log entries for '{}'.", game.name);
        return Ok(());
    }
    entries.reverse();
    for entry in &entries {
        println!("{}", super::format_entry(entry));
    }
    Ok(())
}

fn add(db: &mut GameDb, text: &str) -> Result<(), String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("log entry cannot be empty".into());
    }
    let game = super::active_game(db)?;
    db.append(game.id, LogKind::Story, text)
        .map_err(|e| format!("failed to save log entry: {e}"))?;
    println!("Added to '{}' log.", game.name);
    Ok(())
}

fn remove(db: &mut GameDb, count: Option<i64>) -> Result<(), String> {
    let wanted = super::positive_count(count, 1)?;
    let game = super::active_game(db)?;
    let removed = db
        .remove_last_entries(game.id, wanted)
        .map_err(|e| e.to_string())?;
    match removed {
        0 => println!("No log entries to remove."),
        n if n < wanted => println!("Only {n} log entries existed; removed all of them."),
        1 => println!("Removed 1 log entry."),
        n => println!("Removed {n} log entries."),
    }
    Ok(())
}
