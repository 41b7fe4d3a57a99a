use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use mythic_core::game::{sanitize_game_name, validate_game_name};
use mythic_core::{ChaosLevel, CoreError, Game, GameDb, LogStore, Theme};
use mythic_oracle::export::{export_file_stem, render_markdown};
use mythic_oracle::{OddsChoice, RollConfig, effective_odds, random_themes, roll_plot_point};

use super::GameCommand;

/// Entries shown by `game info`.
const INFO_ENTRIES: usize = 5;

pub fn run(db: &mut GameDb, action: Option<GameCommand>) -> Result<(), String> {
    match action {
        None => show(db),
        Some(GameCommand::Create { name, chaos }) => create(db, &name.join(" "), chaos),
        Some(GameCommand::Load { name }) => load(db, &name.join(" ")),
        Some(GameCommand::List) => list(db),
        Some(GameCommand::Info) => info(db),
        Some(GameCommand::Plotpoint { verbose }) => plotpoint(db, verbose),
        Some(GameCommand::Chaos { value }) => chaos(db, value),
        Some(GameCommand::Odds { token, clear }) => odds(db, token.as_deref(), clear),
        Some(GameCommand::Remove { name }) => remove(db, &name.join(" ")),
        Some(GameCommand::Export { name, out, force }) => export(db, &name.join(" "), out, force),
    }
}

fn show(db: &GameDb) -> Result<(), String> {
    match db.active_game() {
        Some(game) => println!("Current game: {} (chaos {})", game.name.bold(), game.chaos),
        None => println!("No game selected. Use 'game create <name>' or 'game load <name>'."),
    }
    Ok(())
}

fn create(db: &mut GameDb, raw_name: &str, chaos: i64) -> Result<(), String> {
    let name = sanitize_game_name(raw_name);
    validate_game_name(&name).map_err(|e| e.to_string())?;
    let chaos = ChaosLevel::from_user(chaos).map_err(|e| e.to_string())?;

    if let Some(existing) = db.find_game(&name) {
        let id = existing.id;
        db.set_active(Some(id)).map_err(|e| e.to_string())?;
        println!("Game '{name}' already exists; selected it.");
        return Ok(());
    }

    let game = Game::new(name, chaos).with_themes(random_themes(&mut rand::rng()));
    let game = db.insert_game(game).map_err(|e| e.to_string())?;
    println!("Created game '{}' (chaos {})", game.name, game.chaos);
    println!("Themes: {}", theme_list(&game.themes));
    Ok(())
}

fn find(db: &GameDb, raw_name: &str) -> Result<Game, String> {
    let name = sanitize_game_name(raw_name);
    db.find_game(&name)
        .cloned()
        .ok_or_else(|| CoreError::GameNotFound(name).to_string())
}

fn load(db: &mut GameDb, raw_name: &str) -> Result<(), String> {
    let game = find(db, raw_name)?;
    db.set_active(Some(game.id)).map_err(|e| e.to_string())?;
    tracing::info!(game = %game.name, "selected game");
    println!("Loaded game '{}' (chaos {})", game.name, game.chaos);
    Ok(())
}

fn list(db: &GameDb) -> Result<(), String> {
    let games: Vec<&Game> = db.games().collect();
    if games.is_empty() {
        println!("  No games found.");
        return Ok(());
    }

    let active = db.active_game().map(|g| g.id);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Name", "Chaos", "Odds", "Entries"]);
    for game in &games {
        let marker = if Some(game.id) == active { "*" } else { "" };
        let odds = game
            .odds
            .map_or_else(|| "-".to_string(), |o| o.to_string());
        table.add_row(vec![
            marker.to_string(),
            game.name.clone(),
            game.chaos.to_string(),
            odds,
            db.entry_count(game.id).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} games", games.len());
    Ok(())
}

fn info(db: &GameDb) -> Result<(), String> {
    let game = super::active_game(db)?;
    println!("{}", game.name.bold());
    println!("  Chaos:   {}", game.chaos);
    match game.odds {
        Some(odds) => println!("  Odds:    {odds}"),
        None => println!("  Odds:    {} (default)", RollConfig::default().fallback_odds),
    }
    println!("  Themes:  {}", theme_list(&game.themes));
    println!("  Entries: {}", db.entry_count(game.id));
    if let Some(scene) = db.active_scene(game.id) {
        println!("  Scene:   {} ({})", scene.concept, scene.scene_type);
    }

    let mut recent = db.recent_entries(game.id, INFO_ENTRIES);
    if recent.is_empty() {
        return Ok(());
    }
    recent.reverse();
    println!();
    println!("{}", "Recent entries:".bold());
    for entry in &recent {
        println!("  {}", super::format_entry(entry));
    }
    Ok(())
}

fn theme_list(themes: &[Theme]) -> String {
    themes
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {t}", i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

fn plotpoint(db: &GameDb, verbose: bool) -> Result<(), String> {
    let game = super::active_game(db)?;
    let rolled = roll_plot_point(&game.themes, &mut rand::rng());
    println!("{}", rolled.point);
    if !verbose {
        return Ok(());
    }

    println!();
    println!("{} {}  {} {}", "Theme:".bold(), rolled.theme, "Roll:".bold(), rolled.roll);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(Theme::all().iter().map(ToString::to_string).collect::<Vec<_>>());
    table.add_row(
        Theme::all()
            .iter()
            .map(|&t| match rolled.point.upper(t) {
                0 => "-".to_string(),
                upper => upper.to_string(),
            })
            .collect::<Vec<_>>(),
    );
    println!("{table}");
    Ok(())
}

fn chaos(db: &mut GameDb, value: Option<i64>) -> Result<(), String> {
    let game = super::active_game(db)?;
    let Some(value) = value else {
        println!("Chaos factor for '{}': {}", game.name, game.chaos);
        return Ok(());
    };
    let chaos = ChaosLevel::from_user(value).map_err(|e| e.to_string())?;
    db.set_chaos(game.id, chaos).map_err(|e| e.to_string())?;
    println!("Chaos factor for '{}': {} -> {}", game.name, game.chaos, chaos);
    Ok(())
}

fn odds(db: &mut GameDb, token: Option<&str>, clear: bool) -> Result<(), String> {
    let game = super::active_game(db)?;
    if clear {
        db.set_odds(game.id, None).map_err(|e| e.to_string())?;
        println!("Default odds for '{}' cleared", game.name);
        return Ok(());
    }
    let Some(token) = token else {
        match game.odds {
            Some(odds) => println!("Default odds for '{}': {odds}", game.name),
            None => println!("Default odds for '{}': not set", game.name),
        }
        return Ok(());
    };

    let level = match effective_odds(Some(token), None, &RollConfig::default()) {
        Ok(OddsChoice::Level(level)) => level,
        Ok(OddsChoice::ListRequested) => {
            super::print_odds_table();
            return Ok(());
        }
        Err(e) => return Err(super::odds_error(e)),
    };
    db.set_odds(game.id, Some(level)).map_err(|e| e.to_string())?;
    println!("Default odds for '{}': {level}", game.name);
    Ok(())
}

fn remove(db: &mut GameDb, raw_name: &str) -> Result<(), String> {
    let game = find(db, raw_name)?;
    let removed = db.remove_game(game.id).map_err(|e| e.to_string())?;
    println!("Removed game '{}' and {removed} log entries", game.name);
    Ok(())
}

fn export(db: &GameDb, raw_name: &str, out: Option<PathBuf>, force: bool) -> Result<(), String> {
    let game = if raw_name.trim().is_empty() {
        db.active_game()
            .cloned()
            .ok_or("no game name specified and no current game selected")?
    } else {
        find(db, raw_name)?
    };

    let path = out.unwrap_or_else(|| PathBuf::from(format!("{}.md", export_file_stem(&game.name))));
    if path.exists() && !force {
        return Err(format!(
            "file '{}' already exists; use --force to overwrite",
            path.display()
        ));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
    }

    let markdown = render_markdown(&game, &db.entries(game.id));
    fs::write(&path, markdown).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    println!("Exported game '{}' to {}", game.name, path.display());
    Ok(())
}
