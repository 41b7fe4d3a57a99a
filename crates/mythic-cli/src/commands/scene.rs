use colored::Colorize;
use mythic_core::GameDb;
use mythic_oracle::{SceneVerdict, end_scene, start_scene};

use super::SceneCommand;

pub fn run(db: &mut GameDb, action: SceneCommand) -> Result<(), String> {
    match action {
        SceneCommand::Start { concept } => start(db, &concept.join(" ")),
        SceneCommand::End { well, badly } => {
            let verdict = match (well, badly) {
                (true, _) => SceneVerdict::Well,
                (_, true) => SceneVerdict::Badly,
                _ => SceneVerdict::Neutral,
            };
            end(db, verdict)
        }
        SceneCommand::Status => status(db),
    }
}

fn start(db: &mut GameDb, concept: &str) -> Result<(), String> {
    let game = super::active_game(db)?;
    let (_, check) =
        start_scene(db, &game, concept, &mut rand::rng()).map_err(|e| e.to_string())?;
    println!(
        "Scene started: {} (chaos die {} vs chaos {})",
        check.scene_type.to_string().bold(),
        check.roll,
        game.chaos
    );
    println!("Expected scene: {concept}");
    if let Some(event) = &check.event {
        println!();
        println!("{} {event}", "Random event:".yellow());
    }
    Ok(())
}

fn end(db: &mut GameDb, verdict: SceneVerdict) -> Result<(), String> {
    let game = super::active_game(db)?;
    match end_scene(db, &game, verdict).map_err(|e| e.to_string())? {
        None => println!("No active scene to end."),
        Some(_) => {
            println!("Scene ended.");
            if let Some(chaos) = verdict.adjust(game.chaos) {
                println!("Chaos factor: {} -> {chaos}", game.chaos);
            }
        }
    }
    Ok(())
}

fn status(db: &GameDb) -> Result<(), String> {
    let game = super::active_game(db)?;
    let Some(scene) = db.active_scene(game.id) else {
        println!("No active scene.");
        return Ok(());
    };
    println!("{}", scene.concept.bold());
    println!("  Type:      {}", scene.scene_type);
    println!("  Chaos die: {}", scene.chaos_die_roll);
    if let Some(event) = &scene.event {
        println!("  Event:     {event}");
    }
    println!("  Chaos:     {}", game.chaos);
    Ok(())
}
