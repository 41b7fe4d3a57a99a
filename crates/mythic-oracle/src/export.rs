//! Markdown export of a game's story log.

use mythic_core::{Game, LogEntry, LogKind};

/// Timestamp format used in exports and log listings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a game and its entries (oldest first) as Markdown.
pub fn render_markdown(game: &Game, entries: &[&LogEntry]) -> String {
    let mut out = format!("# {}\n\n", game.name);
    out.push_str(&format!("- **Chaos**: {}\n", game.chaos));
    if let Some(odds) = game.odds {
        out.push_str(&format!("- **Default odds**: {odds}\n"));
    }
    if !game.themes.is_empty() {
        let themes: Vec<String> = game.themes.iter().map(ToString::to_string).collect();
        out.push_str(&format!("- **Themes**: {}\n", themes.join(", ")));
    }
    out.push_str(&format!(
        "- **Created**: {}\n\n## Log\n\n",
        game.created_at.format(TIMESTAMP_FORMAT)
    ));
    if entries.is_empty() {
        out.push_str("*No entries.*\n");
        return out;
    }
    for entry in entries {
        let stamp = entry.created_at.format(TIMESTAMP_FORMAT);
        match entry.kind {
            LogKind::SceneStart => out.push_str(&format!("\n### {}\n\n", entry.text)),
            LogKind::SceneEnd => out.push_str(&format!("\n*{}*\n\n", entry.text)),
            LogKind::DiceRoll => out.push_str(&format!("- `{stamp}` **Roll**: {}\n", entry.text)),
            LogKind::Story => out.push_str(&format!("- `{stamp}` {}\n", entry.text)),
        }
    }
    out
}

/// A filesystem-safe file stem for a game name.
pub fn export_file_stem(name: &str) -> String {
    let replaced: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            other => other,
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
