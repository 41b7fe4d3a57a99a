//! Plot points.
//!
//! A game ranks the five story themes when it is created. Asking for a plot
//! point rolls a d10 to pick a theme (higher ranked themes come up more
//! often), then a d100 on that theme's column of the plot chart.

use std::fmt;

use mythic_core::Theme;
use rand::Rng;
use rand::seq::SliceRandom;

/// One row of the plot chart.
///
/// Each theme column holds the highest d100 roll that lands on this row, or
/// 0 when the row is not on that theme's column. Non-zero bounds increase
/// down every column and the last row closes each column at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPoint {
    /// Short name.
    pub name: &'static str,
    /// What happens.
    pub description: &'static str,
    /// Upper bound in the Action column.
    pub action: u8,
    /// Upper bound in the Tension column.
    pub tension: u8,
    /// Upper bound in the Mystery column.
    pub mystery: u8,
    /// Upper bound in the Social column.
    pub social: u8,
    /// Upper bound in the Personal column.
    pub personal: u8,
}

impl PlotPoint {
    /// This row's upper bound in a theme's column (0 = not on the column).
    pub fn upper(&self, theme: Theme) -> u8 {
        match theme {
            Theme::Action => self.action,
            Theme::Tension => self.tension,
            Theme::Mystery => self.mystery,
            Theme::Social => self.social,
            Theme::Personal => self.personal,
        }
    }
}

impl fmt::Display for PlotPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

const fn row(
    name: &'static str,
    description: &'static str,
    [action, tension, mystery, social, personal]: [u8; 5],
) -> PlotPoint {
    PlotPoint {
        name,
        description,
        action,
        tension,
        mystery,
        social,
        personal,
    }
}

/// The plot chart, top to bottom.
pub const PLOT_CHART: &[PlotPoint] = &[
    row(
        "Conclusion",
        "A thread in play reaches its end.",
        [8, 8, 8, 8, 8],
    ),
    row(
        "None",
        "Nothing new; keep going.",
        [24, 24, 24, 24, 24],
    ),
    row(
        "Ambush",
        "Someone strikes before the characters are ready.",
        [34, 30, 0, 0, 0],
    ),
    row(
        "Chase",
        "Someone or something has to be caught or escaped.",
        [44, 0, 0, 0, 0],
    ),
    row(
        "Fight breaks out",
        "Tempers snap and blows are traded.",
        [54, 36, 0, 30, 0],
    ),
    row(
        "Injury",
        "Someone is hurt and slowed down.",
        [62, 42, 0, 0, 30],
    ),
    row(
        "Sudden danger",
        "The ground, the weather or a beast turns on them.",
        [70, 50, 30, 0, 0],
    ),
    row(
        "Clue discovered",
        "A detail points somewhere new.",
        [74, 56, 42, 0, 0],
    ),
    row(
        "Secret revealed",
        "Something hidden comes into the open.",
        [0, 62, 54, 38, 38],
    ),
    row(
        "Strange occurrence",
        "Something happens that should not be possible.",
        [0, 68, 66, 0, 0],
    ),
    row(
        "Betrayal",
        "A trusted figure acts against them.",
        [78, 74, 72, 48, 48],
    ),
    row(
        "Rival appears",
        "Someone wants the same thing.",
        [84, 80, 0, 56, 54],
    ),
    row(
        "Alliance offered",
        "A group offers help at a price.",
        [0, 0, 0, 66, 62],
    ),
    row(
        "Favor called in",
        "An old debt comes due.",
        [0, 0, 0, 74, 70],
    ),
    row(
        "Personal loss",
        "Something a character holds dear is lost.",
        [88, 86, 78, 0, 80],
    ),
    row(
        "Old wound reopens",
        "The past catches up with a character.",
        [0, 0, 0, 80, 88],
    ),
    row(
        "Unexpected ally",
        "Help arrives from an unlikely place.",
        [94, 92, 88, 90, 94],
    ),
    row(
        "Twist of fate",
        "Everything the characters assumed changes.",
        [100, 100, 100, 100, 100],
    ),
];

/// The row a d100 roll lands on in a theme's column. `None` for rolls
/// outside 1-100.
pub fn lookup_plot_point(roll: u32, theme: Theme) -> Option<&'static PlotPoint> {
    if !(1..=100).contains(&roll) {
        return None;
    }
    PLOT_CHART.iter().find(|point| {
        let upper = point.upper(theme);
        upper != 0 && roll <= u32::from(upper)
    })
}

/// A fresh random theme ranking for a new game.
pub fn random_themes<R: Rng + ?Sized>(rng: &mut R) -> Vec<Theme> {
    let mut themes = Theme::default_ranking();
    themes.shuffle(rng);
    themes
}

/// Pick a theme from a ranking with a d10: 1-4 the first, 5-7 the second,
/// 8-9 the third, 10 the fourth or fifth. An empty ranking falls back to the
/// default one; a short ranking uses its last theme for the missing slots.
pub fn pick_theme<R: Rng + ?Sized>(themes: &[Theme], rng: &mut R) -> Theme {
    let themes = if themes.is_empty() {
        Theme::all()
    } else {
        themes
    };
    let slot = match rng.random_range(1..=10u32) {
        1..=4 => 0,
        5..=7 => 1,
        8 | 9 => 2,
        _ => rng.random_range(3..=4usize),
    };
    themes[slot.min(themes.len() - 1)]
}

/// A rolled plot point with the numbers that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPointRoll {
    /// The theme column used.
    pub theme: Theme,
    /// The d100 roll.
    pub roll: u32,
    /// The row it landed on.
    pub point: &'static PlotPoint,
}

/// Pick a theme from the ranking and roll on its column.
pub fn roll_plot_point<R: Rng + ?Sized>(themes: &[Theme], rng: &mut R) -> PlotPointRoll {
    let theme = pick_theme(themes, rng);
    let roll: u32 = rng.random_range(1..=100);
    // The last row closes every column, so the fallback is never reached.
    let point = lookup_plot_point(roll, theme).unwrap_or(&PLOT_CHART[PLOT_CHART.len() - 1]);
    tracing::debug!(%theme, roll, point = point.name, "rolled plot point");
    PlotPointRoll { theme, roll, point }
}
