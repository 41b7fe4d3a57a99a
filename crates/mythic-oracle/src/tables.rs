//! Meaning and descriptor tables.
//!
//! Word lists the player interprets when the oracle produces a random event
//! or when they ask for inspiration with `descriptor`.

use rand::Rng;

use crate::error::{OracleError, OracleResult};

/// Most words a single `descriptor` draw may return.
pub const MAX_DRAW: usize = 20;

/// A named word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeaningTable {
    /// Lookup name, lowercase.
    pub name: &'static str,
    /// One-line description for `descriptor list`.
    pub summary: &'static str,
    /// The words.
    pub entries: &'static [&'static str],
}

impl MeaningTable {
    /// Pick one entry uniformly.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.entries[rng.random_range(0..self.entries.len())]
    }
}

const ACTIONS: &[&str] = &[
    "Abandon",
    "Accuse",
    "Advance",
    "Ambush",
    "Bargain",
    "Befriend",
    "Betray",
    "Block",
    "Break",
    "Capture",
    "Chase",
    "Conceal",
    "Confront",
    "Corrupt",
    "Defend",
    "Delay",
    "Deceive",
    "Demand",
    "Discover",
    "Escape",
    "Expose",
    "Follow",
    "Guard",
    "Heal",
    "Hunt",
    "Imprison",
    "Inspect",
    "Journey",
    "Lure",
    "Mend",
    "Negotiate",
    "Oppose",
    "Plead",
    "Protect",
    "Pursue",
    "Reveal",
    "Rescue",
    "Sabotage",
    "Seize",
    "Summon",
    "Threaten",
    "Trade",
    "Transform",
    "Uncover",
    "Warn",
    "Withdraw",
];

const SUBJECTS: &[&str] = &[
    "Alliance",
    "Ambition",
    "Ancestry",
    "Authority",
    "Bargain",
    "Burden",
    "Craft",
    "Debt",
    "Dream",
    "Enemy",
    "Faith",
    "Family",
    "Fear",
    "Fortune",
    "Grudge",
    "Guilt",
    "Home",
    "Honor",
    "Hope",
    "Hunger",
    "Illness",
    "Knowledge",
    "Law",
    "Legacy",
    "Lie",
    "Loyalty",
    "Map",
    "Memory",
    "Messenger",
    "Oath",
    "Outsider",
    "Path",
    "Power",
    "Prize",
    "Promise",
    "Refuge",
    "Rival",
    "Rumor",
    "Secret",
    "Stranger",
    "Supplies",
    "Territory",
    "Treasure",
    "Truth",
    "Vengeance",
    "Weapon",
];

const DESCRIPTORS: &[&str] = &[
    "Abruptly",
    "Bitterly",
    "Boldly",
    "Calmly",
    "Carelessly",
    "Cautiously",
    "Coldly",
    "Cruelly",
    "Curiously",
    "Desperately",
    "Eagerly",
    "Faintly",
    "Fiercely",
    "Foolishly",
    "Gently",
    "Gracefully",
    "Greedily",
    "Hastily",
    "Helpfully",
    "Loudly",
    "Mysteriously",
    "Nervously",
    "Openly",
    "Patiently",
    "Quietly",
    "Recklessly",
    "Roughly",
    "Sadly",
    "Secretly",
    "Slowly",
    "Strangely",
    "Suspiciously",
    "Tenderly",
    "Warily",
    "Wildly",
];

const ADJECTIVES: &[&str] = &[
    "Ancient",
    "Bright",
    "Broken",
    "Burning",
    "Clean",
    "Cold",
    "Colorful",
    "Crowded",
    "Dark",
    "Dangerous",
    "Empty",
    "Enormous",
    "Fading",
    "Familiar",
    "Fragile",
    "Frozen",
    "Gleaming",
    "Hidden",
    "Hollow",
    "Lonely",
    "Lost",
    "Loud",
    "Majestic",
    "Narrow",
    "Ornate",
    "Quiet",
    "Ruined",
    "Sacred",
    "Shifting",
    "Silent",
    "Simple",
    "Strange",
    "Tiny",
    "Twisted",
    "Warm",
    "Weathered",
    "Wild",
];

const LOCATIONS: &[&str] = &[
    "Abandoned mill",
    "Bridge",
    "Burial ground",
    "Cave mouth",
    "Crossroads",
    "Dockside",
    "Forge",
    "Garden",
    "Gatehouse",
    "Hilltop",
    "Inn",
    "Library",
    "Market square",
    "Marsh",
    "Mine shaft",
    "Monastery",
    "Orchard",
    "Palace hall",
    "Prison cell",
    "Ravine",
    "Ruined tower",
    "Shrine",
    "Stable",
    "Tavern cellar",
    "Temple steps",
    "Throne room",
    "Watchtower",
    "Well",
];

const CHARACTERS: &[&str] = &[
    "Apprentice",
    "Bandit",
    "Beggar",
    "Blacksmith",
    "Bounty hunter",
    "Courier",
    "Courtier",
    "Cultist",
    "Deserter",
    "Diplomat",
    "Exile",
    "Farmer",
    "Fence",
    "Guard captain",
    "Healer",
    "Herald",
    "Hermit",
    "Innkeeper",
    "Knight",
    "Merchant",
    "Noble",
    "Outlaw",
    "Pilgrim",
    "Priest",
    "Scholar",
    "Scout",
    "Smuggler",
    "Soldier",
    "Thief",
    "Widow",
];

const OBJECTS: &[&str] = &[
    "Amulet",
    "Banner",
    "Book",
    "Bottle",
    "Bracelet",
    "Candle",
    "Chain",
    "Coin",
    "Crown",
    "Dagger",
    "Drum",
    "Feather",
    "Helmet",
    "Key",
    "Ladder",
    "Lantern",
    "Letter",
    "Lockbox",
    "Map",
    "Mask",
    "Mirror",
    "Ring",
    "Rope",
    "Satchel",
    "Scroll",
    "Seal",
    "Shield",
    "Statue",
    "Vial",
    "Whistle",
];

const SOUNDS: &[&str] = &[
    "Bells",
    "Chanting",
    "Clanking",
    "Cracking",
    "Creaking",
    "Crying",
    "Dripping",
    "Drums",
    "Footsteps",
    "Growling",
    "Hammering",
    "Howling",
    "Humming",
    "Laughter",
    "Music",
    "Rustling",
    "Scraping",
    "Screaming",
    "Shouting",
    "Singing",
    "Splashing",
    "Thunder",
    "Whispering",
    "Wind",
];

const SMELLS: &[&str] = &[
    "Ash",
    "Blood",
    "Bread",
    "Brine",
    "Burning wood",
    "Damp earth",
    "Decay",
    "Dust",
    "Flowers",
    "Herbs",
    "Incense",
    "Leather",
    "Metal",
    "Mold",
    "Musk",
    "Oil",
    "Perfume",
    "Pine",
    "Rain",
    "Rot",
    "Smoke",
    "Spice",
    "Sulfur",
    "Sweat",
    "Wine",
];

/// Every built-in table.
pub const TABLES: &[MeaningTable] = &[
    MeaningTable {
        name: "actions",
        summary: "verbs for what happens",
        entries: ACTIONS,
    },
    MeaningTable {
        name: "subjects",
        summary: "nouns for what it concerns",
        entries: SUBJECTS,
    },
    MeaningTable {
        name: "descriptors",
        summary: "adverbs for how it happens",
        entries: DESCRIPTORS,
    },
    MeaningTable {
        name: "adjectives",
        summary: "qualities of people, places and things",
        entries: ADJECTIVES,
    },
    MeaningTable {
        name: "locations",
        summary: "places a scene could be set",
        entries: LOCATIONS,
    },
    MeaningTable {
        name: "characters",
        summary: "people who could turn up",
        entries: CHARACTERS,
    },
    MeaningTable {
        name: "objects",
        summary: "things worth noticing",
        entries: OBJECTS,
    },
    MeaningTable {
        name: "sounds",
        summary: "what the scene sounds like",
        entries: SOUNDS,
    },
    MeaningTable {
        name: "smells",
        summary: "what the scene smells like",
        entries: SMELLS,
    },
];

/// Look up a table by name, ignoring case and surrounding whitespace.
pub fn find_table(name: &str) -> OracleResult<&'static MeaningTable> {
    let wanted = name.trim().to_lowercase();
    TABLES
        .iter()
        .find(|t| t.name == wanted)
        .ok_or_else(|| OracleError::UnknownTable(name.trim().to_string()))
}

/// Draw `count` entries (with replacement) from a table.
pub fn draw<R: Rng + ?Sized>(table: &MeaningTable, count: usize, rng: &mut R) -> Vec<&'static str> {
    (0..count).map(|_| table.pick(rng)).collect()
}

/// A random action word.
pub fn random_action<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TABLES[0].pick(rng)
}

/// A random subject word.
pub fn random_subject<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TABLES[1].pick(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tables_are_nonempty_and_unique() {
        let mut names: Vec<_> = TABLES.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TABLES.len());
        for t in TABLES {
            assert!(t.entries.len() >= 20, "{} too short", t.name);
        }
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find_table(" Actions ").unwrap().name, "actions");
        let err = find_table("dragons").unwrap_err();
        assert_eq!(err.to_string(), "unknown table: 'dragons'");
    }

    #[test]
    fn draw_returns_table_entries() {
        let mut rng = StdRng::seed_from_u64(42);
        let table = find_table("smells").unwrap();
        let words = draw(table, 5, &mut rng);
        assert_eq!(words.len(), 5);
        assert!(words.iter().all(|w| table.entries.contains(w)));
    }

    #[test]
    fn action_subject_helpers() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(ACTIONS.contains(&random_action(&mut rng)));
        assert!(SUBJECTS.contains(&random_subject(&mut rng)));
    }
}
