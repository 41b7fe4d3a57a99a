//! Odds token resolution.
//!
//! Turns a user-typed odds expression into one [`OddsLevel`]. Numbers are
//! taken as ladder indices and never fuzzy-matched; anything else is matched
//! word by word against the canonical level names, so "fifty" finds
//! "Fifty Fifty" and "very" is reported as ambiguous instead of guessed.

use mythic_core::OddsLevel;

/// Token that asks for the odds table instead of a roll.
pub const LIST_TOKEN: &str = "?";

/// Outcome of resolving an odds token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OddsResolution {
    /// Exactly one level matched.
    Resolved(OddsLevel),
    /// The token was [`LIST_TOKEN`].
    ListRequested,
    /// Several levels share the typed prefix.
    Ambiguous(Vec<OddsLevel>),
    /// A number outside the ladder.
    OutOfRange(i64),
    /// Nothing matched.
    Invalid,
}

/// Normalize a raw odds token: lowercase, trim, turn `-`, `_` and em-dashes
/// into spaces, collapse whitespace, and spell out the "50/50" idiom.
pub fn normalize_odds_input(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase().replace(['\u{2014}', '-', '_'], " ");
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.as_str() {
        "50/50" | "50 50" | "50\u{a0}50" => "fifty fifty".to_string(),
        _ => collapsed,
    }
}

/// Resolve a raw odds token. Pure; never consumes randomness.
pub fn resolve_odds(raw: &str) -> OddsResolution {
    let token = normalize_odds_input(raw);
    if token == LIST_TOKEN {
        return OddsResolution::ListRequested;
    }
    if let Ok(index) = token.parse::<i64>() {
        return match OddsLevel::from_index(index) {
            Some(level) => OddsResolution::Resolved(level),
            None => OddsResolution::OutOfRange(index),
        };
    }
    let mut matches = match_odds_prefix(&token);
    match matches.len() {
        0 => OddsResolution::Invalid,
        1 => OddsResolution::Resolved(matches.remove(0)),
        _ => OddsResolution::Ambiguous(matches),
    }
}

/// Every level whose name starts with the normalized token, compared word by
/// word. All typed words but the last must equal the name's words; the last
/// may be a prefix. An empty token matches nothing.
pub fn match_odds_prefix(token: &str) -> Vec<OddsLevel> {
    let typed: Vec<&str> = token.split(' ').filter(|w| !w.is_empty()).collect();
    let Some((last, whole)) = typed.split_last() else {
        return Vec::new();
    };
    OddsLevel::all()
        .iter()
        .copied()
        .filter(|level| {
            let name = level.name().to_lowercase();
            let words: Vec<&str> = name.split(' ').collect();
            if typed.len() > words.len() {
                return false;
            }
            whole.iter().zip(&words).all(|(t, w)| t == w) && words[whole.len()].starts_with(last)
        })
        .collect()
}

/// Render levels as `index : name` lines, one per level.
pub fn format_odds_lines(levels: &[OddsLevel]) -> String {
    levels
        .iter()
        .map(|level| format!("{} : {}\n", level.index(), level.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_variants() {
        assert_eq!(normalize_odds_input("  Very_Likely "), "very likely");
        assert_eq!(normalize_odds_input("nearly\u{2014}certain"), "nearly certain");
        assert_eq!(normalize_odds_input("50/50"), "fifty fifty");
        assert_eq!(normalize_odds_input("50-50"), "fifty fifty");
        assert_eq!(normalize_odds_input("50   50"), "fifty fifty");
        assert_eq!(normalize_odds_input("50\u{a0}50"), "fifty fifty");
    }

    #[test]
    fn numeric_wins() {
        assert_eq!(resolve_odds("5"), OddsResolution::Resolved(OddsLevel::Likely));
        assert_eq!(resolve_odds("0"), OddsResolution::Resolved(OddsLevel::Impossible));
        assert_eq!(resolve_odds(" 8 "), OddsResolution::Resolved(OddsLevel::Certain));
    }

    #[test]
    fn numeric_out_of_range() {
        assert_eq!(resolve_odds("9"), OddsResolution::OutOfRange(9));
        assert_eq!(resolve_odds("42"), OddsResolution::OutOfRange(42));
    }

    #[test]
    fn leading_hyphen_becomes_separator() {
        // "-1" normalizes to "1" because hyphens are separators.
        assert_eq!(
            resolve_odds("-1"),
            OddsResolution::Resolved(OddsLevel::NearlyImpossible)
        );
    }

    #[test]
    fn fifty_is_unique() {
        assert_eq!(
            resolve_odds("fifty"),
            OddsResolution::Resolved(OddsLevel::FiftyFifty)
        );
        assert_eq!(
            resolve_odds("fifty fifty"),
            OddsResolution::Resolved(OddsLevel::FiftyFifty)
        );
        assert_eq!(resolve_odds("50/50"), resolve_odds("fifty fifty"));
    }

    #[test]
    fn shared_prefix_is_ambiguous() {
        assert_eq!(
            resolve_odds("very"),
            OddsResolution::Ambiguous(vec![OddsLevel::VeryUnlikely, OddsLevel::VeryLikely])
        );
        assert_eq!(
            resolve_odds("n"),
            OddsResolution::Ambiguous(vec![OddsLevel::NearlyImpossible, OddsLevel::NearlyCertain])
        );
    }

    #[test]
    fn word_wise_prefix() {
        assert_eq!(resolve_odds("likely"), OddsResolution::Resolved(OddsLevel::Likely));
        assert_eq!(
            resolve_odds("very l"),
            OddsResolution::Resolved(OddsLevel::VeryLikely)
        );
        assert_eq!(
            resolve_odds("Nearly-Imp"),
            OddsResolution::Resolved(OddsLevel::NearlyImpossible)
        );
        // "fifty" is not a substring match for unrelated names.
        assert_eq!(resolve_odds("ifty"), OddsResolution::Invalid);
        assert_eq!(resolve_odds("very likely indeed"), OddsResolution::Invalid);
    }

    #[test]
    fn bogus_and_empty_are_invalid() {
        assert_eq!(resolve_odds("bogus-token"), OddsResolution::Invalid);
        assert_eq!(resolve_odds(""), OddsResolution::Invalid);
        assert_eq!(resolve_odds("   "), OddsResolution::Invalid);
    }

    #[test]
    fn question_mark_lists() {
        assert_eq!(resolve_odds("?"), OddsResolution::ListRequested);
        assert_eq!(resolve_odds(" ? "), OddsResolution::ListRequested);
    }

    #[test]
    fn full_names_resolve_to_themselves() {
        for level in OddsLevel::all() {
            assert_eq!(resolve_odds(level.name()), OddsResolution::Resolved(*level));
        }
    }

    #[test]
    fn odds_lines_format() {
        let lines = format_odds_lines(&[OddsLevel::VeryUnlikely, OddsLevel::VeryLikely]);
        assert_eq!(lines, "2 : Very Unlikely\n6 : Very Likely\n");
    }

    proptest! {
        #[test]
        fn resolver_is_total(raw in ".{0,40}") {
            let _ = resolve_odds(&raw);
        }

        #[test]
        fn ambiguous_candidates_all_share_prefix(raw in "[a-z ]{1,12}") {
            if let OddsResolution::Ambiguous(levels) = resolve_odds(&raw) {
                prop_assert!(levels.len() > 1);
                for level in levels {
                    prop_assert!(match_odds_prefix(&normalize_odds_input(&raw)).contains(&level));
                }
            }
        }
    }
}
