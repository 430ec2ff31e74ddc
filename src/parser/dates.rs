use std::sync::LazyLock;

use regex::Regex;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

// Keyed by case-insensitive 3-letter prefix, so "Sep", "Sept" and
// "September" all land on 09.
const MONTHS: &[(&str, u32)] = &[
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Convert a free-text date token ("March 2021", "Sept 2019", "2021")
/// into canonical `YYYY-MM`. A token with no 4-digit year yields an
/// empty string; a year with no recognizable month defaults to `-01`.
pub fn parse_date_token(token: &str) -> String {
    let Some(caps) = YEAR_RE.captures(token) else {
        return String::new();
    };
    let year = &caps[1];

    let month = token
        .split(|c: char| !c.is_ascii_alphabetic())
        .find(|w| w.len() >= 3)
        .and_then(month_number)
        .unwrap_or(1);

    format!("{year}-{month:02}")
}

fn month_number(word: &str) -> Option<u32> {
    let prefix = word.get(0..3)?.to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == prefix)
        .map(|(_, n)| *n)
}
