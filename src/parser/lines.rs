use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(CEO|CTO|CFO|VP|President|Director|Manager|Scientist|Researcher|Engineer|Analyst|Assistant|Associate|Senior|Lead|Principal|Research)\b",
    )
    .unwrap()
});

static ORG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(University|Institute|Corporation|Company|Inc|LLC|Ltd|GmbH|AB|Systems|Technologies|Labs?|Center|Organization)\b",
    )
    .unwrap()
});

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\+?\s*(?:years?|yrs?|months?|mos?)(?:\s+\d+\s*(?:months?|mos?))?$").unwrap()
});

const MONTH_PAT: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?";

// "Jan 2020 - Present", "2019 - 2021", "May - Aug 2021"; LinkedIn
// exports append "(2 yrs 3 mos)", tolerated and ignored.
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^({m}\s+(?:19|20)\d{{2}}|(?:19|20)\d{{2}}|{m})\s*[-–—]+\s*({m}\s+(?:19|20)\d{{2}}|(?:19|20)\d{{2}}|present|current)(?:\s*\(.*\))?$",
        m = MONTH_PAT
    ))
    .unwrap()
});

static LOCATION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z.]+(?: [A-Z][A-Za-z.]+)*, ?(?:[A-Z]{2}|[A-Z][A-Za-z]+(?: [A-Z][A-Za-z]+)*)$")
        .unwrap()
});

pub(crate) static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

const BULLETS: &[char] = &['•', '●', '◦', '▪', '·', '-', '–', '—', '*'];

/// Tagged classification of one line inside an experience region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    /// "<N> years/months" filler, discarded.
    Duration,
    /// Opens a new job entry.
    Title,
    /// Sets the open entry's dates; `current` means an open-ended role.
    DateRange {
        start: String,
        end: String,
        current: bool,
    },
    /// "City, ST", discarded.
    Location,
    /// Responsibility text, appended to the open entry.
    Text,
}

pub fn classify_experience_line(raw: &str) -> LineKind {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Empty;
    }
    // A bulleted line is a responsibility candidate, no further checks.
    if is_bullet_line(line) {
        return LineKind::Text;
    }
    if DURATION_RE.is_match(line) {
        return LineKind::Duration;
    }
    if title_vocab(line) {
        return LineKind::Title;
    }
    if let Some(caps) = DATE_RANGE_RE.captures(line) {
        let end_raw = caps[2].to_string();
        let current =
            end_raw.eq_ignore_ascii_case("present") || end_raw.eq_ignore_ascii_case("current");
        return LineKind::DateRange {
            start: caps[1].to_string(),
            end: if current { String::new() } else { end_raw },
            current,
        };
    }
    if LOCATION_LINE_RE.is_match(line) {
        return LineKind::Location;
    }
    if short_capitalized(line) && !is_all_caps(line) && !ORG_RE.is_match(line) {
        return LineKind::Title;
    }
    LineKind::Text
}

/// Does this line read as a job title? Vocabulary hit, or a short
/// capitalized line that is neither organizational nor all-caps.
pub fn looks_like_title(raw: &str) -> bool {
    let line = raw.trim();
    if line.is_empty() || is_bullet_line(line) {
        return false;
    }
    title_vocab(line) || (short_capitalized(line) && !is_all_caps(line) && !ORG_RE.is_match(line))
}

pub fn title_vocab(line: &str) -> bool {
    line.len() <= 60 && line.split_whitespace().count() <= 8 && TITLE_RE.is_match(line)
}

pub fn is_org_line(line: &str) -> bool {
    line.split_whitespace().count() <= 6 && ORG_RE.is_match(line)
}

/// Block-boundary test for company-block splitting: organizational
/// suffix vocabulary, or a short mostly-capitalized line that is not a
/// job title.
pub fn is_company_boundary(raw: &str) -> bool {
    let line = raw.trim();
    if line.is_empty() || is_bullet_line(line) {
        return false;
    }
    if is_org_line(line) {
        return true;
    }
    short_capitalized(line) && !TITLE_RE.is_match(line)
}

pub fn strip_bullet(raw: &str) -> &str {
    raw.trim().trim_start_matches(BULLETS).trim_start()
}

fn is_bullet_line(line: &str) -> bool {
    line.chars().next().is_some_and(|c| BULLETS.contains(&c))
}

// More than half the words start uppercase; digits, commas and bullet
// noise disqualify the line outright.
fn short_capitalized(line: &str) -> bool {
    if line.contains(',') || line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words.len() > 5 {
        return false;
    }
    let caps = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    caps * 2 > words.len()
}

fn is_all_caps(line: &str) -> bool {
    let mut has_alpha = false;
    for c in line.chars().filter(|c| c.is_alphabetic()) {
        has_alpha = true;
        if c.is_lowercase() {
            return false;
        }
    }
    has_alpha
}
