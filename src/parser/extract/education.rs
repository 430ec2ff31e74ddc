use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::lines::{strip_bullet, YEAR_RE};
use crate::parser::sections::{region_lines, SectionKind};

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(Ph\.?\s?D|Doctorate|Master(?:'?s)?|Bachelor(?:'?s)?|MBA|M\.?S(?:c)?|B\.?S(?:c)?|M\.?A|B\.?A|M\.?D|J\.?D|B\.?\s?Tech)\b",
    )
    .unwrap()
});

// Greedy head group pins the split to the LAST "in"/"of" clause.
static FIELD_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\s+(?:in|of)\s+(.+)$").unwrap());

static YEAR_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub school: String,
    pub graduation_year: String,
}

/// Split the education region into degree-anchored entries. Each entry
/// starts at a line matching the degree vocabulary; the school is the
/// next non-year line of reasonable length, and the last 19xx/20xx
/// token in the entry wins as the graduation year (graduation over
/// matriculation when both appear).
pub fn extract(text: &str) -> Vec<EducationEntry> {
    let Some(lines) = region_lines(text, SectionKind::Education) else {
        return Vec::new();
    };

    let mut entries: Vec<EducationEntry> = Vec::new();
    let mut open: Option<EducationEntry> = None;

    for raw in &lines {
        let line = strip_bullet(raw);
        if line.is_empty() {
            continue;
        }

        if DEGREE_RE.is_match(line) {
            if let Some(entry) = open.take() {
                entries.push(entry);
            }
            let (degree, field) = split_degree_field(line);
            open = Some(EducationEntry {
                degree,
                field,
                ..Default::default()
            });
            if let Some(entry) = open.as_mut() {
                note_year(entry, line);
            }
            continue;
        }

        let Some(entry) = open.as_mut() else {
            continue;
        };
        note_year(entry, line);
        if entry.school.is_empty() && !YEAR_ONLY_RE.is_match(line) && line.len() > 5 {
            entry.school = line.to_string();
        }
    }

    if let Some(entry) = open.take() {
        entries.push(entry);
    }
    entries
}

fn split_degree_field(line: &str) -> (String, String) {
    match FIELD_SPLIT_RE.captures(line) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => (line.to_string(), String::new()),
    }
}

fn note_year(entry: &mut EducationEntry, line: &str) {
    if let Some(year) = YEAR_RE.find_iter(line).last() {
        entry.graduation_year = year.as_str().to_string();
    }
}
