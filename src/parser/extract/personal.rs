use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::classify::PipelineTag;

pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap());

// North-American grouping only; international formats are out of scope.
pub(crate) static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?1[\s.\-]?)?\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}\b").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9_%\-]+").unwrap()
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:https?://|www\.)[^\s<>()]+").unwrap());

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][A-Za-z.]+(?: [A-Z][A-Za-z.]+)*, ?(?:[A-Z]{2}\b|[A-Z][A-Za-z]+(?: [A-Z][A-Za-z]+)*)")
        .unwrap()
});

static LINKEDIN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?: [A-Z][a-z]+){1,2}$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
}

/// Independent whole-text scans; first match in document order wins
/// for each field, and any subset of fields is a valid outcome.
pub fn extract(text: &str, pipeline: PipelineTag) -> PersonalInfo {
    let linkedin_url = LINKEDIN_RE.find(text).map(|m| absolute_https(m.as_str()));

    let website_url = URL_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':']))
        .find(|u| !u.to_lowercase().contains("linkedin.com"))
        .map(str::to_string);

    PersonalInfo {
        name: match pipeline {
            PipelineTag::Generic => generic_name(text),
            PipelineTag::LinkedIn => linkedin_name(text),
        },
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
        location: LOCATION_RE.find(text).map(|m| m.as_str().to_string()),
        linkedin_url,
        website_url,
    }
}

fn absolute_https(url: &str) -> String {
    let bare = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    format!("https://{bare}")
}

/// First of the leading five non-empty lines that reads as a person's
/// name: no address sign, no long digit run, 5-50 chars of
/// letters/spaces/periods forming 2-4 words.
fn generic_name(text: &str) -> Option<String> {
    static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{3,}").unwrap());

    for line in text.lines().filter(|l| !l.trim().is_empty()).take(5) {
        let line = line.trim();
        let words = line.split_whitespace().count();
        if !line.contains('@')
            && !DIGIT_RUN_RE.is_match(line)
            && (5..=50).contains(&line.len())
            && line
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '.')
            && (2..=4).contains(&words)
        {
            return Some(line.to_string());
        }
    }
    None
}

/// LinkedIn exports lead with the profile name: two or three
/// capitalized words on the very first line.
fn linkedin_name(text: &str) -> Option<String> {
    text.lines()
        .find(|l| !l.trim().is_empty())
        .map(str::trim)
        .filter(|l| LINKEDIN_NAME_RE.is_match(l))
        .map(str::to_string)
}
