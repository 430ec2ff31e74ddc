use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::extract::personal::{EMAIL_RE, PHONE_RE};
use super::sections::{heading_kind, SectionKind};

static LINKEDIN_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9_%\-]+").unwrap());

/// Which heuristic variant set processes a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineTag {
    Generic,
    LinkedIn,
}

impl fmt::Display for PipelineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineTag::Generic => write!(f, "generic"),
            PipelineTag::LinkedIn => write!(f, "linkedin"),
        }
    }
}

/// Pick the extraction pipeline for a normalized document. LinkedIn
/// markers: a profile URL, a "Top Skills" heading, or a summary-led
/// document with no contact block above the Summary heading. Ties
/// resolve to the generic pipeline.
pub fn classify(text: &str) -> PipelineTag {
    let tag = decide(text);
    debug!(pipeline = %tag, "classified document");
    tag
}

fn decide(text: &str) -> PipelineTag {
    if LINKEDIN_URL_RE.is_match(text) {
        return PipelineTag::LinkedIn;
    }
    if text
        .lines()
        .any(|l| l.trim().trim_end_matches(':').eq_ignore_ascii_case("top skills"))
    {
        return PipelineTag::LinkedIn;
    }

    // Summary heading within the first lines, nothing contact-like
    // before it: reads as a profile export rather than a resume.
    let mut offset = 0;
    let mut seen = 0;
    for line in text.lines() {
        if !line.trim().is_empty() {
            if heading_kind(line) == Some(SectionKind::Summary) {
                let before = &text[..offset];
                if !EMAIL_RE.is_match(before) && !PHONE_RE.is_match(before) {
                    return PipelineTag::LinkedIn;
                }
                break;
            }
            seen += 1;
            if seen >= 3 {
                break;
            }
        }
        offset += line.len() + 1;
    }

    PipelineTag::Generic
}
