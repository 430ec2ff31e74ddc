use crate::parser::classify::PipelineTag;
use crate::parser::sections::{has_section, preamble_lines, region_lines, SectionKind};

const EXPLICIT_MIN: usize = 50;
const EXPLICIT_MAX: usize = 500;
const IMPLICIT_MIN: usize = 100;
const IMPLICIT_MAX: usize = 400;

pub fn extract(text: &str, pipeline: PipelineTag) -> String {
    match pipeline {
        PipelineTag::Generic => generic(text),
        PipelineTag::LinkedIn => linkedin(text),
    }
}

/// Prose under a summary-type heading, cut at the next recognized
/// heading or a blank-line-plus-pseudo-heading boundary; falls back to
/// the document's leading prose when a later experience/education
/// heading confirms this is a resume.
fn generic(text: &str) -> String {
    if let Some(lines) = region_lines(text, SectionKind::Summary) {
        let mut kept: Vec<&str> = Vec::new();
        let mut after_blank = false;
        for line in &lines {
            if line.trim().is_empty() {
                after_blank = !kept.is_empty();
                continue;
            }
            if after_blank && looks_like_heading(line) {
                break;
            }
            kept.push(line.trim());
            after_blank = false;
        }
        let prose = kept.join(" ");
        if prose.chars().count() >= EXPLICIT_MIN {
            return clip(&prose, EXPLICIT_MAX);
        }
    }

    if has_section(text, SectionKind::Experience) || has_section(text, SectionKind::Education) {
        let prose = preamble_lines(text)
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if prose.chars().count() >= IMPLICIT_MIN {
            return clip(&prose, IMPLICIT_MAX);
        }
    }

    String::new()
}

/// Everything between the Summary heading and the next recognized
/// heading, heading token stripped, text otherwise preserved.
fn linkedin(text: &str) -> String {
    region_lines(text, SectionKind::Summary)
        .map(|lines| lines.join("\n").trim().to_string())
        .unwrap_or_default()
}

// Unrecognized but heading-shaped: short, title-cased, no sentence end.
fn looks_like_heading(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || line.len() > 40 || line.ends_with('.') {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    words.len() <= 4
        && words
            .iter()
            .all(|w| w.chars().next().is_some_and(|c| !c.is_lowercase()))
}

fn clip(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((i, _)) => s[..i].trim_end().to_string(),
        None => s.to_string(),
    }
}
