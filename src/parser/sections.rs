/// Recognized resume section labels. A heading plus everything up to
/// the next recognized heading (or end of document) forms a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Publications,
    Certifications,
    Languages,
    Honors,
    Patents,
}

/// Match a line against the heading vocabulary. Headings are short
/// label lines; an optional trailing colon is tolerated.
pub fn heading_kind(line: &str) -> Option<SectionKind> {
    let label = line.trim().trim_end_matches(':').trim();
    if label.is_empty() || label.len() > 40 {
        return None;
    }
    use SectionKind::*;
    let kind = match label.to_lowercase().as_str() {
        "summary" | "professional summary" | "executive summary" | "objective"
        | "career objective" | "profile" | "career profile" | "about" | "about me" => Summary,
        "experience" | "professional experience" | "work experience" | "employment"
        | "employment history" | "work history" => Experience,
        "education" | "academic background" | "academic history" => Education,
        "skills" | "top skills" | "technical skills" | "core competencies" | "competencies"
        | "expertise" | "areas of expertise" | "technologies" => Skills,
        "publications" | "selected publications" | "papers" | "articles" => Publications,
        "certifications" | "certificates" | "licenses" | "licenses & certifications" => {
            Certifications
        }
        "languages" => Languages,
        "honors" | "awards" | "honors & awards" | "honors and awards" | "awards & honors"
        | "honors-awards" => Honors,
        "patents" => Patents,
        _ => return None,
    };
    Some(kind)
}

#[derive(Debug, Clone)]
pub struct Region {
    /// `None` for the preamble before the first recognized heading.
    pub kind: Option<SectionKind>,
    pub lines: Vec<String>,
}

/// Split normalized text into heading-delimited regions. The heading
/// line itself is consumed by the boundary, not kept in the region.
pub fn split_regions(text: &str) -> Vec<Region> {
    let mut regions = vec![Region {
        kind: None,
        lines: Vec::new(),
    }];
    for line in text.lines() {
        if let Some(kind) = heading_kind(line) {
            regions.push(Region {
                kind: Some(kind),
                lines: Vec::new(),
            });
        } else if let Some(last) = regions.last_mut() {
            last.lines.push(line.to_string());
        }
    }
    regions
}

/// Body lines of the first region of the given kind, if present.
pub fn region_lines(text: &str, kind: SectionKind) -> Option<Vec<String>> {
    split_regions(text)
        .into_iter()
        .find(|r| r.kind == Some(kind))
        .map(|r| r.lines)
}

/// Lines before the first recognized heading.
pub fn preamble_lines(text: &str) -> Vec<String> {
    split_regions(text)
        .into_iter()
        .next()
        .map(|r| r.lines)
        .unwrap_or_default()
}

pub fn has_section(text: &str, kind: SectionKind) -> bool {
    text.lines().any(|l| heading_kind(l) == Some(kind))
}
