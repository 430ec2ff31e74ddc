use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parser::classify::PipelineTag;
use crate::parser::dates::parse_date_token;
use crate::parser::lines::{
    classify_experience_line, is_company_boundary, looks_like_title, strip_bullet, title_vocab,
    LineKind, YEAR_RE,
};
use crate::parser::sections::{region_lines, SectionKind};

/// Noise threshold for split blocks, in characters of content.
const MIN_BLOCK_CHARS: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    /// `YYYY-MM` or empty.
    pub start_date: String,
    /// `YYYY-MM`, or empty while the role is current.
    pub end_date: String,
    pub is_current: bool,
    /// Newline-joined bullet candidates.
    pub responsibilities: String,
}

/// Segment the experience region into ordered entries: isolate the
/// heading-delimited region, split it into company blocks, then walk
/// each block line by line. A missing region yields no entries.
pub fn extract(text: &str, pipeline: PipelineTag) -> Vec<ExperienceEntry> {
    let Some(region) = region_lines(text, SectionKind::Experience) else {
        return Vec::new();
    };
    let lines: Vec<&str> = region
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let blocks = split_blocks(&lines, pipeline);
    blocks
        .iter()
        .flat_map(|block| parse_block(block, pipeline))
        .collect()
}

/// Company-block splitting. LinkedIn exports lead every block with the
/// company line, so organizational boundaries are authoritative. The
/// generic pipeline tries the same split first and falls back to
/// title-anchored boundaries when it produces fewer than two blocks;
/// one winning strategy applies to the whole region.
fn split_blocks<'a>(lines: &[&'a str], pipeline: PipelineTag) -> Vec<Vec<&'a str>> {
    let by_company = split_at(lines, |i| is_company_boundary(lines[i]));
    match pipeline {
        PipelineTag::LinkedIn => by_company,
        PipelineTag::Generic => {
            if by_company.len() >= 2 {
                return by_company;
            }
            let by_title = split_at(lines, |i| is_title_anchor(lines, i));
            debug!(
                company_blocks = by_company.len(),
                title_blocks = by_title.len(),
                "generic split fell through to title anchors"
            );
            if by_title.len() >= by_company.len() {
                by_title
            } else {
                by_company
            }
        }
    }
}

/// A job-title line over a company-like line, with a 4-digit year
/// within the next few lines, anchors a new entry in title-first
/// resumes.
fn is_title_anchor(lines: &[&str], i: usize) -> bool {
    looks_like_title(lines[i])
        && lines.get(i + 1).copied().is_some_and(company_like)
        && lines[i + 1..lines.len().min(i + 4)]
            .iter()
            .any(|l| YEAR_RE.is_match(l))
}

/// Reads as an employer line rather than a date, duration, location or
/// vocabulary job title.
fn company_like(line: &str) -> bool {
    !title_vocab(line)
        && matches!(
            classify_experience_line(line),
            LineKind::Title | LineKind::Text
        )
}

fn split_at<'a, F: Fn(usize) -> bool>(lines: &[&'a str], is_boundary: F) -> Vec<Vec<&'a str>> {
    let mut blocks: Vec<Vec<&'a str>> = Vec::new();
    let mut current: Vec<&'a str> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if is_boundary(i) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
        .into_iter()
        .filter(|b| b.iter().map(|l| l.len()).sum::<usize>() >= MIN_BLOCK_CHARS)
        .collect()
}

/// Walk one company block. The first line is the company on the
/// LinkedIn pipeline; the generic pipeline decides company vs. title
/// across the first two lines. Every further line is classified and
/// either discarded (duration, location), opens/extends an entry
/// (title, date range), or lands in responsibilities.
fn parse_block(block: &[&str], pipeline: PipelineTag) -> Vec<ExperienceEntry> {
    let mut entries: Vec<ExperienceEntry> = Vec::new();
    let mut company = String::new();
    let mut open: Option<ExperienceEntry> = None;
    let mut start = 0;

    match pipeline {
        PipelineTag::LinkedIn => {
            company = block[0].to_string();
            start = 1;
        }
        PipelineTag::Generic => {
            let first = block[0];
            if looks_like_title(first) && !is_company_boundary(first) {
                // Title-first block: the next plain line is the employer.
                let second = block.get(1).copied().filter(|s| company_like(s));
                if let Some(second) = second {
                    company = second.to_string();
                    start = 2;
                } else {
                    start = 1;
                }
                open = Some(ExperienceEntry {
                    job_title: first.to_string(),
                    company: company.clone(),
                    ..Default::default()
                });
            } else {
                company = first.to_string();
                start = 1;
            }
        }
    }

    for line in &block[start..] {
        match classify_experience_line(line) {
            LineKind::Empty | LineKind::Duration | LineKind::Location => {}
            LineKind::Title => {
                close(&mut open, &mut entries);
                open = Some(ExperienceEntry {
                    job_title: line.to_string(),
                    company: company.clone(),
                    ..Default::default()
                });
            }
            LineKind::DateRange { start, end, current } => {
                if open.is_none() && !company.is_empty() {
                    // Dates with no title yet: the block still names an
                    // employer, so surface an untitled entry.
                    open = Some(ExperienceEntry {
                        company: company.clone(),
                        ..Default::default()
                    });
                }
                if let Some(entry) = open.as_mut() {
                    entry.start_date = parse_date_token(&start);
                    if current {
                        entry.is_current = true;
                        entry.end_date.clear();
                    } else if !entry.is_current {
                        entry.end_date = parse_date_token(&end);
                    }
                }
            }
            LineKind::Text => {
                if let Some(entry) = open.as_mut() {
                    if !entry.responsibilities.is_empty() {
                        entry.responsibilities.push('\n');
                    }
                    entry.responsibilities.push_str(strip_bullet(line));
                }
            }
        }
    }

    close(&mut open, &mut entries);
    entries
}

fn close(open: &mut Option<ExperienceEntry>, entries: &mut Vec<ExperienceEntry>) {
    if let Some(entry) = open.take() {
        if !entry.job_title.is_empty() || !entry.company.is_empty() {
            entries.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_single_title_first_job() {
        let text = "Experience\nSenior Engineer\nAcme Corp\nJan 2020 - Present\nBuilt things";
        let entries = extract(text, PipelineTag::Generic);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.job_title, "Senior Engineer");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.start_date, "2020-01");
        assert!(e.is_current);
        assert_eq!(e.end_date, "");
        assert_eq!(e.responsibilities, "Built things");
    }

    #[test]
    fn generic_company_first_multiple_jobs() {
        let text = "Experience\n\nHelix Analytics, Inc\nSenior Data Engineer\nMar 2019 - Present\n• Built a variant-calling pipeline for sequencing data\n\nBroad Institute\nResearch Scientist\n2014 - 2019\n• Developed statistical models for sequencing experiments";
        let entries = extract(text, PipelineTag::Generic);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].job_title, "Senior Data Engineer");
        assert_eq!(entries[0].company, "Helix Analytics, Inc");
        assert_eq!(entries[0].start_date, "2019-03");
        assert!(entries[0].is_current);
        assert_eq!(entries[1].job_title, "Research Scientist");
        assert_eq!(entries[1].company, "Broad Institute");
        assert_eq!(entries[1].start_date, "2014-01");
        assert_eq!(entries[1].end_date, "2019-01");
        assert!(!entries[1].is_current);
    }

    #[test]
    fn linkedin_multi_role_same_company() {
        let text = "Experience\nNimbus Systems\n6 years 2 months\nSenior Engineering Manager\nJan 2022 - Present\nLeading the build infrastructure group across three sites\nEngineering Manager\nNov 2018 - Dec 2021\nManaged the continuous integration team through a platform migration";
        let entries = extract(text, PipelineTag::LinkedIn);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Nimbus Systems");
        assert_eq!(entries[1].company, "Nimbus Systems");
        assert_eq!(entries[0].job_title, "Senior Engineering Manager");
        assert_eq!(entries[1].job_title, "Engineering Manager");
        assert_eq!(entries[1].start_date, "2018-11");
        assert_eq!(entries[1].end_date, "2021-12");
    }

    #[test]
    fn missing_region_yields_nothing() {
        assert!(extract("Jane Doe\njane@x.com", PipelineTag::Generic).is_empty());
    }

    #[test]
    fn document_order_preserved() {
        let text = "Experience\nNimbus Systems\nSenior Engineer\nJan 2022 - Present\nEngineer\nJan 2019 - Dec 2021\nJunior Engineer\nJun 2016 - Dec 2018";
        let entries = extract(text, PipelineTag::LinkedIn);
        let titles: Vec<&str> = entries.iter().map(|e| e.job_title.as_str()).collect();
        assert_eq!(titles, vec!["Senior Engineer", "Engineer", "Junior Engineer"]);
    }

    #[test]
    fn current_wins_over_later_end_date() {
        let text = "Experience\nNimbus Systems\nSenior Engineer\nJan 2022 - Present\n2022 - 2023";
        let entries = extract(text, PipelineTag::LinkedIn);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_current);
        assert_eq!(entries[0].end_date, "");
    }

    #[test]
    fn duration_and_location_discarded() {
        let text = "Experience\nNimbus Systems\n3 yrs\nSenior Engineer\nJan 2020 - Jan 2023\nSan Francisco, CA\nShipped the build cache rollout to every team";
        let entries = extract(text, PipelineTag::LinkedIn);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].responsibilities,
            "Shipped the build cache rollout to every team"
        );
    }

    #[test]
    fn company_only_block_surfaces_untitled_entry() {
        let text = "Experience\nAcme Corporation\n2015 - 2018\nRan the entire operation end to end";
        let entries = extract(text, PipelineTag::LinkedIn);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_title, "");
        assert_eq!(entries[0].company, "Acme Corporation");
        assert_eq!(entries[0].start_date, "2015-01");
    }

    #[test]
    fn noise_blocks_dropped() {
        let text = "Experience\nAcme\n\nEducation\nMIT";
        let entries = extract(text, PipelineTag::LinkedIn);
        assert!(entries.is_empty());
    }
}
