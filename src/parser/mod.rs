pub mod classify;
pub mod dates;
pub mod extract;
pub mod lines;
pub mod normalize;
pub mod sections;

use thiserror::Error;

use classify::PipelineTag;
use extract::ExtractionResult;

/// Minimum normalized content, in characters, worth running the
/// extractor battery over.
pub const MIN_CONTENT_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document text too short to extract from ({got} chars after normalization)")]
    InsufficientContent { got: usize },
}

/// Full pipeline: normalize → length guard → classify → extractor
/// battery. Pure function of its input; everything past the length
/// guard degrades to empty fields rather than failing.
pub fn parse(input: &str) -> Result<ExtractionResult, ParseError> {
    let text = normalize::normalize(input);
    let got = text.chars().count();
    if got < MIN_CONTENT_CHARS {
        return Err(ParseError::InsufficientContent { got });
    }
    let pipeline: PipelineTag = classify::classify(&text);
    Ok(extract::extract_all(&text, pipeline))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_insufficient() {
        assert!(matches!(
            parse(""),
            Err(ParseError::InsufficientContent { got: 0 })
        ));
    }

    #[test]
    fn short_input_is_insufficient() {
        let err = parse("too short").unwrap_err();
        assert!(err.to_string().contains("too short to extract"));
    }

    #[test]
    fn whitespace_padding_does_not_help() {
        let padded = format!("{}hi{}", " ".repeat(200), "\n".repeat(200));
        assert!(parse(&padded).is_err());
    }

    #[test]
    fn threshold_measured_after_normalization() {
        let text = "Jane Doe\njane@x.com\nan experienced engineer and manager";
        assert!(parse(text).is_ok());
    }

    #[test]
    fn idempotent() {
        let text = "Jane Doe\njane@x.com\n\nExperience\nSenior Engineer\nAcme Corp\nJan 2020 - Present\nBuilt things\n\nEducation\nBS in Physics\nState University\n2015";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }

    #[test]
    fn current_entries_never_carry_end_dates() {
        let text = "Jane Doe\njane@x.com\n\nExperience\nSenior Engineer\nAcme Corp\nJan 2020 - Present\nBuilt things\nDirector\nAcme Corp\n2015 - 2019\nRan things";
        let result = parse(text).unwrap();
        for entry in &result.experiences {
            if entry.is_current {
                assert_eq!(entry.end_date, "");
            }
        }
    }

    #[test]
    fn single_job_title_first_resume() {
        let text = "Jane Doe\njane@x.com\n\nExperience\nSenior Engineer\nAcme Corp\nJan 2020 - Present\nBuilt things\n\nEducation\nBS in Physics\nState University\n2015";
        let result = parse(text).unwrap();
        assert_eq!(result.personal.name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.personal.email.as_deref(), Some("jane@x.com"));
        assert_eq!(result.experiences.len(), 1);
        let e = &result.experiences[0];
        assert_eq!(e.job_title, "Senior Engineer");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.start_date, "2020-01");
        assert!(e.is_current);
        assert_eq!(e.end_date, "");
        assert_eq!(e.responsibilities, "Built things");
        assert_eq!(result.education.len(), 1);
        let ed = &result.education[0];
        assert_eq!(ed.degree, "BS");
        assert_eq!(ed.field, "Physics");
        assert_eq!(ed.school, "State University");
        assert_eq!(ed.graduation_year, "2015");
    }

    #[test]
    fn resume_without_education_section() {
        let text = "Jane Doe\njane@x.com\n\nExperience\nSenior Engineer\nAcme Corp\nJan 2020 - Present\nBuilt things";
        let result = parse(text).unwrap();
        assert!(result.education.is_empty());
    }

    #[test]
    fn year_only_date_range() {
        let text = "Jane Doe\njane@x.com\n\nExperience\nSenior Engineer\nAcme Corp\n2019 - 2021\nBuilt things";
        let result = parse(text).unwrap();
        let e = &result.experiences[0];
        assert_eq!(e.start_date, "2019-01");
        assert_eq!(e.end_date, "2021-01");
        assert!(!e.is_current);
    }
}
