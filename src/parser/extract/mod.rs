pub mod education;
pub mod experience;
pub mod freetext;
pub mod personal;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::parser::classify::PipelineTag;

pub use education::EducationEntry;
pub use experience::ExperienceEntry;
pub use personal::PersonalInfo;

/// Root aggregate handed to the form-population collaborator. Carries
/// the pipeline tag for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub pipeline: PipelineTag,
    pub personal: PersonalInfo,
    pub summary: String,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: String,
    pub publications: String,
    pub certifications: String,
    pub awards: String,
    pub languages: String,
}

/// Run every extractor over the normalized text and merge the outputs.
/// Extractors scan independently; any one of them coming back empty is
/// normal operation, not failure.
pub fn extract_all(text: &str, pipeline: PipelineTag) -> ExtractionResult {
    ExtractionResult {
        pipeline,
        personal: personal::extract(text, pipeline),
        summary: summary::extract(text, pipeline),
        experiences: experience::extract(text, pipeline),
        education: education::extract(text),
        skills: freetext::skills(text),
        publications: freetext::publications(text),
        certifications: freetext::certifications(text),
        awards: freetext::awards(text),
        languages: freetext::languages(text),
    }
}

// ── Tests ──
