use crate::parser::lines::strip_bullet;
use crate::parser::sections::{region_lines, SectionKind};

/// Skills region ("Top Skills" on LinkedIn exports maps to the same
/// section kind): bullets stripped, lines comma-joined.
pub fn skills(text: &str) -> String {
    comma_joined(text, SectionKind::Skills)
}

pub fn languages(text: &str) -> String {
    comma_joined(text, SectionKind::Languages)
}

/// Publications keep their line structure; one entry per line.
pub fn publications(text: &str) -> String {
    line_joined(text, SectionKind::Publications)
}

pub fn certifications(text: &str) -> String {
    line_joined(text, SectionKind::Certifications)
}

pub fn awards(text: &str) -> String {
    line_joined(text, SectionKind::Honors)
}

fn comma_joined(text: &str, kind: SectionKind) -> String {
    cleaned_lines(text, kind).join(", ")
}

fn line_joined(text: &str, kind: SectionKind) -> String {
    cleaned_lines(text, kind).join("\n")
}

fn cleaned_lines(text: &str, kind: SectionKind) -> Vec<String> {
    region_lines(text, kind)
        .unwrap_or_default()
        .iter()
        .map(|l| strip_bullet(l).to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_comma_joined() {
        let text = "Skills\n• Python, Rust\n• Distributed computing\n\nEducation\nMIT";
        assert_eq!(skills(text), "Python, Rust, Distributed computing");
    }

    #[test]
    fn top_skills_heading() {
        let text = "Top Skills\nKubernetes\nTeam Leadership";
        assert_eq!(skills(text), "Kubernetes, Team Leadership");
    }

    #[test]
    fn publications_preserve_lines() {
        let text = "Publications\n- First paper title. 2018.\n- Second paper title. 2021.";
        assert_eq!(
            publications(text),
            "First paper title. 2018.\nSecond paper title. 2021."
        );
    }

    #[test]
    fn certifications_captured() {
        let text = "Certifications\nAWS Certified Solutions Architect";
        assert_eq!(certifications(text), "AWS Certified Solutions Architect");
    }

    #[test]
    fn awards_from_honors_heading() {
        let text = "Honors-Awards\nDean's Fellowship\nBest Paper Award";
        assert_eq!(awards(text), "Dean's Fellowship\nBest Paper Award");
    }

    #[test]
    fn missing_sections_yield_empty() {
        let text = "Experience\nAcme Corp";
        assert_eq!(skills(text), "");
        assert_eq!(publications(text), "");
        assert_eq!(certifications(text), "");
        assert_eq!(awards(text), "");
        assert_eq!(languages(text), "");
    }
}
