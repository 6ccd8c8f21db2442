use std::collections::HashSet;

use askama::Template;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use uuid::Uuid;

use crate::models::candidate::CandidateSummary;
use crate::screening::filter::{CandidateFilter, PositionFilter};

/// Placeholder shown for absent contact/detail fields.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";
/// Placeholder shown when the scoring pipeline produced no assessment text.
pub const MISSING_SUMMARY_PLACEHOLDER: &str = "No summary available";
/// Score at or above which a panel gets the "high" confidence styling.
/// Purely visual; does not affect filtering.
pub const HIGH_CONFIDENCE_CUTOFF: i32 = 80;

/// One rendered candidate panel. All fields are display-ready strings so the
/// template stays free of fallback logic.
#[derive(Debug, Clone)]
pub struct CandidatePanel {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub applied: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub summary: String,
    pub llm_score: i32,
    pub status_class: &'static str,
    pub shortlisted: bool,
}

impl CandidatePanel {
    pub fn from_summary(c: &CandidateSummary, shortlisted: bool) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            position: title_case(&c.position),
            applied: c.processed_at.format("%b %d, %Y").to_string(),
            email: display_or_placeholder(&c.email, MISSING_FIELD_PLACEHOLDER),
            phone: display_or_placeholder(&c.phone, MISSING_FIELD_PLACEHOLDER),
            education: display_or_placeholder(&c.education, MISSING_FIELD_PLACEHOLDER),
            experience: display_or_placeholder(&c.experience, MISSING_FIELD_PLACEHOLDER),
            skills: display_or_placeholder(&c.skills, MISSING_FIELD_PLACEHOLDER),
            summary: display_or_placeholder(&c.summary, MISSING_SUMMARY_PLACEHOLDER),
            llm_score: c.llm_score,
            status_class: status_class(c.llm_score),
            shortlisted,
        }
    }
}

fn display_or_placeholder(field: &Option<String>, placeholder: &str) -> String {
    match field {
        Some(v) => v.clone(),
        None => placeholder.to_string(),
    }
}

/// Two-tier visual classification: "high" at or above the cutoff, "medium" below.
pub fn status_class(score: i32) -> &'static str {
    if score >= HIGH_CONFIDENCE_CUTOFF {
        "status-high"
    } else {
        "status-medium"
    }
}

/// Uppercases the first letter of each word, e.g. "data engineer" to
/// "Data Engineer". Position values are stored lowercase upstream.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut c = w.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().to_string() + c.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Download filename for a candidate's resume. Whitespace collapses to
/// underscores; characters that would break the Content-Disposition header
/// or smuggle a path are stripped.
pub fn attachment_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '"' | '/' | '\\'))
        .collect();
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    if cleaned.is_empty() {
        "candidate_resume.pdf".to_string()
    } else {
        format!("{cleaned}_resume.pdf")
    }
}

/// Base64 data URL embedding the PDF bytes for the inline viewer iframe.
pub fn pdf_data_url(bytes: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", BASE64.encode(bytes))
}

/// The candidate listing page.
#[derive(Template)]
#[template(path = "candidates.html")]
pub struct CandidatesPage {
    pub positions: Vec<String>,
    pub selected_position: String,
    pub min_score: i32,
    pub panels: Vec<CandidatePanel>,
    pub shortlist_msg: String,
}

impl CandidatesPage {
    pub fn new(
        filter: &CandidateFilter,
        positions: Vec<String>,
        candidates: &[CandidateSummary],
        shortlist: &HashSet<Uuid>,
        shortlist_msg: String,
    ) -> Self {
        let selected_position = match &filter.position {
            PositionFilter::All => "all".to_string(),
            PositionFilter::Only(p) => p.clone(),
        };
        let panels = candidates
            .iter()
            .map(|c| CandidatePanel::from_summary(c, shortlist.contains(&c.id)))
            .collect();
        Self {
            positions,
            selected_position,
            min_score: filter.min_score,
            panels,
            shortlist_msg,
        }
    }
}

/// The inline resume viewer page.
#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumePage {
    pub name: String,
    pub pdf_data_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::store::make_candidate;

    #[test]
    fn test_status_class_boundary_at_80() {
        assert_eq!(status_class(80), "status-high");
        assert_eq!(status_class(79), "status-medium");
        assert_eq!(status_class(100), "status-high");
        assert_eq!(status_class(0), "status-medium");
    }

    #[test]
    fn test_missing_email_gets_placeholder() {
        let mut c = make_candidate("Alice", "data engineer", 85);
        c.email = None;
        let panel = CandidatePanel::from_summary(&c, false);
        assert_eq!(panel.email, MISSING_FIELD_PLACEHOLDER);
        // present fields pass through untouched
        assert_eq!(panel.phone, "+1 555 0100");
    }

    #[test]
    fn test_missing_summary_gets_its_own_placeholder() {
        let mut c = make_candidate("Alice", "data engineer", 85);
        c.summary = None;
        let panel = CandidatePanel::from_summary(&c, false);
        assert_eq!(panel.summary, MISSING_SUMMARY_PLACEHOLDER);
    }

    #[test]
    fn test_position_is_title_cased() {
        let c = make_candidate("Alice", "senior data engineer", 85);
        let panel = CandidatePanel::from_summary(&c, false);
        assert_eq!(panel.position, "Senior Data Engineer");
    }

    #[test]
    fn test_title_case_handles_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("rust"), "Rust");
    }

    #[test]
    fn test_attachment_filename_replaces_spaces() {
        assert_eq!(attachment_filename("Jane Doe"), "Jane_Doe_resume.pdf");
    }

    #[test]
    fn test_attachment_filename_strips_header_breakers() {
        assert_eq!(
            attachment_filename("Ja\"ne/Do\\e"),
            "JaneDoe_resume.pdf"
        );
    }

    #[test]
    fn test_attachment_filename_empty_name_fallback() {
        assert_eq!(attachment_filename("  "), "candidate_resume.pdf");
    }

    #[test]
    fn test_pdf_data_url_roundtrips() {
        let payload = b"%PDF-1.4 minimal";
        let url = pdf_data_url(payload);
        let encoded = url.strip_prefix("data:application/pdf;base64,").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), payload);
    }

    #[test]
    fn test_empty_listing_renders_empty_state() {
        let page = CandidatesPage::new(
            &CandidateFilter::default(),
            vec!["data engineer".to_string()],
            &[],
            &HashSet::new(),
            String::new(),
        );
        let html = page.render().unwrap();
        assert!(html.contains("No resumes match the selected criteria"));
        assert!(!html.contains("Found"));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_listing_shows_count_and_panels() {
        let candidates = vec![
            make_candidate("Alice", "data engineer", 92),
            make_candidate("Bob", "data engineer", 75),
        ];
        let page = CandidatesPage::new(
            &CandidateFilter::default(),
            vec!["data engineer".to_string()],
            &candidates,
            &HashSet::new(),
            String::new(),
        );
        let html = page.render().unwrap();
        assert!(html.contains("Found 2 candidates"));
        assert!(html.contains("Alice"));
        assert!(html.contains("92/100"));
        assert!(html.contains("status-badge status-high"));
        assert!(html.contains("status-badge status-medium"));
        assert!(!html.contains("No resumes match"));
    }

    #[test]
    fn test_shortlisted_panel_is_marked() {
        let c = make_candidate("Alice", "data engineer", 92);
        let shortlist: HashSet<Uuid> = [c.id].into_iter().collect();
        let page = CandidatesPage::new(
            &CandidateFilter::default(),
            vec![],
            &[c],
            &shortlist,
            "Alice added to shortlist!".to_string(),
        );
        let html = page.render().unwrap();
        assert!(html.contains("Alice added to shortlist!"));
        assert!(html.contains("Shortlisted"));
    }

    #[test]
    fn test_selected_position_marked_in_dropdown() {
        let filter = CandidateFilter::from_inputs(Some("data engineer"), Some(70));
        let page = CandidatesPage::new(
            &filter,
            vec!["backend developer".to_string(), "data engineer".to_string()],
            &[],
            &HashSet::new(),
            String::new(),
        );
        let html = page.render().unwrap();
        assert!(html.contains(r#"value="data engineer" selected"#));
        assert!(!html.contains(r#"value="backend developer" selected"#));
    }

    #[test]
    fn test_resume_page_embeds_payload() {
        let page = ResumePage {
            name: "Alice".to_string(),
            pdf_data_url: pdf_data_url(b"%PDF-1.4"),
        };
        let html = page.render().unwrap();
        assert!(html.contains("data:application/pdf;base64,"));
        assert!(html.contains("Alice"));
    }
}
