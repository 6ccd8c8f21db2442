use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One candidate record as shown on the listing page. Excludes the resume
/// payload; the byte-stream actions fetch that separately by id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateSummary {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub summary: Option<String>,
    /// Produced upstream by the scoring pipeline. Invariant: 0..=100.
    pub llm_score: i32,
    pub processed_at: DateTime<Utc>,
}

/// The stored resume payload for one candidate, plus the name used to
/// generate the download filename.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeFile {
    pub name: String,
    pub resume: Vec<u8>,
}
