use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateSummary, ResumeFile};
use crate::screening::filter::{CandidateFilter, PositionFilter};

/// Read-only access to candidate records. Implement this to swap the backing
/// store without touching handlers or rendering.
///
/// Carried in `AppState` as `Arc<dyn CandidateStore>`.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Distinct positions present in the store, sorted ascending.
    /// Populates the position selector on the listing page.
    async fn distinct_positions(&self) -> Result<Vec<String>, AppError>;

    /// Candidates matching the filter, sorted by score descending.
    /// An empty result is a normal outcome, not an error.
    async fn list(&self, filter: &CandidateFilter) -> Result<Vec<CandidateSummary>, AppError>;

    /// The stored resume payload for one candidate.
    async fn fetch_resume(&self, id: Uuid) -> Result<ResumeFile, AppError>;
}

/// Columns the listing page needs. The `resume` payload is deliberately
/// excluded so a render never hauls PDF bytes for every row.
const SUMMARY_COLUMNS: &str = "id, name, position, email, phone, education, \
     experience, skills, summary, llm_score, processed_at";

/// Postgres-backed candidate store.
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Builds the listing query: score threshold always applies, the position
/// equality clause only when a specific position is selected.
fn build_list_query(filter: &CandidateFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "SELECT {SUMMARY_COLUMNS} FROM candidates WHERE llm_score >= "
    ));
    qb.push_bind(filter.min_score);
    if let PositionFilter::Only(position) = &filter.position {
        qb.push(" AND position = ");
        qb.push_bind(position.clone());
    }
    qb.push(" ORDER BY llm_score DESC");
    qb
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn distinct_positions(&self) -> Result<Vec<String>, AppError> {
        let positions: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT position FROM candidates ORDER BY position ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(positions)
    }

    async fn list(&self, filter: &CandidateFilter) -> Result<Vec<CandidateSummary>, AppError> {
        let rows = build_list_query(filter)
            .build_query_as::<CandidateSummary>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_resume(&self, id: Uuid) -> Result<ResumeFile, AppError> {
        let file: Option<ResumeFile> =
            sqlx::query_as("SELECT name, resume FROM candidates WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        file.ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
    }
}

/// In-memory store with the same query semantics as the Postgres one.
/// Used by tests to exercise filter/sort behavior without a database.
#[cfg(test)]
pub struct MemoryCandidateStore {
    records: Vec<(CandidateSummary, Vec<u8>)>,
}

#[cfg(test)]
impl MemoryCandidateStore {
    pub fn new(records: Vec<(CandidateSummary, Vec<u8>)>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn distinct_positions(&self) -> Result<Vec<String>, AppError> {
        let positions: std::collections::BTreeSet<String> = self
            .records
            .iter()
            .map(|(c, _)| c.position.clone())
            .collect();
        Ok(positions.into_iter().collect())
    }

    async fn list(&self, filter: &CandidateFilter) -> Result<Vec<CandidateSummary>, AppError> {
        let mut rows: Vec<CandidateSummary> = self
            .records
            .iter()
            .map(|(c, _)| c.clone())
            .filter(|c| c.llm_score >= filter.min_score)
            .filter(|c| match &filter.position {
                PositionFilter::All => true,
                PositionFilter::Only(p) => &c.position == p,
            })
            .collect();
        rows.sort_by(|a, b| b.llm_score.cmp(&a.llm_score));
        Ok(rows)
    }

    async fn fetch_resume(&self, id: Uuid) -> Result<ResumeFile, AppError> {
        self.records
            .iter()
            .find(|(c, _)| c.id == id)
            .map(|(c, bytes)| ResumeFile {
                name: c.name.clone(),
                resume: bytes.clone(),
            })
            .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
    }
}

/// Test fixture shared by the screening test modules.
#[cfg(test)]
pub fn make_candidate(name: &str, position: &str, score: i32) -> CandidateSummary {
    CandidateSummary {
        id: Uuid::new_v4(),
        name: name.to_string(),
        position: position.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        phone: Some("+1 555 0100".to_string()),
        education: Some("BSc Computer Science".to_string()),
        experience: Some("5 years backend work".to_string()),
        skills: Some("Rust, SQL".to_string()),
        summary: Some("Solid systems background.".to_string()),
        llm_score: score,
        processed_at: chrono::Utc::now(),
    }
}
