/// Default minimum-score threshold shown when the page is first loaded.
pub const DEFAULT_MIN_SCORE: i32 = 70;

/// Position half of the filter: either everything, or one exact job title
/// drawn from the distinct positions present in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionFilter {
    All,
    Only(String),
}

/// The full listing filter. Built from the page's query parameters; absent or
/// out-of-range inputs normalize to safe values rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    pub position: PositionFilter,
    pub min_score: i32,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            position: PositionFilter::All,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl CandidateFilter {
    /// Normalizes raw form inputs into a filter.
    /// Missing or "all" position (case-insensitive) selects everything;
    /// missing threshold falls back to the default; any threshold is clamped
    /// into 0..=100.
    pub fn from_inputs(position: Option<&str>, min_score: Option<i32>) -> Self {
        let position = match position {
            Some(p) if !p.trim().is_empty() && !p.trim().eq_ignore_ascii_case("all") => {
                PositionFilter::Only(p.trim().to_string())
            }
            _ => PositionFilter::All,
        };
        Self {
            position,
            min_score: min_score.unwrap_or(DEFAULT_MIN_SCORE).clamp(0, 100),
        }
    }
}
