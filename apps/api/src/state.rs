use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::screening::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only view over the candidate records. Swappable backend behind
    /// a trait so the query semantics are testable without Postgres.
    pub store: Arc<dyn CandidateStore>,
    /// Session-only shortlist. Never persisted; cleared on restart.
    pub shortlist: Arc<RwLock<HashSet<Uuid>>>,
    pub config: Config,
}
