pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_listing))
        .route(
            "/candidates/:id/resume/download",
            get(handlers::handle_download),
        )
        .route("/candidates/:id/resume/view", get(handlers::handle_view))
        .route(
            "/candidates/:id/shortlist",
            post(handlers::handle_shortlist),
        )
        .with_state(state)
}
