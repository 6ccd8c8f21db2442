use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect},
    Form,
};
use askama::Template;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::filter::{CandidateFilter, DEFAULT_MIN_SCORE};
use crate::screening::view::{attachment_filename, pdf_data_url, CandidatesPage, ResumePage};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub position: Option<String>,
    pub min_score: Option<i32>,
    /// Set by the shortlist redirect so the page can show a success banner.
    pub shortlisted: Option<Uuid>,
}

/// GET / - the candidate database page.
///
/// Every filter change is a fresh GET: one distinct-positions read plus one
/// filtered listing read, then a full re-render.
pub async fn handle_listing(
    State(state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> Result<Html<String>, AppError> {
    let filter = CandidateFilter::from_inputs(params.position.as_deref(), params.min_score);

    let positions = state.store.distinct_positions().await?;
    let candidates = state.store.list(&filter).await?;
    tracing::debug!(count = candidates.len(), ?filter, "listing candidates");

    // The banner only resolves against the freshly listed records; the
    // shortlist action redirects back with the same filters, so the candidate
    // it names is on this page.
    let banner = params
        .shortlisted
        .and_then(|id| candidates.iter().find(|c| c.id == id))
        .map(|c| format!("{} added to shortlist!", c.name))
        .unwrap_or_default();

    let shortlist = state.shortlist.read().await;
    let page = CandidatesPage::new(&filter, positions, &candidates, &shortlist, banner);
    Ok(Html(page.render()?))
}

/// GET /candidates/:id/resume/download - the stored bytes, byte-for-byte,
/// as an attachment with a generated filename.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let file = state.store.fetch_resume(id).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        attachment_filename(&file.name)
    );
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.resume,
    ))
}

/// GET /candidates/:id/resume/view - the same bytes rendered inline through
/// a base64 data URL inside an embedded viewer.
pub async fn handle_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let file = state.store.fetch_resume(id).await?;
    let page = ResumePage {
        name: file.name,
        pdf_data_url: pdf_data_url(&file.resume),
    };
    Ok(Html(page.render()?))
}

#[derive(Debug, Default, Deserialize)]
pub struct ShortlistForm {
    pub position: Option<String>,
    pub min_score: Option<i32>,
}

/// POST /candidates/:id/shortlist - session-only feedback. The id goes into
/// an in-memory set and the browser is sent back to the same filtered view;
/// nothing is written to the store.
pub async fn handle_shortlist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ShortlistForm>,
) -> Result<Redirect, AppError> {
    state.shortlist.write().await.insert(id);
    tracing::info!(candidate_id = %id, "candidate shortlisted (session only)");

    let position = form.position.unwrap_or_else(|| "all".to_string());
    let min_score = form.min_score.unwrap_or(DEFAULT_MIN_SCORE);
    let target = format!(
        "/?position={}&min_score={}&shortlisted={}",
        urlencoding::encode(&position),
        min_score,
        id
    );
    Ok(Redirect::to(&target))
}
