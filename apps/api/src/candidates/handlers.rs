//! Axum route handlers for the candidate review form.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::data::find_position;
use crate::errors::AppError;
use crate::models::candidate::{Candidate, ReviewStatus};
use crate::models::position::Position;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CandidateListQuery {
    pub status: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: Uuid,
    pub name: String,
    pub current_position: String,
    pub wish_count: usize,
    pub interview_date: NaiveDate,
    pub review_status: ReviewStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PositionRef {
    pub title: String,
    pub department: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WishView {
    pub rank: u8,
    pub position: PositionRef,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateDetail {
    pub id: Uuid,
    pub name: String,
    pub current_position: PositionRef,
    pub wishes: Vec<WishView>,
    pub interview_date: NaiveDate,
    pub review_status: ReviewStatus,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub status: ReviewStatus,
    #[serde(default)]
    pub notes: String,
}

fn position_ref(catalog: &[Position], title: &str) -> PositionRef {
    PositionRef {
        title: title.to_string(),
        department: find_position(catalog, title).map(|p| p.department.clone()),
    }
}

fn candidate_detail(catalog: &[Position], candidate: &Candidate) -> CandidateDetail {
    CandidateDetail {
        id: candidate.id,
        name: candidate.name.clone(),
        current_position: position_ref(catalog, &candidate.current_position),
        wishes: candidate
            .ranked_wishes()
            .map(|(rank, title)| WishView {
                rank,
                position: position_ref(catalog, title),
            })
            .collect(),
        interview_date: candidate.interview_date,
        review_status: candidate.review_status,
        notes: candidate.notes.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/candidates
///
/// Optional `?status=pending|approved|rejected` and exact `?name=`.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<Json<Vec<CandidateSummary>>, AppError> {
    let status = match query.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(ReviewStatus::parse(raw).ok_or_else(|| {
            AppError::Validation(format!(
                "unknown review status '{raw}' (expected pending, approved or rejected)"
            ))
        })?),
    };

    let session = state.session.read().await;
    let selected: Vec<&Candidate> = match query.name.as_deref() {
        Some(name) => session.candidate_by_name(name).into_iter().collect(),
        None => session.candidates().iter().collect(),
    };

    let summaries = selected
        .into_iter()
        .filter(|c| status.map_or(true, |s| c.review_status == s))
        .map(|c| CandidateSummary {
            id: c.id,
            name: c.name.clone(),
            current_position: c.current_position.clone(),
            wish_count: c.wish_count(),
            interview_date: c.interview_date,
            review_status: c.review_status,
        })
        .collect();

    Ok(Json(summaries))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateDetail>, AppError> {
    let session = state.session.read().await;
    let candidate = session
        .candidate(id)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    Ok(Json(candidate_detail(session.catalog(), candidate)))
}

/// PUT /api/v1/candidates/:id/review
///
/// Saves the reviewer's decision and notes. Repeating a save is harmless.
pub async fn handle_save_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<CandidateDetail>, AppError> {
    let mut session = state.session.write().await;
    session.set_review(id, request.status, request.notes)?;

    let candidate = session
        .candidate(id)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate_detail(session.catalog(), candidate)))
}
