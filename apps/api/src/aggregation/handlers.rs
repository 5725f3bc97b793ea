//! Axum route handlers for the dashboard and vivier views.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::aggregation::dashboard::{build_dashboard, DashboardSummary};
use crate::aggregation::vivier::{build_vivier, VivierRow, VivierStatus};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub top: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VivierQuery {
    #[serde(default)]
    pub zero_only: bool,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardSummary> {
    let top = query.top.unwrap_or(state.config.dashboard_top_positions);
    let session = state.session.read().await;
    Json(build_dashboard(session.catalog(), session.candidates(), top))
}

/// GET /api/v1/vivier
///
/// `?zero_only=true` keeps only open positions nobody wished for.
pub async fn handle_vivier(
    State(state): State<AppState>,
    Query(query): Query<VivierQuery>,
) -> Json<Vec<VivierRow>> {
    let session = state.session.read().await;
    let rows = build_vivier(session.catalog(), session.candidates())
        .into_iter()
        .filter(|row| !query.zero_only || row.status == VivierStatus::Zero)
        .collect();
    Json(rows)
}

/// GET /api/v1/vivier/:title
pub async fn handle_vivier_position(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<VivierRow>, AppError> {
    let session = state.session.read().await;
    build_vivier(session.catalog(), session.candidates())
        .into_iter()
        .find(|row| row.position == title)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No open position titled '{title}'")))
}
