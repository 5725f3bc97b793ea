//! Axum route handlers for the catalog browser.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::catalog::browser::{filter_catalog, CatalogFilter, CatalogQuery};
use crate::catalog::data::departments;
use crate::errors::AppError;
use crate::models::position::Position;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PositionListResponse {
    pub count: usize,
    pub positions: Vec<Position>,
}

/// GET /api/v1/positions
///
/// `?search=` title substring, `?departments=a,b`, `?statuses=open,occupied`.
pub async fn handle_list_positions(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<PositionListResponse>, AppError> {
    let filter = CatalogFilter::from_query(&query)?;
    let session = state.session.read().await;

    let positions: Vec<Position> = filter_catalog(session.catalog(), &filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(PositionListResponse {
        count: positions.len(),
        positions,
    }))
}

/// GET /api/v1/positions/departments
pub async fn handle_list_departments(State(state): State<AppState>) -> Json<Vec<String>> {
    let session = state.session.read().await;
    Json(
        departments(session.catalog())
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
