use serde::{Deserialize, Serialize};

use crate::aggregation::demand::{
    rank_positions, tally_department_demand, tally_position_demand, DepartmentDemand,
    PositionDemand,
};
use crate::aggregation::vivier::{build_vivier, VivierStatus};
use crate::models::candidate::{Candidate, ReviewStatus};
use crate::models::position::Position;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewBreakdown {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub candidates: usize,
    pub open_positions: usize,
    pub occupied_positions: usize,
    pub positions_without_candidates: usize,
    pub total_wishes: usize,
    pub reviews: ReviewBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub metrics: DashboardMetrics,
    pub top_positions: Vec<PositionDemand>,
    pub department_demand: Vec<DepartmentDemand>,
}

pub fn build_dashboard(
    catalog: &[Position],
    candidates: &[Candidate],
    top_limit: usize,
) -> DashboardSummary {
    let tally = tally_position_demand(candidates);
    let open_positions = catalog.iter().filter(|p| p.is_open()).count();

    let positions_without_candidates = build_vivier(catalog, candidates)
        .iter()
        .filter(|row| row.status == VivierStatus::Zero)
        .count();

    let mut reviews = ReviewBreakdown::default();
    for candidate in candidates {
        match candidate.review_status {
            ReviewStatus::Pending => reviews.pending += 1,
            ReviewStatus::Approved => reviews.approved += 1,
            ReviewStatus::Rejected => reviews.rejected += 1,
        }
    }

    DashboardSummary {
        metrics: DashboardMetrics {
            candidates: candidates.len(),
            open_positions,
            occupied_positions: catalog.len() - open_positions,
            positions_without_candidates,
            total_wishes: tally.values().sum(),
            reviews,
        },
        top_positions: rank_positions(&tally, top_limit),
        department_demand: tally_department_demand(catalog, &tally),
    }
}
