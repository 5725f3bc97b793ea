//! Wish-demand tallies per position and per department.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::data::departments;
use crate::models::candidate::Candidate;
use crate::models::position::Position;

pub type PositionTally = BTreeMap<String, usize>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionDemand {
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentDemand {
    pub department: String,
    pub count: usize,
}

/// Counts every non-empty wish slot, across all three ranks, per title.
/// Titles nobody wished for are absent.
pub fn tally_position_demand(candidates: &[Candidate]) -> PositionTally {
    let mut tally = PositionTally::new();
    for candidate in candidates {
        for (_, title) in candidate.ranked_wishes() {
            *tally.entry(title.to_string()).or_insert(0) += 1;
        }
    }
    tally
}

/// Sums position demand per department. Every catalog department is listed,
/// highest demand first, ties by name.
pub fn tally_department_demand(
    catalog: &[Position],
    position_tally: &PositionTally,
) -> Vec<DepartmentDemand> {
    let mut rows: Vec<DepartmentDemand> = departments(catalog)
        .into_iter()
        .map(|department| {
            let count = catalog
                .iter()
                .filter(|p| p.department == department)
                .map(|p| position_tally.get(&p.title).copied().unwrap_or(0))
                .sum();
            DepartmentDemand {
                department: department.to_string(),
                count,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.department.cmp(&b.department)));
    rows
}

/// Most wished-for positions, highest count first, ties by title.
pub fn rank_positions(position_tally: &PositionTally, limit: usize) -> Vec<PositionDemand> {
    let mut rows: Vec<PositionDemand> = position_tally
        .iter()
        .map(|(title, count)| PositionDemand {
            title: title.clone(),
            count: *count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.title.cmp(&b.title)));
    rows.truncate(limit);
    rows
}
