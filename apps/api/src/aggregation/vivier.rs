//! Vivier: for each open position, the candidates who wished for it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::Candidate;
use crate::models::position::Position;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VivierStatus {
    Zero,
    Active,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VivierEntry {
    pub candidate_id: Uuid,
    pub name: String,
    pub rank: u8,
    /// Display tag, e.g. "Léa Bernard (Vœu 2)".
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VivierRow {
    pub position: String,
    pub department: String,
    pub roster: Vec<VivierEntry>,
    pub count: usize,
    pub status: VivierStatus,
}

pub fn format_tag(name: &str, rank: u8) -> String {
    format!("{name} (Vœu {rank})")
}

/// One row per open position, in catalog order. Roster entries follow
/// candidate order.
pub fn build_vivier(catalog: &[Position], candidates: &[Candidate]) -> Vec<VivierRow> {
    catalog
        .iter()
        .filter(|p| p.is_open())
        .map(|position| {
            let roster: Vec<VivierEntry> = candidates
                .iter()
                .filter_map(|c| {
                    c.wish_rank(&position.title).map(|rank| VivierEntry {
                        candidate_id: c.id,
                        name: c.name.clone(),
                        rank,
                        tag: format_tag(&c.name, rank),
                    })
                })
                .collect();
            let count = roster.len();
            let status = if roster.is_empty() {
                VivierStatus::Zero
            } else {
                VivierStatus::Active
            };
            VivierRow {
                position: position.title.clone(),
                department: position.department.clone(),
                roster,
                count,
                status,
            }
        })
        .collect()
}
