use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of ranked wish slots a candidate carries.
pub const WISH_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "pending" => Some(ReviewStatus::Pending),
            "approved" => Some(ReviewStatus::Approved),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    /// Title of an occupied catalog position.
    pub current_position: String,
    /// Ranked wishes, slot 0 is wish 1. Filled slots come first.
    pub wishes: [Option<String>; WISH_SLOTS],
    pub interview_date: NaiveDate,
    pub review_status: ReviewStatus,
    pub notes: String,
}

impl Candidate {
    /// Non-empty wishes with their 1-based rank.
    pub fn ranked_wishes(&self) -> impl Iterator<Item = (u8, &str)> {
        self.wishes
            .iter()
            .enumerate()
            .filter_map(|(slot, wish)| wish.as_deref().map(|title| (slot as u8 + 1, title)))
    }

    /// Rank of the first slot naming `title`, checked 1, then 2, then 3.
    pub fn wish_rank(&self, title: &str) -> Option<u8> {
        self.ranked_wishes()
            .find(|(_, wished)| *wished == title)
            .map(|(rank, _)| rank)
    }

    pub fn wish_count(&self) -> usize {
        self.wishes.iter().filter(|w| w.is_some()).count()
    }
}
