use serde::{Deserialize, Serialize};

/// Occupancy of a position. Open positions accept wishes; occupied ones are
/// where candidates currently sit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PositionStatus {
    Open,
    Occupied,
}

impl PositionStatus {
    pub fn from_open_flag(initially_open: bool) -> Self {
        if initially_open {
            PositionStatus::Open
        } else {
            PositionStatus::Occupied
        }
    }

    /// Case-insensitive parse of a query-string token.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "open" => Some(PositionStatus::Open),
            "occupied" => Some(PositionStatus::Occupied),
            _ => None,
        }
    }
}

/// A row of the reference catalog. The title is the position's identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub department: String,
    pub title: String,
    pub initially_open: bool,
    pub status: PositionStatus,
}

impl Position {
    pub fn new(department: &str, title: &str, initially_open: bool) -> Self {
        Position {
            department: department.to_string(),
            title: title.to_string(),
            initially_open,
            status: PositionStatus::from_open_flag(initially_open),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == PositionStatus::Open
    }
}
