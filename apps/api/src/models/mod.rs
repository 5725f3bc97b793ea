pub mod candidate;
pub mod position;
