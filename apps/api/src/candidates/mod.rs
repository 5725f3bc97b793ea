// Candidate generation and the review-form view.

pub mod generator;
pub mod handlers;
pub mod names;
