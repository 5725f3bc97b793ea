// Demand tallies, vivier rosters and the dashboard built on top of them.

pub mod dashboard;
pub mod demand;
pub mod handlers;
pub mod vivier;
