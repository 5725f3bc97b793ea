// Reference catalog of positions and the catalog browser view.

pub mod browser;
pub mod data;
pub mod handlers;
