use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::session::MobilitySession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single reviewer session. Saves take the write lock, so they are serialized.
    pub session: Arc<RwLock<MobilitySession>>,
    pub config: Config,
}

impl AppState {
    pub fn new(session: MobilitySession, config: Config) -> Self {
        AppState {
            session: Arc::new(RwLock::new(session)),
            config,
        }
    }
}
