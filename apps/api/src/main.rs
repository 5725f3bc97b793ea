mod aggregation;
mod candidates;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod session;
mod state;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::session::MobilitySession;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mobility API v{}", env!("CARGO_PKG_VERSION"));

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Candidate generation seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let session = MobilitySession::generate(&config.generation_settings(), &mut rng)
        .context("failed to generate the candidate pool")?;

    let state = AppState::new(session, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
