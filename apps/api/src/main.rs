mod config;
mod dashboard;
mod engine;
mod errors;
mod intake;
mod matching;
mod models;
mod routes;
mod seed;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::Semaphore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::engine::simulated::SimulatedEngine;
use crate::routes::build_router;
use crate::seed::seed_demo_data;
use crate::state::AppState;
use crate::store::MatchStore;

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

    info!("Starting ResuMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Transient in-memory store; nothing survives a restart
    let store = MatchStore::new();
    if config.seed_demo_data {
        seed_demo_data(&store).await?;
        info!("Demo dataset loaded");
    }

    // Simulated analysis engine; a real backend swaps in behind the trait
    let engine = Arc::new(SimulatedEngine::new(
        Duration::from_millis(config.resume_processing_ms),
        Duration::from_millis(config.job_processing_ms),
    ));
    info!(
        "Analysis engine initialized (simulated: resume {}ms, job {}ms)",
        config.resume_processing_ms, config.job_processing_ms
    );

    let state = AppState {
        store,
        engine,
        intake_slot: Arc::new(Semaphore::new(1)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
