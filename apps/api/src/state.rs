use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::engine::AnalysisEngine;
use crate::store::MatchStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: MatchStore,
    /// Pluggable analysis backend. Default: SimulatedEngine.
    pub engine: Arc<dyn AnalysisEngine>,
    /// Single intake slot: at most one analysis runs at a time. A second
    /// submission while one is pending is answered with 409, mirroring the
    /// client disabling its submit control.
    pub intake_slot: Arc<Semaphore>,
}
