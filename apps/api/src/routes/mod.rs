pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::dashboard;
use crate::intake::handlers as intake;
use crate::intake::validation::MAX_UPLOAD_BYTES;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake API
        .route("/api/v1/resumes", post(intake::handle_upload_resume))
        .route("/api/v1/resumes/:id", get(intake::handle_get_resume))
        .route(
            "/api/v1/jobs",
            post(intake::handle_post_job).get(intake::handle_list_jobs),
        )
        // Results API
        .route("/api/v1/results", get(matching::handle_get_results))
        // Dashboard API
        .route(
            "/api/v1/dashboard/stats",
            get(dashboard::handle_dashboard_stats),
        )
        // Validation caps files at 10 MB; leave headroom for the other
        // multipart parts so the limit is enforced by validation, not axum.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES as usize + 64 * 1024))
        .with_state(state)
}
