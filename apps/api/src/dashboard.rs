//! Dashboard statistics: a flat snapshot recomputed wholesale from the
//! current dataset on every request.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::matching::classify::Verdict;
use crate::models::evaluation::MatchRecord;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_resumes: usize,
    pub total_jobs: usize,
    pub total_evaluations: usize,
    pub high_matches: usize,
    pub medium_matches: usize,
    pub low_matches: usize,
    /// Mean overall score across all evaluations, two decimals. Zero when
    /// there are none.
    pub average_score: f64,
}

pub fn compute_stats(
    evaluations: &[MatchRecord],
    total_resumes: usize,
    total_jobs: usize,
) -> DashboardStats {
    let mut high_matches = 0;
    let mut medium_matches = 0;
    let mut low_matches = 0;

    for record in evaluations {
        match record.verdict {
            Verdict::High => high_matches += 1,
            Verdict::Medium => medium_matches += 1,
            Verdict::Low => low_matches += 1,
        }
    }

    let average_score = if evaluations.is_empty() {
        0.0
    } else {
        let sum: f64 = evaluations.iter().map(|e| e.overall_score).sum();
        round2(sum / evaluations.len() as f64)
    };

    DashboardStats {
        total_resumes,
        total_jobs,
        total_evaluations: evaluations.len(),
        high_matches,
        medium_matches,
        low_matches,
        average_score,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// GET /api/v1/dashboard/stats
pub async fn handle_dashboard_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let evaluations = state.store.evaluations().await;
    let (total_resumes, total_jobs) = state.store.counts().await;
    Json(compute_stats(&evaluations, total_resumes, total_jobs))
}
