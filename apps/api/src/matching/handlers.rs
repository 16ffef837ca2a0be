use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::filter::{ResultFilter, VerdictFilter};
use crate::matching::summary::{summarize, ResultSummary};
use crate::models::evaluation::MatchRecord;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub verdict: VerdictFilter,
    #[serde(default)]
    pub min_score: f64,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub results: Vec<MatchRecord>,
    pub summary: ResultSummary,
}

/// GET /api/v1/results
///
/// Filters the match list server-side and returns it with its summary.
/// An empty `results` list is a valid response, not an error.
pub async fn handle_get_results(
    State(state): State<AppState>,
    Query(params): Query<ResultsQuery>,
) -> Result<Json<ResultsResponse>, AppError> {
    if !(0.0..=100.0).contains(&params.min_score) {
        return Err(AppError::Validation(
            "min_score must be between 0 and 100".to_string(),
        ));
    }

    let filter = ResultFilter {
        search: params.search,
        verdict: params.verdict,
        min_score: params.min_score,
    };

    let records = state.store.evaluations().await;
    let results = filter.apply(&records);
    let summary = summarize(&results);

    Ok(Json(ResultsResponse { results, summary }))
}
