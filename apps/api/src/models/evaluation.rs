use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::classify::Verdict;

/// One resume-to-job comparison outcome: the composite score, its
/// per-dimension sub-scores, and the skill overlap behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub resume_id: i64,
    pub job_id: i64,
    pub candidate_name: String,
    pub job_title: String,
    /// Primary ranking value, 0–100. Drives the verdict.
    pub overall_score: f64,
    pub skills_match_score: f64,
    pub semantic_similarity_score: f64,
    pub experience_score: f64,
    pub verdict: Verdict,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}
