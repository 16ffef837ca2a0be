use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Required experience in whole years.
    pub experience_required: u32,
    pub content: String,
    pub required_skills: Vec<String>,
    pub is_active: bool,
    pub posted_at: DateTime<Utc>,
}

/// Recruiter-entered posting as accepted by `POST /api/v1/jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSubmission {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience_required: u32,
    pub content: String,
}
