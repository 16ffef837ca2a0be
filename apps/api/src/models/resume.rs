use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: i64,
    pub filename: String,
    /// Lowercased file extension: pdf, docx, or txt.
    pub file_type: String,
    pub size_bytes: u64,
    pub job_role: String,
    pub location: String,
    pub experience_years: u32,
    pub extracted_skills: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}
