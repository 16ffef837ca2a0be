//! Analysis engine: pluggable, trait-based collaborator that turns raw
//! intake into extraction results.
//!
//! Default: `SimulatedEngine` (canned payloads behind real timers). A real
//! parsing/scoring backend slots in behind the same trait without touching
//! the endpoint or handler code.
//!
//! `AppState` holds an `Arc<dyn AnalysisEngine>`, constructed at startup.

pub mod simulated;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::JobSubmission;

/// Raw resume intake as accepted by the upload endpoint. The engine decides
/// what to do with the bytes; the simulated backend ignores them.
#[derive(Debug, Clone)]
pub struct ResumeIntake {
    pub filename: String,
    pub file_type: String,
    pub content: Bytes,
    pub job_role: Option<String>,
    pub location: Option<String>,
}

/// Extraction result for one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub extracted_skills: Vec<String>,
    pub experience_years: u32,
    pub job_role: String,
    pub location: String,
}

/// Extraction result for one job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub required_skills: Vec<String>,
    pub experience_required: u32,
    pub location: String,
}

/// The analysis seam. Errors surface as `AppError::Engine` (HTTP 502),
/// distinguishable from validation failures; callers cancel by dropping
/// the returned future.
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    async fn analyze_resume(&self, intake: &ResumeIntake) -> Result<ResumeAnalysis, AppError>;

    async fn analyze_job(&self, submission: &JobSubmission) -> Result<JobAnalysis, AppError>;
}
