use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::ResumeIntake;
use crate::errors::AppError;
use crate::intake::validation::{validate_job_submission, validate_resume_file};
use crate::models::evaluation::MatchRecord;
use crate::models::job::{JobPosting, JobSubmission};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ResumeUploadResponse {
    pub message: String,
    pub resume_id: i64,
    pub extracted_skills: Vec<String>,
    pub experience_years: u32,
    pub job_role: String,
    pub location: String,
}

#[derive(Serialize)]
pub struct JobPostResponse {
    pub message: String,
    pub job_id: i64,
    pub required_skills: Vec<String>,
    pub experience_required: u32,
    pub location: String,
}

#[derive(Serialize)]
pub struct ResumeDetailResponse {
    pub resume: ResumeRecord,
    pub evaluations: Vec<MatchRecord>,
}

#[derive(Deserialize)]
pub struct JobListQuery {
    #[serde(default = "default_active_only")]
    pub active_only: bool,
}

fn default_active_only() -> bool {
    true
}

/// POST /api/v1/resumes
///
/// Multipart upload: a `file` part plus optional `job_role` and `location`
/// text parts. Validation happens locally before the engine is invoked.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut job_role: Option<String> = None;
    let mut location: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if filename.is_empty() {
                    return Err(AppError::Validation(
                        "File part is missing a filename".to_string(),
                    ));
                }
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                // Only the most recent file part is retained.
                file = Some((filename, content));
            }
            "job_role" => {
                job_role = Some(read_text_field(field).await?);
            }
            "location" => {
                location = Some(read_text_field(field).await?);
            }
            _ => {}
        }
    }

    let (filename, content) =
        file.ok_or_else(|| AppError::Validation("Missing required 'file' part".to_string()))?;
    let file_type = validate_resume_file(&filename, content.len() as u64)
        .map_err(|e| AppError::Validation(e.message))?;

    let _permit = state
        .intake_slot
        .try_acquire()
        .map_err(|_| AppError::Busy)?;

    let size_bytes = content.len() as u64;
    let intake = ResumeIntake {
        filename: filename.clone(),
        file_type: file_type.clone(),
        content,
        job_role,
        location,
    };
    let analysis = state.engine.analyze_resume(&intake).await?;

    let record = state
        .store
        .insert_resume(ResumeRecord {
            id: 0,
            filename,
            file_type,
            size_bytes,
            job_role: analysis.job_role.clone(),
            location: analysis.location.clone(),
            experience_years: analysis.experience_years,
            extracted_skills: analysis.extracted_skills.clone(),
            uploaded_at: Utc::now(),
        })
        .await;

    info!(resume_id = record.id, filename = %record.filename, "resume analyzed");

    Ok(Json(ResumeUploadResponse {
        message: "Resume uploaded successfully".to_string(),
        resume_id: record.id,
        extracted_skills: analysis.extracted_skills,
        experience_years: analysis.experience_years,
        job_role: analysis.job_role,
        location: analysis.location,
    }))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let resume = state
        .store
        .resume(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    let evaluations = state.store.evaluations_for_resume(id).await;
    Ok(Json(ResumeDetailResponse {
        resume,
        evaluations,
    }))
}

/// POST /api/v1/jobs
pub async fn handle_post_job(
    State(state): State<AppState>,
    Json(submission): Json<JobSubmission>,
) -> Result<Json<JobPostResponse>, AppError> {
    let errors = validate_job_submission(&submission);
    if !errors.is_empty() {
        let detail = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AppError::Validation(detail));
    }

    let _permit = state
        .intake_slot
        .try_acquire()
        .map_err(|_| AppError::Busy)?;

    let analysis = state.engine.analyze_job(&submission).await?;

    let posting = state
        .store
        .insert_job(JobPosting {
            id: 0,
            title: submission.title.trim().to_string(),
            company: submission.company.trim().to_string(),
            location: analysis.location.clone(),
            experience_required: analysis.experience_required,
            content: submission.content,
            required_skills: analysis.required_skills.clone(),
            is_active: true,
            posted_at: Utc::now(),
        })
        .await;

    info!(job_id = posting.id, title = %posting.title, "job posting created");

    Ok(Json(JobPostResponse {
        message: "Job posting created successfully".to_string(),
        job_id: posting.id,
        required_skills: analysis.required_skills,
        experience_required: analysis.experience_required,
        location: analysis.location,
    }))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListQuery>,
) -> Json<Vec<JobPosting>> {
    Json(state.store.jobs(params.active_only).await)
}
