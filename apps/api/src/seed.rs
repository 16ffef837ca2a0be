//! Demo dataset: the fixed records served until a real scoring backend
//! exists. Loaded at startup unless `SEED_DEMO_DATA=false`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::matching::classify::Verdict;
use crate::models::evaluation::MatchRecord;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeRecord;
use crate::store::MatchStore;

pub async fn seed_demo_data(store: &MatchStore) -> Result<()> {
    store
        .load_dataset(demo_resumes()?, demo_jobs()?, demo_match_records()?)
        .await;
    Ok(())
}

fn ts(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid demo timestamp: {raw}"))?
        .with_timezone(&Utc))
}

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Verdicts are derived from the overall score at construction, so the
/// shipped data always agrees with the classification thresholds.
#[allow(clippy::too_many_arguments)]
fn match_record(
    id: i64,
    resume_id: i64,
    job_id: i64,
    candidate_name: &str,
    job_title: &str,
    scores: (f64, f64, f64, f64),
    matched: &[&str],
    missing: &[&str],
    created_at: &str,
) -> Result<MatchRecord> {
    let (overall, skills_match, semantic, experience) = scores;
    Ok(MatchRecord {
        id,
        resume_id,
        job_id,
        candidate_name: candidate_name.to_string(),
        job_title: job_title.to_string(),
        overall_score: overall,
        skills_match_score: skills_match,
        semantic_similarity_score: semantic,
        experience_score: experience,
        verdict: Verdict::from_score(overall),
        matched_skills: skills(matched),
        missing_skills: skills(missing),
        created_at: ts(created_at)?,
    })
}

pub fn demo_match_records() -> Result<Vec<MatchRecord>> {
    Ok(vec![
        match_record(
            1,
            123,
            456,
            "John Smith",
            "Senior Python Developer",
            (87.5, 92.0, 85.0, 85.0),
            &["Python", "Django", "PostgreSQL", "AWS"],
            &["Kubernetes", "Redis"],
            "2024-01-15T10:30:00Z",
        )?,
        match_record(
            2,
            124,
            456,
            "Sarah Johnson",
            "Senior Python Developer",
            (72.3, 78.0, 70.0, 69.0),
            &["Python", "Flask", "MySQL"],
            &["Django", "PostgreSQL", "AWS", "Docker"],
            "2024-01-15T09:15:00Z",
        )?,
        match_record(
            3,
            125,
            457,
            "Mike Chen",
            "Data Scientist",
            (91.2, 95.0, 88.0, 90.0),
            &["Python", "Machine Learning", "TensorFlow", "Pandas", "SQL"],
            &["PyTorch"],
            "2024-01-14T16:45:00Z",
        )?,
        match_record(
            4,
            126,
            458,
            "Emily Davis",
            "Full Stack Developer",
            (45.8, 52.0, 42.0, 43.0),
            &["JavaScript", "HTML", "CSS"],
            &["React", "Node.js", "MongoDB", "Docker", "AWS"],
            "2024-01-14T14:20:00Z",
        )?,
    ])
}

fn resume(
    id: i64,
    filename: &str,
    job_role: &str,
    location: &str,
    experience_years: u32,
    extracted: &[&str],
    uploaded_at: &str,
) -> Result<ResumeRecord> {
    Ok(ResumeRecord {
        id,
        filename: filename.to_string(),
        file_type: "pdf".to_string(),
        size_bytes: 184_320,
        job_role: job_role.to_string(),
        location: location.to_string(),
        experience_years,
        extracted_skills: skills(extracted),
        uploaded_at: ts(uploaded_at)?,
    })
}

pub fn demo_resumes() -> Result<Vec<ResumeRecord>> {
    Ok(vec![
        resume(
            123,
            "john_smith.pdf",
            "Senior Python Developer",
            "San Francisco, CA",
            6,
            &["Python", "Django", "PostgreSQL", "AWS"],
            "2024-01-15T10:28:00Z",
        )?,
        resume(
            124,
            "sarah_johnson.pdf",
            "Backend Developer",
            "Austin, TX",
            4,
            &["Python", "Flask", "MySQL"],
            "2024-01-15T09:12:00Z",
        )?,
        resume(
            125,
            "mike_chen.pdf",
            "Data Scientist",
            "New York, NY",
            5,
            &["Python", "Machine Learning", "TensorFlow", "Pandas", "SQL"],
            "2024-01-14T16:40:00Z",
        )?,
        resume(
            126,
            "emily_davis.pdf",
            "Full Stack Developer",
            "Remote",
            1,
            &["JavaScript", "HTML", "CSS"],
            "2024-01-14T14:15:00Z",
        )?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: i64,
    title: &str,
    company: &str,
    location: &str,
    experience_required: u32,
    content: &str,
    required: &[&str],
    posted_at: &str,
) -> Result<JobPosting> {
    Ok(JobPosting {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        experience_required,
        content: content.to_string(),
        required_skills: skills(required),
        is_active: true,
        posted_at: ts(posted_at)?,
    })
}

pub fn demo_jobs() -> Result<Vec<JobPosting>> {
    Ok(vec![
        job(
            456,
            "Senior Python Developer",
            "TechCorp Inc.",
            "San Francisco, CA",
            5,
            "Own backend services end to end: Django APIs, PostgreSQL schemas, \
             and AWS deployments for a high-traffic platform.",
            &["Python", "Django", "PostgreSQL", "AWS", "Docker"],
            "2024-01-15T08:00:00Z",
        )?,
        job(
            457,
            "Data Scientist",
            "AI Solutions Ltd.",
            "New York, NY",
            3,
            "Build and ship ML models for customer analytics; strong Python \
             and TensorFlow experience expected.",
            &["Python", "Machine Learning", "TensorFlow", "Pandas", "SQL", "PyTorch"],
            "2024-01-14T08:00:00Z",
        )?,
        job(
            458,
            "Full Stack Developer",
            "StartupXYZ",
            "Remote",
            2,
            "Ship features across a React frontend and Node.js services \
             backed by MongoDB.",
            &["JavaScript", "React", "Node.js", "MongoDB", "Docker", "AWS"],
            "2024-01-13T08:00:00Z",
        )?,
    ])
}
