//! Simulated analysis backend: fixed payloads behind real timers.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::engine::{AnalysisEngine, JobAnalysis, ResumeAnalysis, ResumeIntake};
use crate::errors::AppError;
use crate::models::job::JobSubmission;

/// Stand-in for a real extraction service. Sleeps for the configured
/// duration to imitate processing latency, then returns a fixed result;
/// it never fails. Caller-supplied role and location win over the canned
/// fallbacks.
pub struct SimulatedEngine {
    resume_delay: Duration,
    job_delay: Duration,
}

impl SimulatedEngine {
    pub fn new(resume_delay: Duration, job_delay: Duration) -> Self {
        Self {
            resume_delay,
            job_delay,
        }
    }
}

const EXTRACTED_SKILLS: &[&str] = &["Python", "React", "Machine Learning", "SQL", "Docker"];
const REQUIRED_SKILLS: &[&str] = &["Python", "Django", "PostgreSQL", "AWS", "Docker"];

fn owned(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

fn or_fallback(value: Option<&String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

#[async_trait]
impl AnalysisEngine for SimulatedEngine {
    async fn analyze_resume(&self, intake: &ResumeIntake) -> Result<ResumeAnalysis, AppError> {
        info!(
            filename = %intake.filename,
            file_type = %intake.file_type,
            size_bytes = intake.content.len(),
            "simulating resume analysis"
        );
        tokio::time::sleep(self.resume_delay).await;

        Ok(ResumeAnalysis {
            extracted_skills: owned(EXTRACTED_SKILLS),
            experience_years: 3,
            job_role: or_fallback(intake.job_role.as_ref(), "Software Developer"),
            location: or_fallback(intake.location.as_ref(), "San Francisco, CA"),
        })
    }

    async fn analyze_job(&self, submission: &JobSubmission) -> Result<JobAnalysis, AppError> {
        info!(title = %submission.title, "simulating job posting analysis");
        tokio::time::sleep(self.job_delay).await;

        let location = if submission.location.trim().is_empty() {
            "Remote".to_string()
        } else {
            submission.location.clone()
        };

        Ok(JobAnalysis {
            required_skills: owned(REQUIRED_SKILLS),
            experience_required: submission.experience_required,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn intake(job_role: Option<&str>, location: Option<&str>) -> ResumeIntake {
        ResumeIntake {
            filename: "resume.pdf".to_string(),
            file_type: "pdf".to_string(),
            content: Bytes::from_static(b"%PDF-1.4"),
            job_role: job_role.map(str::to_string),
            location: location.map(str::to_string),
        }
    }

    fn submission(location: &str, experience_required: u32) -> JobSubmission {
        JobSubmission {
            title: "Senior Python Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            location: location.to_string(),
            experience_required,
            content: "We are hiring.".to_string(),
        }
    }

    fn engine() -> SimulatedEngine {
        SimulatedEngine::new(Duration::from_millis(2000), Duration::from_millis(1500))
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_analysis_takes_the_configured_delay() {
        let start = tokio::time::Instant::now();
        engine()
            .analyze_resume(&intake(None, None))
            .await
            .expect("simulated engine never fails");
        assert_eq!(start.elapsed(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_job_analysis_takes_the_configured_delay() {
        let start = tokio::time::Instant::now();
        engine()
            .analyze_job(&submission("Remote", 5))
            .await
            .expect("simulated engine never fails");
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_fallbacks_apply_when_fields_missing() {
        let analysis = engine()
            .analyze_resume(&intake(None, None))
            .await
            .expect("simulated engine never fails");
        assert_eq!(analysis.job_role, "Software Developer");
        assert_eq!(analysis.location, "San Francisco, CA");
        assert_eq!(analysis.experience_years, 3);
        assert_eq!(analysis.extracted_skills.len(), 5);
        assert!(analysis.extracted_skills.contains(&"Python".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_caller_supplied_fields_win_over_fallbacks() {
        let analysis = engine()
            .analyze_resume(&intake(Some("Data Scientist"), Some("New York, NY")))
            .await
            .expect("simulated engine never fails");
        assert_eq!(analysis.job_role, "Data Scientist");
        assert_eq!(analysis.location, "New York, NY");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_role_falls_back() {
        let analysis = engine()
            .analyze_resume(&intake(Some("   "), None))
            .await
            .expect("simulated engine never fails");
        assert_eq!(analysis.job_role, "Software Developer");
    }

    #[tokio::test(start_paused = true)]
    async fn test_job_analysis_echoes_experience_and_defaults_location() {
        let analysis = engine()
            .analyze_job(&submission("  ", 4))
            .await
            .expect("simulated engine never fails");
        assert_eq!(analysis.experience_required, 4);
        assert_eq!(analysis.location, "Remote");
        assert!(analysis.required_skills.contains(&"Django".to_string()));
    }
}
