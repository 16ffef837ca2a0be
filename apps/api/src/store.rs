//! Transient in-memory tables. Nothing here survives a restart.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::models::evaluation::MatchRecord;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeRecord;

#[derive(Default)]
struct StoreInner {
    resumes: Vec<ResumeRecord>,
    jobs: Vec<JobPosting>,
    evaluations: Vec<MatchRecord>,
    next_resume_id: i64,
    next_job_id: i64,
    next_evaluation_id: i64,
}

/// Shared handle to the in-memory dataset. Cheap to clone; all handlers see
/// the same tables. Locks are held only for the copy, never across awaits.
#[derive(Clone)]
pub struct MatchStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MatchStore {
    pub fn new() -> Self {
        info!("In-memory store initialized; state is transient");
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                next_resume_id: 1,
                next_job_id: 1,
                next_evaluation_id: 1,
                ..Default::default()
            })),
        }
    }

    /// Bulk-loads a prebuilt dataset, keeping the ids it carries and
    /// advancing the id counters past the highest loaded value.
    pub async fn load_dataset(
        &self,
        resumes: Vec<ResumeRecord>,
        jobs: Vec<JobPosting>,
        evaluations: Vec<MatchRecord>,
    ) {
        let mut inner = self.inner.write().await;
        for resume in resumes {
            inner.next_resume_id = inner.next_resume_id.max(resume.id + 1);
            inner.resumes.push(resume);
        }
        for job in jobs {
            inner.next_job_id = inner.next_job_id.max(job.id + 1);
            inner.jobs.push(job);
        }
        for record in evaluations {
            inner.next_evaluation_id = inner.next_evaluation_id.max(record.id + 1);
            inner.evaluations.push(record);
        }
    }

    /// Inserts a resume, assigning the next id. Returns the stored record.
    pub async fn insert_resume(&self, mut record: ResumeRecord) -> ResumeRecord {
        let mut inner = self.inner.write().await;
        record.id = inner.next_resume_id;
        inner.next_resume_id += 1;
        inner.resumes.push(record.clone());
        record
    }

    /// Inserts a job posting, assigning the next id. Returns the stored posting.
    pub async fn insert_job(&self, mut posting: JobPosting) -> JobPosting {
        let mut inner = self.inner.write().await;
        posting.id = inner.next_job_id;
        inner.next_job_id += 1;
        inner.jobs.push(posting.clone());
        posting
    }

    pub async fn resume(&self, id: i64) -> Option<ResumeRecord> {
        let inner = self.inner.read().await;
        inner.resumes.iter().find(|r| r.id == id).cloned()
    }

    /// Snapshot of all match records in insertion order.
    pub async fn evaluations(&self) -> Vec<MatchRecord> {
        self.inner.read().await.evaluations.clone()
    }

    pub async fn evaluations_for_resume(&self, resume_id: i64) -> Vec<MatchRecord> {
        let inner = self.inner.read().await;
        inner
            .evaluations
            .iter()
            .filter(|e| e.resume_id == resume_id)
            .cloned()
            .collect()
    }

    pub async fn jobs(&self, active_only: bool) -> Vec<JobPosting> {
        let inner = self.inner.read().await;
        inner
            .jobs
            .iter()
            .filter(|j| !active_only || j.is_active)
            .cloned()
            .collect()
    }

    /// Table sizes for the dashboard: (resumes, jobs).
    pub async fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read().await;
        (inner.resumes.len(), inner.jobs.len())
    }
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::classify::Verdict;
    use chrono::Utc;

    fn resume(filename: &str) -> ResumeRecord {
        ResumeRecord {
            id: 0,
            filename: filename.to_string(),
            file_type: "pdf".to_string(),
            size_bytes: 1024,
            job_role: "Software Developer".to_string(),
            location: "Remote".to_string(),
            experience_years: 3,
            extracted_skills: vec!["Python".to_string()],
            uploaded_at: Utc::now(),
        }
    }

    fn evaluation(id: i64, resume_id: i64, score: f64) -> MatchRecord {
        MatchRecord {
            id,
            resume_id,
            job_id: 456,
            candidate_name: "John Smith".to_string(),
            job_title: "Senior Python Developer".to_string(),
            overall_score: score,
            skills_match_score: score,
            semantic_similarity_score: score,
            experience_score: score,
            verdict: Verdict::from_score(score),
            matched_skills: vec![],
            missing_skills: vec![],
            created_at: Utc::now(),
        }
    }

    fn job(id: i64, is_active: bool) -> JobPosting {
        JobPosting {
            id,
            title: "Senior Python Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            experience_required: 5,
            content: "We are hiring.".to_string(),
            required_skills: vec!["Python".to_string()],
            is_active,
            posted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MatchStore::new();
        let first = store.insert_resume(resume("a.pdf")).await;
        let second = store.insert_resume(resume("b.pdf")).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_load_dataset_preserves_ids_and_advances_counters() {
        let store = MatchStore::new();
        let mut seeded = resume("john_smith.pdf");
        seeded.id = 123;
        store.load_dataset(vec![seeded], vec![], vec![]).await;

        let next = store.insert_resume(resume("new.pdf")).await;
        assert_eq!(next.id, 124);
        assert!(store.resume(123).await.is_some());
    }

    #[tokio::test]
    async fn test_resume_lookup_miss_returns_none() {
        let store = MatchStore::new();
        assert!(store.resume(999).await.is_none());
    }

    #[tokio::test]
    async fn test_evaluations_for_resume_filters_by_owner() {
        let store = MatchStore::new();
        store
            .load_dataset(
                vec![],
                vec![],
                vec![
                    evaluation(1, 123, 87.5),
                    evaluation(2, 124, 72.3),
                    evaluation(3, 123, 45.8),
                ],
            )
            .await;

        let owned = store.evaluations_for_resume(123).await;
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|e| e.resume_id == 123));
    }

    #[tokio::test]
    async fn test_jobs_respects_active_only() {
        let store = MatchStore::new();
        store
            .load_dataset(vec![], vec![job(1, true), job(2, false)], vec![])
            .await;

        assert_eq!(store.jobs(true).await.len(), 1);
        assert_eq!(store.jobs(false).await.len(), 2);
    }
}
