//! Result filtering: narrows the match list by search text, verdict, and a
//! minimum score. A stable filter: output order is input order.

use serde::Deserialize;

use crate::matching::classify::Verdict;
use crate::models::evaluation::MatchRecord;

/// Verdict criterion. `All` admits every record; the others require an
/// exact verdict match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum VerdictFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl VerdictFilter {
    pub fn admits(&self, verdict: Verdict) -> bool {
        match self {
            VerdictFilter::All => true,
            VerdictFilter::High => verdict == Verdict::High,
            VerdictFilter::Medium => verdict == Verdict::Medium,
            VerdictFilter::Low => verdict == Verdict::Low,
        }
    }
}

/// Narrowing criteria for the results list. A record is kept only when all
/// three predicates hold. `ResultFilter::default()` keeps everything.
#[derive(Debug, Clone, Default)]
pub struct ResultFilter {
    /// Case-insensitive substring over candidate name or job title.
    /// Empty matches every record.
    pub search: String,
    pub verdict: VerdictFilter,
    /// Inclusive lower bound on `overall_score`.
    pub min_score: f64,
}

impl ResultFilter {
    pub fn matches(&self, record: &MatchRecord) -> bool {
        self.matches_search(record)
            && self.verdict.admits(record.verdict)
            && record.overall_score >= self.min_score
    }

    fn matches_search(&self, record: &MatchRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.candidate_name.to_lowercase().contains(&needle)
            || record.job_title.to_lowercase().contains(&needle)
    }

    /// Applies the filter, preserving input order. The result is always a
    /// subsequence of `records`; empty is a valid outcome.
    pub fn apply(&self, records: &[MatchRecord]) -> Vec<MatchRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
