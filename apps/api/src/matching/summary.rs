//! Aggregate summary over a (usually filtered) results list.
//!
//! Pure derivation: recomputed from scratch on every request, no cached
//! state to invalidate.

use serde::Serialize;

use crate::matching::classify::Verdict;
use crate::models::evaluation::MatchRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub total: usize,
    pub high_matches: usize,
    pub medium_matches: usize,
    pub low_matches: usize,
    /// Arithmetic mean of `overall_score`, rounded to the nearest integer.
    /// Defined as 0 for an empty list, never NaN.
    pub average_score: u32,
}

pub fn summarize(records: &[MatchRecord]) -> ResultSummary {
    let mut high_matches = 0;
    let mut medium_matches = 0;
    let mut low_matches = 0;

    for record in records {
        match record.verdict {
            Verdict::High => high_matches += 1,
            Verdict::Medium => medium_matches += 1,
            Verdict::Low => low_matches += 1,
        }
    }

    let average_score = if records.is_empty() {
        0
    } else {
        let sum: f64 = records.iter().map(|r| r.overall_score).sum();
        (sum / records.len() as f64).round() as u32
    };

    ResultSummary {
        total: records.len(),
        high_matches,
        medium_matches,
        low_matches,
        average_score,
    }
}
