#![allow(dead_code)]

//! Score classification: maps an overall score onto the three-tier verdict.

use serde::{Deserialize, Serialize};

/// Three-tier classification of a match's overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    High,
    Medium,
    Low,
}

impl Verdict {
    /// Classifies a 0–100 score. Lower bounds are inclusive: exactly 75 is
    /// High and exactly 50 is Medium.
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Verdict::High
        } else if score >= 50.0 {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::High => "High",
            Verdict::Medium => "Medium",
            Verdict::Low => "Low",
        }
    }

    /// Presentation class the frontend attaches to score badges.
    pub fn style_class(&self) -> &'static str {
        match self {
            Verdict::High => "success",
            Verdict::Medium => "warning",
            Verdict::Low => "danger",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_75_is_high() {
        assert_eq!(Verdict::from_score(75.0), Verdict::High);
    }

    #[test]
    fn test_just_below_75_is_medium() {
        assert_eq!(Verdict::from_score(74.999), Verdict::Medium);
    }

    #[test]
    fn test_exactly_50_is_medium() {
        assert_eq!(Verdict::from_score(50.0), Verdict::Medium);
    }

    #[test]
    fn test_just_below_50_is_low() {
        assert_eq!(Verdict::from_score(49.999), Verdict::Low);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Verdict::from_score(0.0), Verdict::Low);
        assert_eq!(Verdict::from_score(100.0), Verdict::High);
    }

    #[test]
    fn test_style_classes() {
        assert_eq!(Verdict::High.style_class(), "success");
        assert_eq!(Verdict::Medium.style_class(), "warning");
        assert_eq!(Verdict::Low.style_class(), "danger");
    }

    #[test]
    fn test_serializes_as_capitalized_label() {
        assert_eq!(
            serde_json::to_value(Verdict::High).expect("serialize"),
            serde_json::json!("High")
        );
    }
}
