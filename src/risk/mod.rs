//! Deterministic risk scoring.
//!
//! A score depends only on an issue's severity, pattern, number of missing
//! dimensions and number of affected files:
//!
//! ```text
//! score = severity + pattern
//!       + min(per_dimension * |missing|, dimension_cap)
//!       + min(per_file * |files|, file_cap)
//! ```
//!
//! With the default weights the range is `0.0..=10.0`.

use serde::Serialize;
use std::cmp::Ordering;

use crate::config::ScoringWeights;
use crate::core::{GranularityIssue, PatternKind, Severity};

/// The four additive parts of a score, kept for explanations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub severity: f64,
    pub pattern: f64,
    pub dimensions: f64,
    pub files: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.severity + self.pattern + self.dimensions + self.files
    }
}

pub fn score_breakdown(issue: &GranularityIssue, weights: &ScoringWeights) -> ScoreBreakdown {
    let severity = match issue.severity {
        Severity::High => weights.high_severity,
        Severity::Medium => weights.medium_severity,
        Severity::Low => weights.low_severity,
    };
    let pattern = match issue.issue_type {
        PatternKind::InputGranularityLoss => weights.pattern_a,
        PatternKind::CrossLevelAccessor => weights.pattern_b,
        PatternKind::ValidationInconsistency => weights.pattern_c,
    };

    ScoreBreakdown {
        severity,
        pattern,
        dimensions: (weights.per_dimension * issue.missing_dimensions.len() as f64)
            .min(weights.dimension_cap),
        files: (weights.per_file * issue.affected_files.len() as f64).min(weights.file_cap),
    }
}

pub fn calculate_risk_score(issue: &GranularityIssue, weights: &ScoringWeights) -> f64 {
    score_breakdown(issue, weights).total()
}

/// Assign every issue its score. Re-running on scored issues changes nothing.
pub fn score_issues(issues: &mut [GranularityIssue], weights: &ScoringWeights) {
    for issue in issues.iter_mut() {
        issue.risk_score = calculate_risk_score(issue, weights);
    }
}

/// Descending by score; the sort is stable so equal scores keep detection
/// order.
pub fn rank_issues(issues: &mut [GranularityIssue]) {
    issues.sort_by(|a, b| compare_scores_desc(a.risk_score, b.risk_score));
}

fn compare_scores_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
