//! Structured report payload.
//!
//! Field names are part of the output contract and must not change.

use serde::{Deserialize, Serialize};

use crate::core::{AnalysisResults, GranularityIssue, Severity};
use crate::priority::{prioritize, PrioritizedFix};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_issues: usize,
    pub high_severity: usize,
    pub medium_severity: usize,
    pub low_severity: usize,
    pub input_schemas_analyzed: usize,
    pub map_structures_found: usize,
    pub getter_methods_found: usize,
    /// Files skipped because they could not be read or decoded
    pub files_skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub issues: Vec<GranularityIssue>,
    pub prioritized_fixes: Vec<PrioritizedFix>,
}

/// Keep only issues of the given severity, preserving rank order.
pub fn filter_by_severity(issues: &[GranularityIssue], severity: Option<Severity>) -> Vec<GranularityIssue> {
    match severity {
        Some(wanted) => issues
            .iter()
            .filter(|issue| issue.severity == wanted)
            .cloned()
            .collect(),
        None => issues.to_vec(),
    }
}

/// Assemble the report from ranked results.
///
/// Issue counts and tiers describe the filtered list; model counts always
/// describe the full extraction.
pub fn build_report(results: &AnalysisResults, severity: Option<Severity>) -> Report {
    let issues = filter_by_severity(&results.issues, severity);
    let count = |wanted: Severity| issues.iter().filter(|i| i.severity == wanted).count();

    let summary = ReportSummary {
        total_issues: issues.len(),
        high_severity: count(Severity::High),
        medium_severity: count(Severity::Medium),
        low_severity: count(Severity::Low),
        input_schemas_analyzed: results.models.schema_count(),
        map_structures_found: results.models.map_structure_count(),
        getter_methods_found: results.models.getter_count(),
        files_skipped: results.warnings.len(),
    };

    Report {
        prioritized_fixes: prioritize(&issues),
        summary,
        issues,
    }
}
