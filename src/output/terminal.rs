use colored::*;
use std::fmt::{self, Write};

use crate::config::ScoringWeights;
use crate::core::{GranularityIssue, Severity};
use crate::report::Report;
use crate::risk::score_breakdown;

const RULE_WIDTH: usize = 60;
const TOP_ISSUES: usize = 5;

/// Render the console summary: counts, the action plan, and the highest
/// scoring issues. Verbosity >= 1 adds the score breakdown of each issue.
pub fn format_summary(report: &Report, verbosity: u8, weights: &ScoringWeights) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(&mut out, report, verbosity, weights);
    out
}

pub fn output_terminal(report: &Report, verbosity: u8, weights: &ScoringWeights) {
    print!("{}", format_summary(report, verbosity, weights));
}

fn write_summary(
    out: &mut impl Write,
    report: &Report,
    verbosity: u8,
    weights: &ScoringWeights,
) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let summary = &report.summary;

    writeln!(out, "{rule}")?;
    writeln!(out, "{}", "GRANULARITY MISMATCH DETECTION SUMMARY".bold())?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Total Issues Found: {}", summary.total_issues)?;
    writeln!(out, "  High Severity: {}", summary.high_severity)?;
    writeln!(out, "  Medium Severity: {}", summary.medium_severity)?;
    writeln!(out, "  Low Severity: {}", summary.low_severity)?;
    writeln!(out)?;
    writeln!(out, "Input Schemas Analyzed: {}", summary.input_schemas_analyzed)?;
    writeln!(out, "Map Structures Found: {}", summary.map_structures_found)?;
    writeln!(out, "Getter Methods Found: {}", summary.getter_methods_found)?;
    if summary.files_skipped > 0 {
        writeln!(
            out,
            "{}",
            format!("Files Skipped: {}", summary.files_skipped).yellow()
        )?;
    }

    if report.issues.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "No granularity mismatches detected.".green())?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", "ACTION PLAN:".bright_blue())?;
    for fix in &report.prioritized_fixes {
        writeln!(out, "  {} ({}): {}", fix.priority, fix.count, fix.action)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", format!("TOP {TOP_ISSUES} ISSUES:").bright_blue())?;
    for (rank, issue) in report.issues.iter().take(TOP_ISSUES).enumerate() {
        write_issue(out, rank + 1, issue, verbosity, weights)?;
    }
    Ok(())
}

fn write_issue(
    out: &mut impl Write,
    rank: usize,
    issue: &GranularityIssue,
    verbosity: u8,
    weights: &ScoringWeights,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(
        out,
        "{}. [{}] {} - Risk Score: {}",
        rank,
        colored_severity(issue.severity),
        issue.issue_type,
        format!("{:.2}/{:.1}", issue.risk_score, weights.max_score()).bright_yellow()
    )?;
    writeln!(out, "   {}", issue.description)?;
    writeln!(
        out,
        "   Input: {}, Map: {}",
        issue.input_schema, issue.map_variable
    )?;
    if !issue.missing_dimensions.is_empty() {
        writeln!(
            out,
            "   Missing: {}",
            issue.missing_dimensions.join(", ").bright_red()
        )?;
    }

    if verbosity >= 1 {
        let parts = score_breakdown(issue, weights);
        writeln!(
            out,
            "   Score: severity {:.2} + pattern {:.2} + dimensions {:.2} + files {:.2}",
            parts.severity, parts.pattern, parts.dimensions, parts.files
        )?;
    }
    if verbosity >= 2 {
        for file in &issue.affected_files {
            writeln!(out, "   File: {}", file.display())?;
        }
    }
    Ok(())
}

fn colored_severity(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => severity.as_str().red().bold(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::Low => severity.as_str().normal(),
    }
}
