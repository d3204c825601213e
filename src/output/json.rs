use anyhow::{Context, Result};
use std::path::Path;

use crate::report::Report;

pub fn format_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Write the pretty-printed report to `path`, or to stdout when no path is
/// given.
pub fn output_json(report: &Report, path: Option<&Path>) -> Result<()> {
    let json = format_json(report)?;
    match path {
        Some(path) => crate::io::write_file(path, &json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportSummary;
    use std::fs;
    use tempfile::TempDir;

    fn empty_report() -> Report {
        Report {
            summary: ReportSummary {
                total_issues: 0,
                high_severity: 0,
                medium_severity: 0,
                low_severity: 0,
                input_schemas_analyzed: 0,
                map_structures_found: 0,
                getter_methods_found: 0,
                files_skipped: 0,
            },
            issues: vec![],
            prioritized_fixes: vec![],
        }
    }

    #[test]
    fn output_json_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("reports").join("granularity.json");

        output_json(&empty_report(), Some(nested.as_path())).unwrap();

        let content = fs::read_to_string(&nested).unwrap();
        let parsed: Report = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, empty_report());
    }
}
