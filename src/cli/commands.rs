use anyhow::Result;

use super::args::Cli;
use super::setup::build_config;
use crate::errors::AnalysisError;
use crate::observability::{set_phase, AnalysisPhase};
use crate::output::emit_report;
use crate::pipeline::{analyze, resolve_root};
use crate::report::build_report;

/// Analyze the requested root and print or persist the report.
///
/// A missing root surfaces as [`AnalysisError::RootNotFound`]
/// before any configuration is read.
pub fn handle_analyze_command(cli: &Cli) -> Result<()> {
    let root = resolve_root(&cli.repo_path, cli.module.as_deref());
    if !root.exists() {
        return Err(AnalysisError::RootNotFound { path: root }.into());
    }

    let config = build_config(cli, &root)?;
    let results = analyze(&root, &config)?;

    let _phase = set_phase(AnalysisPhase::Reporting);
    let report = build_report(&results, cli.severity);
    emit_report(
        &report,
        cli.format,
        cli.output.as_deref(),
        cli.verbosity,
        &config.scoring,
    )
}
