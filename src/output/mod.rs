pub mod json;
pub mod terminal;

use anyhow::Result;
use std::path::Path;

use crate::config::ScoringWeights;
use crate::report::Report;

pub use json::{format_json, output_json};
pub use terminal::{format_summary, output_terminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Print the report in `format` and, when `output_file` is set, also persist
/// the JSON payload there.
pub fn emit_report(
    report: &Report,
    format: OutputFormat,
    output_file: Option<&Path>,
    verbosity: u8,
    weights: &ScoringWeights,
) -> Result<()> {
    match format {
        OutputFormat::Terminal => output_terminal(report, verbosity, weights),
        OutputFormat::Json => output_json(report, None)?,
    }

    if let Some(path) = output_file {
        output_json(report, Some(path))?;
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}
