use clap::Parser;
use std::path::PathBuf;

use crate::core::Severity;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "grainmap")]
#[command(about = "Detect data-granularity mismatches between input records, keyed aggregates and accessors", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the repository to analyze
    pub repo_path: PathBuf,

    /// Also write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only report issues of this severity (HIGH, MEDIUM or LOW)
    #[arg(short, long)]
    pub severity: Option<Severity>,

    /// Analyze a single module directory inside the repository
    #[arg(short, long)]
    pub module: Option<String>,

    /// Configuration file (defaults to the nearest .grainmap.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Console output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Scan files sequentially
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Number of worker threads (0 = all cores)
    #[arg(short = 'j', long = "jobs", env = "GRAINMAP_JOBS")]
    pub jobs: Option<usize>,

    /// Increase verbosity (-v info and score breakdowns, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "grainmap",
            "/repos/irisx",
            "-o",
            "report.json",
            "-s",
            "high",
            "-m",
            "planning",
            "--no-parallel",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.repo_path, PathBuf::from("/repos/irisx"));
        assert_eq!(cli.output, Some(PathBuf::from("report.json")));
        assert_eq!(cli.severity, Some(Severity::High));
        assert_eq!(cli.module.as_deref(), Some("planning"));
        assert_eq!(cli.format, OutputFormat::Terminal);
        assert!(cli.no_parallel);
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!(Cli::try_parse_from(["grainmap", ".", "--severity", "urgent"]).is_err());
    }

    #[test]
    fn repo_path_is_required() {
        assert!(Cli::try_parse_from(["grainmap"]).is_err());
    }
}
