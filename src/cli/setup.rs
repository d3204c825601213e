//! Runtime setup: logging, colors and configuration assembly.

use anyhow::{Context, Result};
use std::path::Path;

use super::args::Cli;
use crate::config::{load_config, load_config_from_file, GrainmapConfig};

/// Log filter for a `-v` count. `RUST_LOG` still wins when set.
pub fn log_level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(log_level_for(verbosity));
    // A second initialisation (tests, embedding) keeps the first logger.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

pub fn configure_colors(plain: bool) {
    if plain {
        colored::control::set_override(false);
    }
}

/// Explicit `--config` first, else the nearest `.grainmap.toml` above
/// `root`; command-line flags override what the file says.
pub fn build_config(cli: &Cli, root: &Path) -> Result<GrainmapConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => load_config(root),
    };
    apply_cli_overrides(&mut config, cli);
    Ok(config)
}

fn apply_cli_overrides(config: &mut GrainmapConfig, cli: &Cli) {
    if cli.no_parallel {
        config.parallel.enabled = false;
    }
    if let Some(jobs) = cli.jobs {
        config.parallel.jobs = Some(jobs);
    }
}
