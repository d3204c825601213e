//! Command-line interface for grainmap
//!
//! - Argument parsing (`args`)
//! - The analyze handler (`commands`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

pub use args::{parse_args, Cli};
pub use commands::handle_analyze_command;
pub use setup::{build_config, configure_colors, init_logging, log_level_for};
