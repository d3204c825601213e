use std::process::ExitCode;

use grainmap::cli::{configure_colors, handle_analyze_command, init_logging, parse_args};
use grainmap::observability::install_panic_hook;

fn main() -> ExitCode {
    let cli = parse_args();

    init_logging(cli.verbosity);
    install_panic_hook();
    configure_colors(cli.plain);

    match handle_analyze_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
