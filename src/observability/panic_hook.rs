//! Crash report printed when the engine panics.
//!
//! Detectors have no error path, so a panic there is a defect. The report
//! names the phase, file and detector that were active so it can be
//! reproduced.

use super::context::{get_current_context, get_progress, AnalysisContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str =
    "================================================================================";

/// Install the crash-report hook, chaining to the previously installed one.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("{}", render_crash_report(info, &get_current_context(), get_progress()));
        default_hook(info);
    }));
}

fn render_crash_report(
    info: &PanicHookInfo<'_>,
    context: &AnalysisContext,
    (processed, total): (usize, usize),
) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "GRAINMAP CRASH REPORT".to_string(),
        RULE.to_string(),
        format!("Version:  {VERSION}"),
        format!("Platform: {}", std::env::consts::OS),
        format!("Time:     {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")),
        format!("Panic:    {}", panic_message(info)),
    ];

    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    lines.extend(context_lines(context, processed, total));
    lines.push(RULE.to_string());
    lines.join("\n")
}

fn context_lines(context: &AnalysisContext, processed: usize, total: usize) -> Vec<String> {
    let mut lines = Vec::new();

    match context.phase {
        Some(phase) => lines.push(format!("Phase:    {phase}")),
        None => lines.push("Phase:    (not set - crash occurred before analysis started)".to_string()),
    }
    if let Some(detector) = context.current_detector {
        lines.push(format!("Detector: {detector}"));
    }
    if let Some(file) = &context.current_file {
        lines.push(format!("File:     {}", file.display()));
    }
    if total > 0 {
        let pct = processed * 100 / total;
        lines.push(format!("Progress: {processed} / {total} files ({pct}%)"));
    }

    lines
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
