//! Warning call sites in validation sources.
//!
//! Any line invoking the configured warning call is recorded verbatim. Deciding
//! whether a site is multi-dimensional is left to the detector.

use std::path::Path;

use super::{scan_files, Extracted, ScanTarget};
use crate::core::WarningSite;

pub fn parse_warning_sites(content: &str, path: &Path, warning_call: &str) -> Vec<WarningSite> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(warning_call))
        .map(|(index, line)| WarningSite {
            file_path: path.to_path_buf(),
            line_number: index + 1,
            text: line.trim().to_string(),
        })
        .collect()
}

pub fn extract_warning_sites(target: &ScanTarget<'_>, warning_call: &str) -> Extracted<Vec<WarningSite>> {
    let output = scan_files(target, |content, path| {
        parse_warning_sites(content, path, warning_call)
    });

    log::info!("Found {} validation warning sites", output.items.len());
    Extracted {
        model: output.items,
        failures: output.failures,
        files_scanned: output.files_scanned,
    }
}
