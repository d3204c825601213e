//! Single-line accessor signatures on container types.
//!
//! Only `public <ReturnType> get<Name>(<params>)` on one line is recognised.
//! Generic return types, overloads spread across lines and annotations
//! between modifiers are outside the grammar subset and are not found.

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

use super::{scan_files, Extracted, ScanTarget};
use crate::core::GetterSignature;
use crate::errors::AnalysisError;

pub struct AccessorPatterns {
    getter_decl: Regex,
}

impl AccessorPatterns {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            getter_decl: Regex::new(r"public\s+(\w+)\s+(get\w+)\s*\((.*?)\)")?,
        })
    }
}

/// Bound names of a comma-separated parameter list: the last
/// whitespace-delimited token of each declaration.
fn parameter_names(params: &str) -> Vec<String> {
    params
        .split(',')
        .filter_map(|param| param.split_whitespace().last())
        .map(String::from)
        .collect()
}

pub fn parse_getter_methods(content: &str, path: &Path, patterns: &AccessorPatterns) -> Vec<GetterSignature> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let caps = patterns.getter_decl.captures(line)?;
            Some(GetterSignature {
                return_type: caps[1].to_string(),
                method_name: caps[2].to_string(),
                parameters: parameter_names(&caps[3]),
                file_path: path.to_path_buf(),
                line_number: index + 1,
            })
        })
        .collect()
}

/// Build the return-type -> accessors model for every file under the target.
pub fn extract_getters(
    target: &ScanTarget<'_>,
    patterns: &AccessorPatterns,
) -> Extracted<BTreeMap<String, Vec<GetterSignature>>> {
    let output = scan_files(target, |content, path| {
        parse_getter_methods(content, path, patterns)
    });

    let mut getters: BTreeMap<String, Vec<GetterSignature>> = BTreeMap::new();
    for getter in output.items {
        getters
            .entry(getter.return_type.clone())
            .or_default()
            .push(getter);
    }

    log::info!(
        "Found {} getter methods",
        getters.values().map(Vec::len).sum::<usize>()
    );
    Extracted {
        model: getters,
        failures: output.failures,
        files_scanned: output.files_scanned,
    }
}
