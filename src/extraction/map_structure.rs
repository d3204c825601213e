//! Composite-keyed container discovery in aggregate ("data") source files.
//!
//! Recognised shape, one declaration per line:
//!
//! ```text
//! private Map<Key, StoreSkuRow> storeSkuRows = new HashMap<>();
//! ...
//! storeSkuRows.put(new Key(row.storeId, row.skuId), row);
//! ```
//!
//! The key components are the argument expressions of the first matching
//! construction, taken verbatim. A declaration with no construction site is
//! dropped because its key shape cannot be confirmed.

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

use super::{scan_files, Extracted, ScanTarget};
use crate::config::ConventionsConfig;
use crate::core::{MapKeyStructure, UNKNOWN};
use crate::errors::AnalysisError;

pub struct MapPatterns {
    owner_decl: Regex,
    map_decl: Regex,
    /// `<var>.put(new <Key>(<args>)`, capturing the receiver and the arguments.
    key_construction: Regex,
}

impl MapPatterns {
    pub fn new(conventions: &ConventionsConfig) -> Result<Self, AnalysisError> {
        let key_type = regex::escape(&conventions.key_type);
        Ok(Self {
            owner_decl: Regex::new(&format!(
                r"public\s+class\s+(\w+{})\s+",
                regex::escape(&conventions.container_suffix)
            ))?,
            map_decl: Regex::new(&format!(r"Map<{key_type},\s*(\w+)>\s+(\w+)"))?,
            key_construction: Regex::new(&format!(
                r"\b(\w+)\.put\(\s*new\s+{key_type}\((.*?)\)"
            ))?,
        })
    }
}

/// Argument expressions of the first `<var>.put(new <Key>(...)` in `content`.
///
/// The argument list ends at the first closing parenthesis on the same line,
/// so nested calls inside the key are truncated rather than balanced.
pub fn find_key_construction(content: &str, variable: &str, patterns: &MapPatterns) -> Option<Vec<String>> {
    patterns
        .key_construction
        .captures_iter(content)
        .find(|caps| &caps[1] == variable)
        .map(|caps| {
            caps[2]
                .split(',')
                .map(str::trim)
                .filter(|component| !component.is_empty())
                .map(String::from)
                .collect()
        })
}

/// Every confirmed map declaration in one container file, paired with its
/// declared value-type name.
pub fn parse_map_structures(
    content: &str,
    path: &Path,
    patterns: &MapPatterns,
) -> Vec<(String, MapKeyStructure)> {
    let class_name = patterns
        .owner_decl
        .captures(content)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let caps = patterns.map_decl.captures(line)?;
            let value_type = caps[1].to_string();
            let variable = caps[2].to_string();

            let Some(key_components) = find_key_construction(content, &variable, patterns) else {
                log::debug!(
                    "{}:{} map '{}' has no key construction, skipping",
                    path.display(),
                    index + 1,
                    variable
                );
                return None;
            };

            Some((
                value_type,
                MapKeyStructure {
                    variable_name: variable,
                    file_path: path.to_path_buf(),
                    line_number: index + 1,
                    key_components,
                    class_name: class_name.clone(),
                },
            ))
        })
        .collect()
}

/// Build the value-type -> containers model for every file under the target.
pub fn extract_map_structures(
    target: &ScanTarget<'_>,
    patterns: &MapPatterns,
) -> Extracted<BTreeMap<String, Vec<MapKeyStructure>>> {
    let output = scan_files(target, |content, path| {
        parse_map_structures(content, path, patterns)
    });

    let mut structures: BTreeMap<String, Vec<MapKeyStructure>> = BTreeMap::new();
    for (value_type, structure) in output.items {
        structures.entry(value_type).or_default().push(structure);
    }

    log::info!(
        "Found {} map structures",
        structures.values().map(Vec::len).sum::<usize>()
    );
    Extracted {
        model: structures,
        failures: output.failures,
        files_scanned: output.files_scanned,
    }
}
