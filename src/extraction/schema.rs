//! Input schema inference from record source files.
//!
//! A record file declares one `public class <Name><record suffix>` and a set
//! of `private <Type> <name>;` fields. Fields whose name contains a natural-key
//! keyword are dimensions; everything else is a value column.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

use super::{scan_files, Extracted, ScanTarget};
use crate::config::ConventionsConfig;
use crate::core::InputSchema;
use crate::errors::AnalysisError;

/// Suffixes stripped from key names when building the granularity label.
const KEY_SUFFIXES: [&str; 2] = ["Id", "Code"];

static FIELD_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"private\s+(\w+)\s+(\w+);").unwrap());

pub struct SchemaPatterns {
    class_decl: Regex,
    keywords: Vec<String>,
}

impl SchemaPatterns {
    pub fn new(conventions: &ConventionsConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            class_decl: Regex::new(&format!(
                r"public\s+class\s+(\w+{})\s+",
                regex::escape(&conventions.record_suffix)
            ))?,
            keywords: conventions
                .natural_key_keywords
                .iter()
                .filter(|k| !k.is_empty())
                .map(|k| k.to_lowercase())
                .collect(),
        })
    }
}

/// A field is a natural key iff its lower-cased name contains a keyword.
///
/// `keywords` are expected lower-case.
pub fn is_natural_key(field_name: &str, keywords: &[String]) -> bool {
    let lowered = field_name.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
}

/// Human-readable granularity, e.g. `[storeId, skuCode]` -> `Store-Sku Level`.
pub fn granularity_label(natural_keys: &[String]) -> String {
    let stripped: Vec<String> = natural_keys
        .iter()
        .map(|key| {
            KEY_SUFFIXES
                .iter()
                .fold(key.clone(), |acc, suffix| acc.replace(suffix, ""))
        })
        .collect();
    format!("{} Level", title_case(&stripped.join("-")))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut previous_is_letter = false;
    text.chars()
        .map(|c| {
            let mapped = if previous_is_letter {
                c.to_lowercase().collect::<String>()
            } else {
                c.to_uppercase().collect::<String>()
            };
            previous_is_letter = c.is_alphabetic();
            mapped
        })
        .collect()
}

/// Infer the schema declared in one record file.
///
/// Returns `None` when the file declares no record type, no fields, or no
/// natural keys.
pub fn parse_record(content: &str, path: &Path, patterns: &SchemaPatterns) -> Option<InputSchema> {
    let Some(class_name) = patterns
        .class_decl
        .captures(content)
        .map(|caps| caps[1].to_string())
    else {
        log::debug!("No record type declared in {}", path.display());
        return None;
    };

    let fields: Vec<&str> = FIELD_DECL
        .captures_iter(content)
        .filter_map(|caps| caps.get(2).map(|m| m.as_str()))
        .collect();
    if fields.is_empty() {
        log::debug!("{class_name} declares no fields, skipping");
        return None;
    }

    let (natural_keys, values): (Vec<&str>, Vec<&str>) = fields
        .into_iter()
        .partition(|name| is_natural_key(name, &patterns.keywords));
    if natural_keys.is_empty() {
        log::debug!("{class_name} has no natural-key fields, skipping");
        return None;
    }

    let natural_key_columns: Vec<String> = natural_keys.into_iter().map(String::from).collect();
    Some(InputSchema {
        granularity_level: granularity_label(&natural_key_columns),
        file_name: class_name,
        file_path: path.to_path_buf(),
        natural_key_columns,
        value_columns: values.into_iter().map(String::from).collect(),
    })
}

/// Build the schema model for every record file under the target.
///
/// Schema names are unique; when two files declare the same record name the
/// later one in discovery order wins.
pub fn extract_schemas(
    target: &ScanTarget<'_>,
    patterns: &SchemaPatterns,
) -> Extracted<BTreeMap<String, InputSchema>> {
    let output = scan_files(target, |content, path| {
        parse_record(content, path, patterns).into_iter().collect()
    });

    let mut schemas = BTreeMap::new();
    for schema in output.items {
        let name = schema.file_name.clone();
        if let Some(previous) = schemas.insert(name.clone(), schema) {
            log::warn!(
                "Record {} declared in both {} and a later file; keeping the later one",
                name,
                previous.file_path.display()
            );
        }
    }

    log::info!("Found {} input schemas", schemas.len());
    Extracted {
        model: schemas,
        failures: output.failures,
        files_scanned: output.files_scanned,
    }
}
