//! Shared data model for granularity analysis.
//!
//! The three extracted models (`InputSchema`, `MapKeyStructure`,
//! `GetterSignature`) are correlated purely by declared type name. Issues
//! produced by the detectors carry everything the report needs.

use crate::errors::FileFailure;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// One input record definition inferred from a record source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSchema {
    /// Declared record type name, unique within a run.
    pub file_name: String,
    pub file_path: PathBuf,
    pub natural_key_columns: Vec<String>,
    pub value_columns: Vec<String>,
    pub granularity_level: String,
}

/// A composite-keyed container declared on a consuming type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapKeyStructure {
    pub variable_name: String,
    pub file_path: PathBuf,
    pub line_number: usize,
    /// Argument expressions of the first key construction bound to this
    /// variable, verbatim and in order.
    pub key_components: Vec<String>,
    pub class_name: String,
}

/// A single-line public accessor on a consuming type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetterSignature {
    pub method_name: String,
    pub file_path: PathBuf,
    pub line_number: usize,
    pub parameters: Vec<String>,
    pub return_type: String,
}

/// A line in a validation source that raises a warning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningSite {
    pub file_path: PathBuf,
    pub line_number: usize,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Severity::High),
            "MEDIUM" => Ok(Severity::Medium),
            "LOW" => Ok(Severity::Low),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// Which mismatch rule produced an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Input granularity loss: schema keys missing from a map key.
    #[serde(rename = "PATTERN_A")]
    InputGranularityLoss,
    /// Cross-level accessor usage: map key components missing from an accessor.
    #[serde(rename = "PATTERN_B")]
    CrossLevelAccessor,
    /// Validation warning that may need to be a hard failure.
    #[serde(rename = "PATTERN_C")]
    ValidationInconsistency,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::InputGranularityLoss => "PATTERN_A",
            PatternKind::CrossLevelAccessor => "PATTERN_B",
            PatternKind::ValidationInconsistency => "PATTERN_C",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected mismatch.
///
/// `risk_score` is zero until the scorer runs; nothing else is touched after
/// detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GranularityIssue {
    pub severity: Severity,
    pub issue_type: PatternKind,
    pub description: String,
    pub input_schema: String,
    pub map_variable: String,
    pub missing_dimensions: Vec<String>,
    pub affected_files: Vec<PathBuf>,
    pub recommendations: Vec<String>,
    pub risk_score: f64,
}

/// Placeholder used for issue fields a detector cannot attribute.
pub const UNKNOWN: &str = "Unknown";

/// The three independently extracted models, keyed for correlation, plus the
/// validation warning sites scanned from their own root.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceModels {
    /// Schema name -> schema.
    pub schemas: BTreeMap<String, InputSchema>,
    /// Declared value-type name -> containers holding that type.
    pub map_structures: BTreeMap<String, Vec<MapKeyStructure>>,
    /// Declared return-type name -> accessors returning that type.
    pub getters: BTreeMap<String, Vec<GetterSignature>>,
    /// Warning call sites in validation sources, in discovery order.
    pub warning_sites: Vec<WarningSite>,
}

impl SourceModels {
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    pub fn map_structure_count(&self) -> usize {
        self.map_structures.values().map(Vec::len).sum()
    }

    pub fn getter_count(&self) -> usize {
        self.getters.values().map(Vec::len).sum()
    }
}

/// Everything a single run produces, before any presentation.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisResults {
    pub project_path: PathBuf,
    pub models: SourceModels,
    /// Scored issues, descending by risk score, ties in detection order.
    pub issues: Vec<GranularityIssue>,
    pub warnings: Vec<FileFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("high".parse::<Severity>(), Ok(Severity::High));
        assert_eq!("MEDIUM".parse::<Severity>(), Ok(Severity::Medium));
        assert!("urgent".parse::<Severity>().is_err());
    }

    #[test]
    fn pattern_kind_serializes_with_stable_names() {
        let json = serde_json::to_string(&PatternKind::CrossLevelAccessor).unwrap();
        assert_eq!(json, "\"PATTERN_B\"");
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
    }

    #[test]
    fn model_counts_sum_groups() {
        let mut models = SourceModels::default();
        let structure = MapKeyStructure {
            variable_name: "rows".into(),
            file_path: PathBuf::from("StoreData.java"),
            line_number: 3,
            key_components: vec!["storeId".into()],
            class_name: "StoreData".into(),
        };
        models
            .map_structures
            .entry("SkuRow".into())
            .or_default()
            .extend([structure.clone(), structure]);
        assert_eq!(models.map_structure_count(), 2);
        assert_eq!(models.getter_count(), 0);
    }
}
