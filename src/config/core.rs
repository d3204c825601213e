use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::parallel::ParallelConfig;
use super::scoring::ScoringWeights;

/// Root configuration structure for grainmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GrainmapConfig {
    /// Where the three source subtrees live, relative to the analysed root
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Naming conventions and keyword sets driving the lexical extractors
    #[serde(default)]
    pub conventions: ConventionsConfig,

    #[serde(default)]
    pub scoring: ScoringWeights,

    #[serde(default)]
    pub parallel: ParallelConfig,
}

impl GrainmapConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.scoring.validate()?;
        self.conventions.validate()
    }
}

fn default_records_root() -> PathBuf {
    PathBuf::from("src/main/java/com/increff/irisx/row/input")
}

fn default_containers_root() -> PathBuf {
    PathBuf::from("src/main/java/com/increff/irisx/data")
}

fn default_validations_root() -> PathBuf {
    PathBuf::from("src/main/java/com/increff/irisx/validation")
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_records_root")]
    pub records_root: PathBuf,

    #[serde(default = "default_containers_root")]
    pub containers_root: PathBuf,

    #[serde(default = "default_validations_root")]
    pub validations_root: PathBuf,

    /// File extensions scanned under every root (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            records_root: default_records_root(),
            containers_root: default_containers_root(),
            validations_root: default_validations_root(),
            extensions: default_extensions(),
        }
    }
}

impl LayoutConfig {
    pub fn records_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.records_root)
    }

    pub fn containers_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.containers_root)
    }

    pub fn validations_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.validations_root)
    }
}

fn default_record_suffix() -> String {
    "Row".to_string()
}

fn default_container_suffix() -> String {
    "Data".to_string()
}

fn default_key_type() -> String {
    "Key".to_string()
}

fn default_warning_call() -> String {
    "addWarning".to_string()
}

fn default_natural_key_keywords() -> Vec<String> {
    [
        "id", "code", "group", "channel", "category", "type", "store", "style", "sku",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_multi_dimension_keywords() -> Vec<String> {
    ["multiple", "different", "channel", "group"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConventionsConfig {
    /// Record type names must end with this suffix to be treated as schemas
    #[serde(default = "default_record_suffix")]
    pub record_suffix: String,

    /// Owning type names of containers end with this suffix
    #[serde(default = "default_container_suffix")]
    pub container_suffix: String,

    /// Composite key type used both in map declarations and constructions
    #[serde(default = "default_key_type")]
    pub key_type: String,

    /// Call name that marks a validation warning
    #[serde(default = "default_warning_call")]
    pub warning_call: String,

    /// Case-insensitive substrings marking a field as a natural key
    #[serde(default = "default_natural_key_keywords")]
    pub natural_key_keywords: Vec<String>,

    /// Case-insensitive substrings marking a warning as multi-dimensional
    #[serde(default = "default_multi_dimension_keywords")]
    pub multi_dimension_keywords: Vec<String>,
}

impl Default for ConventionsConfig {
    fn default() -> Self {
        Self {
            record_suffix: default_record_suffix(),
            container_suffix: default_container_suffix(),
            key_type: default_key_type(),
            warning_call: default_warning_call(),
            natural_key_keywords: default_natural_key_keywords(),
            multi_dimension_keywords: default_multi_dimension_keywords(),
        }
    }
}

impl ConventionsConfig {
    pub fn validate(&self) -> Result<(), String> {
        let is_identifier = |s: &str| {
            !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        };

        for (name, value) in [
            ("record_suffix", &self.record_suffix),
            ("container_suffix", &self.container_suffix),
            ("key_type", &self.key_type),
            ("warning_call", &self.warning_call),
        ] {
            if !is_identifier(value) {
                return Err(format!(
                    "conventions.{name} must be a non-empty identifier, got '{value}'"
                ));
            }
        }

        if self.natural_key_keywords.iter().all(|k| k.is_empty()) {
            return Err("conventions.natural_key_keywords must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: GrainmapConfig = toml::from_str("").unwrap();
        assert_eq!(config, GrainmapConfig::default());
        assert_eq!(config.conventions.natural_key_keywords.len(), 9);
    }

    #[test]
    fn layout_overrides_are_relative_to_root() {
        let config: GrainmapConfig = toml::from_str(
            r#"
            [layout]
            records_root = "model/rows"
            "#,
        )
        .unwrap();
        let root = Path::new("/repo");
        assert_eq!(
            config.layout.records_dir(root),
            PathBuf::from("/repo/model/rows")
        );
        assert_eq!(
            config.layout.containers_dir(root),
            PathBuf::from("/repo/src/main/java/com/increff/irisx/data")
        );
    }

    #[test]
    fn non_identifier_key_type_is_rejected() {
        let conventions = ConventionsConfig {
            key_type: "Key<T>".to_string(),
            ..Default::default()
        };
        assert!(conventions.validate().is_err());
    }
}
