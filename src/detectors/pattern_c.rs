//! Pattern C: validation/storage inconsistency.
//!
//! A purely textual check, deliberately independent of the schema and
//! container models: a validation that only *warns* about a multi-dimensional
//! condition lets rows through that storage may then collapse.

use super::{DetectionContext, Detector};
use crate::core::{GranularityIssue, PatternKind, Severity, WarningSite, UNKNOWN};

pub struct ValidationInconsistencyDetector {
    keywords: Vec<String>,
}

impl ValidationInconsistencyDetector {
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .filter(|k| !k.is_empty())
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    fn is_multi_dimensional(&self, site: &WarningSite) -> bool {
        let lowered = site.text.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

impl Detector for ValidationInconsistencyDetector {
    fn name(&self) -> &'static str {
        "validation_inconsistency"
    }

    fn pattern(&self) -> PatternKind {
        PatternKind::ValidationInconsistency
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<GranularityIssue> {
        ctx.models
            .warning_sites
            .iter()
            .filter(|site| self.is_multi_dimensional(site))
            .map(|site| GranularityIssue {
                severity: Severity::Medium,
                issue_type: PatternKind::ValidationInconsistency,
                description: format!(
                    "Validation warning at line {} may indicate granularity mismatch that should be an error",
                    site.line_number
                ),
                input_schema: UNKNOWN.to_string(),
                map_variable: UNKNOWN.to_string(),
                missing_dimensions: Vec::new(),
                affected_files: vec![site.file_path.clone()],
                recommendations: vec![
                    "Review if warning should be upgraded to error".to_string(),
                    "Check if storage handles multi-dimensional case".to_string(),
                    "Consider if validation prevents data loss".to_string(),
                ],
                risk_score: 0.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionsConfig;
    use crate::core::SourceModels;
    use std::path::PathBuf;

    fn site(line_number: usize, text: &str) -> WarningSite {
        WarningSite {
            file_path: PathBuf::from("validation/StoreValidator.java"),
            line_number,
            text: text.to_string(),
        }
    }

    fn detector() -> ValidationInconsistencyDetector {
        ValidationInconsistencyDetector::new(&ConventionsConfig::default().multi_dimension_keywords)
    }

    #[test]
    fn multi_channel_warning_is_flagged() {
        let mut models = SourceModels::default();
        models.warning_sites = vec![
            site(14, r#"addWarning("Style mapped to Multiple channels");"#),
            site(20, r#"addWarning("Negative inventory");"#),
            site(31, r#"addWarning(row, "different GROUP for store");"#),
        ];

        let issues = detector().detect(&DetectionContext::new(&models));
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].description,
            "Validation warning at line 14 may indicate granularity mismatch that should be an error"
        );
        assert_eq!(issues[0].input_schema, UNKNOWN);
        assert_eq!(issues[0].map_variable, UNKNOWN);
        assert!(issues[0].missing_dimensions.is_empty());
        assert_eq!(
            issues[0].affected_files,
            vec![PathBuf::from("validation/StoreValidator.java")]
        );
        assert!(issues[1].description.contains("line 31"));
    }

    #[test]
    fn keywords_are_case_insensitive_both_ways() {
        let detector = ValidationInconsistencyDetector::new(&["CHANNEL".to_string()]);
        assert!(detector.is_multi_dimensional(&site(1, "addWarning(\"bad channel\")")));
        assert!(!detector.is_multi_dimensional(&site(2, "addWarning(\"bad sku\")")));
    }
}
