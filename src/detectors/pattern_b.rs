//! Pattern B: cross-level accessor usage.
//!
//! An accessor returning a value held in a container can be called without a
//! dimension the container's key requires, so the caller gets an arbitrary
//! sub-key's row, or the wrong one.

use super::{dimension_list, missing_from, DetectionContext, Detector};
use crate::core::{GetterSignature, GranularityIssue, MapKeyStructure, PatternKind, Severity};

pub struct CrossLevelAccessorDetector;

impl Detector for CrossLevelAccessorDetector {
    fn name(&self) -> &'static str {
        "cross_level_accessor"
    }

    fn pattern(&self) -> PatternKind {
        PatternKind::CrossLevelAccessor
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<GranularityIssue> {
        let mut issues = Vec::new();
        for group in ctx.index.accessor_groups() {
            for getter in group.getters {
                issues.extend(
                    group
                        .containers
                        .iter()
                        .filter_map(|container| check_accessor(group.type_name, getter, container)),
                );
            }
        }
        issues
    }
}

pub fn check_accessor(
    type_name: &str,
    getter: &GetterSignature,
    container: &MapKeyStructure,
) -> Option<GranularityIssue> {
    let missing = missing_from(&container.key_components, &getter.parameters);
    if missing.is_empty() {
        return None;
    }

    Some(GranularityIssue {
        severity: Severity::Medium,
        issue_type: PatternKind::CrossLevelAccessor,
        description: format!(
            "Getter method {} doesn't require dimensions {} that are part of map key",
            getter.method_name,
            dimension_list(&missing)
        ),
        input_schema: type_name.to_string(),
        map_variable: container.variable_name.clone(),
        affected_files: vec![getter.file_path.clone(), container.file_path.clone()],
        recommendations: vec![
            format!("Update getter signature to include: {}", missing.join(", ")),
            "Ensure callers have context to provide missing dimensions".to_string(),
            "Consider if dimension can be resolved from calling context".to_string(),
        ],
        missing_dimensions: missing,
        risk_score: 0.0,
    })
}
