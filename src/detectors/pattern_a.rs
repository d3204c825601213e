//! Pattern A: input granularity loss.
//!
//! A container whose key omits one of its schema's natural keys cannot tell
//! apart rows that differ only in that dimension, so later writes overwrite
//! earlier ones.

use super::{dimension_list, missing_from, DetectionContext, Detector};
use crate::core::{GranularityIssue, InputSchema, MapKeyStructure, PatternKind, Severity};

pub struct InputGranularityLossDetector;

impl Detector for InputGranularityLossDetector {
    fn name(&self) -> &'static str {
        "input_granularity_loss"
    }

    fn pattern(&self) -> PatternKind {
        PatternKind::InputGranularityLoss
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<GranularityIssue> {
        ctx.index
            .schema_groups()
            .flat_map(|group| {
                group
                    .containers
                    .iter()
                    .filter_map(move |container| check_pair(group.schema, container))
            })
            .collect()
    }
}

/// Compare one schema against one correlated container.
pub fn check_pair(schema: &InputSchema, container: &MapKeyStructure) -> Option<GranularityIssue> {
    let missing = missing_from(&schema.natural_key_columns, &container.key_components);
    if missing.is_empty() {
        return None;
    }

    Some(GranularityIssue {
        severity: Severity::High,
        issue_type: PatternKind::InputGranularityLoss,
        description: format!(
            "Input schema has dimensions {} that are missing from map key",
            dimension_list(&missing)
        ),
        input_schema: schema.file_name.clone(),
        map_variable: container.variable_name.clone(),
        affected_files: vec![schema.file_path.clone(), container.file_path.clone()],
        recommendations: vec![
            format!(
                "Add missing dimensions to Key construction: new Key({})",
                schema.natural_key_columns.join(", ")
            ),
            format!(
                "Update getter method to accept additional parameters: {}",
                missing.join(", ")
            ),
            "Update all call sites to pass the additional dimensions".to_string(),
        ],
        missing_dimensions: missing,
        risk_score: 0.0,
    })
}
