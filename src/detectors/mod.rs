//! Mismatch detectors.
//!
//! Every detector is a pure function of the extracted models. Detectors run in
//! a fixed order and their issue lists are concatenated, so detection order
//! (the tie-break for equal scores) is reproducible.
//!
//! Detectors have no error path. A panic inside one is a defect and is left
//! to propagate to the crash-report hook.

pub mod pattern_a;
pub mod pattern_b;
pub mod pattern_c;

use crate::config::ConventionsConfig;
use crate::core::{GranularityIssue, PatternKind, SourceModels};
use crate::correlation::CorrelationIndex;
use crate::observability::set_current_detector;

pub use pattern_a::InputGranularityLossDetector;
pub use pattern_b::CrossLevelAccessorDetector;
pub use pattern_c::ValidationInconsistencyDetector;

/// Read-only view shared by all detectors.
pub struct DetectionContext<'a> {
    pub models: &'a SourceModels,
    pub index: CorrelationIndex<'a>,
}

impl<'a> DetectionContext<'a> {
    pub fn new(models: &'a SourceModels) -> Self {
        Self {
            models,
            index: CorrelationIndex::new(models),
        }
    }
}

pub trait Detector: Send + Sync {
    /// Stable identifier used in logs and crash reports
    fn name(&self) -> &'static str;

    fn pattern(&self) -> PatternKind;

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<GranularityIssue>;
}

/// Pattern A, B, C in that order.
pub fn default_detectors(conventions: &ConventionsConfig) -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(InputGranularityLossDetector),
        Box::new(CrossLevelAccessorDetector),
        Box::new(ValidationInconsistencyDetector::new(
            &conventions.multi_dimension_keywords,
        )),
    ]
}

pub fn run_detectors(detectors: &[Box<dyn Detector>], ctx: &DetectionContext<'_>) -> Vec<GranularityIssue> {
    let mut issues = Vec::new();
    for detector in detectors {
        let _detector = set_current_detector(detector.name());
        let found = detector.detect(ctx);
        log::debug!("{} reported {} issues", detector.name(), found.len());
        issues.extend(found);
    }
    log::info!("Detected {} potential issues", issues.len());
    issues
}

/// `[a, b]` rendering used in issue descriptions.
pub(crate) fn dimension_list(dimensions: &[String]) -> String {
    format!("[{}]", dimensions.join(", "))
}

/// Items of `wanted` absent from `present`, in `wanted` order, without
/// duplicates.
pub(crate) fn missing_from(wanted: &[String], present: &[String]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for item in wanted {
        if !present.contains(item) && !missing.contains(item) {
            missing.push(item.clone());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_from_is_ordered_set_difference() {
        let wanted = strings(&["storeId", "skuId", "channelId", "channelId"]);
        let present = strings(&["skuId", "regionId"]);
        assert_eq!(missing_from(&wanted, &present), strings(&["storeId", "channelId"]));
    }

    #[test]
    fn superset_leaves_nothing_missing() {
        let wanted = strings(&["storeId"]);
        let present = strings(&["storeId", "skuId"]);
        assert!(missing_from(&wanted, &present).is_empty());
    }

    #[test]
    fn detectors_run_in_pattern_order() {
        let detectors = default_detectors(&ConventionsConfig::default());
        let patterns: Vec<_> = detectors.iter().map(|d| d.pattern()).collect();
        assert_eq!(
            patterns,
            vec![
                PatternKind::InputGranularityLoss,
                PatternKind::CrossLevelAccessor,
                PatternKind::ValidationInconsistency,
            ]
        );
    }

    #[test]
    fn empty_models_produce_no_issues() {
        let models = SourceModels::default();
        let ctx = DetectionContext::new(&models);
        let detectors = default_detectors(&ConventionsConfig::default());
        assert!(run_detectors(&detectors, &ctx).is_empty());
    }
}
