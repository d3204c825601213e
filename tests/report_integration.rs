mod common;

use common::{sequential_config, JavaRepo};
use grainmap::config::ScoringWeights;
use grainmap::output::{emit_report, OutputFormat};
use grainmap::priority::PriorityTier;
use grainmap::{analyze, build_report, Report, Severity};
use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;

fn repo_with_all_patterns() -> JavaRepo {
    let repo = JavaRepo::new();
    repo.record(
        "StoreSkuChannelRow.java",
        indoc! {"
            public class StoreSkuChannelRow {
                private int storeId;
                private int skuId;
                private String channelId;
                private double qty;
            }
        "},
    );
    repo.container(
        "StoreSkuData.java",
        indoc! {"
            public class StoreSkuData {
                private Map<Key, StoreSkuChannelRow> storeSkuRows = new HashMap<>();

                public void add(StoreSkuChannelRow row) {
                    storeSkuRows.put(new Key(storeId, skuId), row);
                }

                public StoreSkuChannelRow getRow(int storeId) {
                    return null;
                }
            }
        "},
    );
    repo.validation(
        "SkuValidator.java",
        indoc! {r#"
            public class SkuValidator {
                void check() {
                    addWarning("SKU belongs to a different group");
                }
            }
        "#},
    );
    repo
}

#[test]
fn report_summary_and_tiers() {
    let repo = repo_with_all_patterns();
    let results = analyze(repo.path(), &sequential_config()).unwrap();
    let report = build_report(&results, None);

    // A: 4 + 3 + 0.5 + 0.5; B: 2 + 1.5 + 0.5 + 0.5; C: 2 + 0.25
    let scores: Vec<f64> = report.issues.iter().map(|i| i.risk_score).collect();
    assert_eq!(scores, vec![8.0, 4.5, 2.25]);

    assert_eq!(report.summary.total_issues, 3);
    assert_eq!(report.summary.high_severity, 1);
    assert_eq!(report.summary.medium_severity, 2);
    assert_eq!(report.summary.low_severity, 0);
    assert_eq!(report.summary.input_schemas_analyzed, 1);
    assert_eq!(report.summary.map_structures_found, 1);
    assert_eq!(report.summary.getter_methods_found, 1);
    assert_eq!(report.summary.files_skipped, 0);

    let tiers: Vec<(PriorityTier, usize)> = report
        .prioritized_fixes
        .iter()
        .map(|fix| (fix.priority, fix.count))
        .collect();
    assert_eq!(
        tiers,
        vec![
            (PriorityTier::P0Critical, 1),
            (PriorityTier::P2Medium, 1),
            (PriorityTier::P3Low, 1),
        ]
    );
    assert!(report.prioritized_fixes[2].issues.is_empty());
}

#[test]
fn severity_filter_keeps_model_counts() {
    let repo = repo_with_all_patterns();
    let results = analyze(repo.path(), &sequential_config()).unwrap();
    let report = build_report(&results, Some(Severity::High));

    assert_eq!(report.summary.total_issues, 1);
    assert_eq!(report.summary.medium_severity, 0);
    assert_eq!(report.summary.input_schemas_analyzed, 1);
    assert_eq!(report.summary.map_structures_found, 1);
    assert_eq!(report.prioritized_fixes.len(), 1);
}

#[test]
fn json_report_written_to_file() {
    let repo = repo_with_all_patterns();
    let results = analyze(repo.path(), &sequential_config()).unwrap();
    let report = build_report(&results, None);
    let out = repo.path().join("reports").join("granularity.json");

    emit_report(
        &report,
        OutputFormat::Terminal,
        Some(out.as_path()),
        0,
        &ScoringWeights::default(),
    )
    .unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["summary"]["total_issues"], 3);
    assert_eq!(json["issues"][0]["issue_type"], "PATTERN_A");
    assert_eq!(json["issues"][0]["missing_dimensions"][0], "channelId");
    assert_eq!(json["issues"][1]["issue_type"], "PATTERN_B");
    assert_eq!(json["issues"][2]["map_variable"], "Unknown");
    assert_eq!(json["prioritized_fixes"][1]["priority"], "P2_MEDIUM");
    assert_eq!(json["prioritized_fixes"][1]["action"], "Fix in next sprint");

    let round_trip: Report = serde_json::from_str(&content).unwrap();
    assert_eq!(round_trip, report);
}
