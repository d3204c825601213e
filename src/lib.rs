//! Static detection of data-granularity mismatches in record-processing
//! codebases.
//!
//! Three structural models are extracted lexically from source files: input
//! record schemas, composite-keyed containers and their key shapes, and
//! accessor signatures. They are correlated by declared type name, checked by
//! three detectors, scored, ranked and tiered into an action plan.

pub mod cli;
pub mod config;
pub mod core;
pub mod correlation;
pub mod detectors;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod priority;
pub mod report;
pub mod risk;

pub use crate::config::GrainmapConfig;
pub use crate::core::{
    AnalysisResults, GetterSignature, GranularityIssue, InputSchema, MapKeyStructure,
    PatternKind, Severity, SourceModels, WarningSite,
};
pub use crate::errors::{AnalysisError, FileFailure};
pub use crate::pipeline::{analyze, resolve_root};
pub use crate::priority::{classify_tier, prioritize, PrioritizedFix, PriorityTier};
pub use crate::report::{build_report, Report, ReportSummary};
pub use crate::risk::{calculate_risk_score, rank_issues, score_issues};
