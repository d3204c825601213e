//! End-to-end analysis run.
//!
//! Stages are strictly ordered: all three models must be complete before any
//! detector runs, because correlation is a global name lookup. Parallelism
//! only exists inside an extraction stage, across files.

use std::path::{Path, PathBuf};

use crate::config::{GrainmapConfig, ParallelConfig};
use crate::core::{AnalysisResults, SourceModels};
use crate::detectors::{default_detectors, run_detectors, DetectionContext};
use crate::errors::{AnalysisError, FileFailure};
use crate::extraction::{
    extract_getters, extract_map_structures, extract_schemas, extract_warning_sites,
    AccessorPatterns, Extracted, MapPatterns, ScanTarget, SchemaPatterns,
};
use crate::observability::{set_phase, AnalysisPhase};
use crate::risk::{rank_issues, score_issues};

/// Compiled extractors for one configuration.
struct Patterns {
    schema: SchemaPatterns,
    map: MapPatterns,
    accessor: AccessorPatterns,
}

impl Patterns {
    fn compile(config: &GrainmapConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            schema: SchemaPatterns::new(&config.conventions)?,
            map: MapPatterns::new(&config.conventions)?,
            accessor: AccessorPatterns::new()?,
        })
    }
}

/// The directory actually analysed: the repository itself, or one of its
/// module directories.
pub fn resolve_root(repo: &Path, module: Option<&str>) -> PathBuf {
    match module {
        Some(name) if !name.is_empty() => repo.join(name),
        _ => repo.to_path_buf(),
    }
}

/// Run extraction, detection and scoring over `root`.
///
/// Fails only when `root` does not exist or the configured conventions do not
/// compile. Per-file problems end up in [`AnalysisResults::warnings`].
pub fn analyze(root: &Path, config: &GrainmapConfig) -> Result<AnalysisResults, AnalysisError> {
    if !root.exists() {
        return Err(AnalysisError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let patterns = Patterns::compile(config)?;
    log::info!("Analyzing granularity in {}", root.display());

    let run = || run_stages(root, config, &patterns);
    let results = match build_pool(&config.parallel) {
        Some(pool) => pool.install(run),
        None => run(),
    };

    log::info!(
        "Analysis complete: {} issues, {} files skipped",
        results.issues.len(),
        results.warnings.len()
    );
    Ok(results)
}

/// A dedicated pool sized by `jobs`, so repeated runs in one process never
/// fight over rayon's global pool.
fn build_pool(parallel: &ParallelConfig) -> Option<rayon::ThreadPool> {
    if !parallel.enabled {
        return None;
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(parallel.worker_count())
        .thread_name(|i| format!("grainmap-scan-{i}"))
        .build()
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            log::warn!("Falling back to the global thread pool: {e}");
            None
        }
    }
}

fn run_stages(root: &Path, config: &GrainmapConfig, patterns: &Patterns) -> AnalysisResults {
    let layout = &config.layout;
    let target = |dir: PathBuf, label: &'static str| ScanTarget {
        root,
        dir,
        label,
        extensions: &layout.extensions,
        parallel: config.parallel.enabled,
    };

    let schemas = {
        let _phase = set_phase(AnalysisPhase::SchemaExtraction);
        extract_schemas(&target(layout.records_dir(root), "Input row"), &patterns.schema)
    };
    let maps = {
        let _phase = set_phase(AnalysisPhase::MapExtraction);
        extract_map_structures(&target(layout.containers_dir(root), "Data"), &patterns.map)
    };
    let getters = {
        let _phase = set_phase(AnalysisPhase::AccessorExtraction);
        extract_getters(&target(layout.containers_dir(root), "Data"), &patterns.accessor)
    };
    let sites = {
        let _phase = set_phase(AnalysisPhase::Detection);
        extract_warning_sites(
            &target(layout.validations_dir(root), "Validation"),
            &config.conventions.warning_call,
        )
    };

    let mut warnings = Vec::new();
    let models = SourceModels {
        schemas: absorb(schemas, "schemas", &mut warnings),
        map_structures: absorb(maps, "map structures", &mut warnings),
        getters: absorb(getters, "getters", &mut warnings),
        warning_sites: absorb(sites, "validations", &mut warnings),
    };

    let mut issues = {
        let _phase = set_phase(AnalysisPhase::Detection);
        let ctx = DetectionContext::new(&models);
        run_detectors(&default_detectors(&config.conventions), &ctx)
    };

    {
        let _phase = set_phase(AnalysisPhase::Scoring);
        score_issues(&mut issues, &config.scoring);
        rank_issues(&mut issues);
    }

    AnalysisResults {
        project_path: root.to_path_buf(),
        models,
        issues,
        warnings,
    }
}

/// Move a stage's failures into the run-wide list and keep its model.
fn absorb<M>(extracted: Extracted<M>, label: &str, warnings: &mut Vec<FileFailure>) -> M {
    log::debug!(
        "{label}: scanned {} files, skipped {}",
        extracted.files_scanned,
        extracted.failures.len()
    );
    warnings.extend(extracted.failures);
    extracted.model
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn module_is_joined_onto_repository() {
        let repo = Path::new("/repos/irisx");
        assert_eq!(resolve_root(repo, Some("planning")), repo.join("planning"));
        assert_eq!(resolve_root(repo, None), repo.to_path_buf());
        assert_eq!(resolve_root(repo, Some("")), repo.to_path_buf());
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = analyze(&missing, &GrainmapConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::RootNotFound { .. }));
    }

    #[test]
    fn empty_root_yields_empty_results() {
        let temp = TempDir::new().unwrap();
        let mut config = GrainmapConfig::default();
        config.parallel = ParallelConfig::sequential();

        let results = analyze(temp.path(), &config).unwrap();
        assert!(results.issues.is_empty());
        assert!(results.warnings.is_empty());
        assert_eq!(results.models, SourceModels::default());
    }
}
