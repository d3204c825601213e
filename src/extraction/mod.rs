//! Lexical extraction of the three structural models.
//!
//! Each extractor is a narrow, line- or file-oriented pattern match over a
//! small grammar subset (type declarations, field declarations, single-line
//! signatures, single-expression call sites). Anything outside that subset is
//! treated as "not found" rather than guessed at.
//!
//! Files are scanned independently, optionally in parallel, and merged in
//! discovery order so every correlation group has a reproducible order.

pub mod accessor;
pub mod map_structure;
pub mod schema;
pub mod validation;

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AnalysisError, FileFailure};
use crate::io::{relative_to, FileWalker};
use crate::observability::{
    get_current_context, increment_processed, set_current_file, set_phase, start_progress,
};

pub use accessor::{extract_getters, parse_getter_methods, AccessorPatterns};
pub use map_structure::{
    extract_map_structures, find_key_construction, parse_map_structures, MapPatterns,
};
pub use schema::{
    extract_schemas, granularity_label, is_natural_key, parse_record, SchemaPatterns,
};
pub use validation::{extract_warning_sites, parse_warning_sites};

/// Per-file results of one stage, in discovery order.
#[derive(Debug)]
pub struct StageOutput<T> {
    pub items: Vec<T>,
    pub failures: Vec<FileFailure>,
    pub files_scanned: usize,
}

impl<T> Default for StageOutput<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
            files_scanned: 0,
        }
    }
}

/// One extracted model plus what the stage had to skip.
#[derive(Debug, Default)]
pub struct Extracted<M> {
    pub model: M,
    pub failures: Vec<FileFailure>,
    pub files_scanned: usize,
}

/// Where and how a stage scans.
pub struct ScanTarget<'a> {
    /// Analysed root; reported paths are relative to it.
    pub root: &'a Path,
    /// Subtree holding the stage's files.
    pub dir: PathBuf,
    /// Human label used in warnings ("Input row", "Data", ...).
    pub label: &'a str,
    pub extensions: &'a [String],
    pub parallel: bool,
}

/// Read every matching file under `target.dir` and run `scan` on its text.
///
/// A missing subtree yields an empty output and a warning. Unreadable or
/// undecodable files become [`FileFailure`]s and are skipped.
pub(crate) fn scan_files<T, F>(target: &ScanTarget<'_>, scan: F) -> StageOutput<T>
where
    T: Send,
    F: Fn(&str, &Path) -> Vec<T> + Sync,
{
    if !target.dir.is_dir() {
        log::warn!(
            "{} path not found: {}",
            target.label,
            target.dir.display()
        );
        return StageOutput::default();
    }

    let discovery = FileWalker::new(&target.dir)
        .with_extensions(target.extensions.to_vec())
        .walk();
    start_progress(discovery.files.len());

    let phase = get_current_context().phase;
    let scan_one = |path: &PathBuf| -> Result<Vec<T>, FileFailure> {
        let _phase = phase.map(set_phase);
        let _file = set_current_file(path);
        let relative = relative_to(path, target.root);
        let result = fs::read_to_string(path)
            .map(|content| scan(content.as_str(), relative.as_path()))
            .map_err(|e| FileFailure::from(AnalysisError::io(&relative, e)).logged());
        increment_processed();
        result
    };

    let results: Vec<Result<Vec<T>, FileFailure>> = if target.parallel {
        discovery.files.par_iter().map(scan_one).collect()
    } else {
        discovery.files.iter().map(scan_one).collect()
    };

    let mut output = StageOutput {
        items: Vec::new(),
        failures: discovery.failures,
        files_scanned: discovery.files.len(),
    };
    for result in results {
        match result {
            Ok(items) => output.items.extend(items),
            Err(failure) => output.failures.push(failure),
        }
    }
    output
}
