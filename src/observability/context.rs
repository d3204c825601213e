//! Thread-local record of what the engine is doing right now.
//!
//! Rayon workers each have their own context, so stage functions re-enter the
//! current phase on the worker before scanning a file. File counters are
//! global atomics.

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static FILES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    pub current_file: Option<PathBuf>,
    /// Detector running when the snapshot was taken
    pub current_detector: Option<&'static str>,
}

impl AnalysisContext {
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
            current_detector: None,
        }
    }
}

/// The five pipeline stages, with reporting split out as its own phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    SchemaExtraction,
    MapExtraction,
    AccessorExtraction,
    Detection,
    Scoring,
    Reporting,
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SchemaExtraction => "schema_extraction",
            Self::MapExtraction => "map_extraction",
            Self::AccessorExtraction => "accessor_extraction",
            Self::Detection => "detection",
            Self::Scoring => "scoring",
            Self::Reporting => "reporting",
        };
        f.write_str(name)
    }
}

/// Restores the previous context when dropped.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = std::mem::take(&mut self.previous);
        CURRENT_CONTEXT.with(|ctx| *ctx.borrow_mut() = previous);
    }
}

fn update(apply: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update(|ctx| ctx.current_file = Some(path))
}

#[must_use]
pub fn set_current_detector(name: &'static str) -> ContextGuard {
    update(|ctx| ctx.current_detector = Some(name))
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Start counting a new batch of `total` files.
pub fn start_progress(total: usize) {
    FILES_PROCESSED.store(0, Ordering::Relaxed);
    FILES_TOTAL.store(total, Ordering::Relaxed);
}

/// Safe to call from parallel iterators.
pub fn increment_processed() {
    FILES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        FILES_PROCESSED.load(Ordering::Relaxed),
        FILES_TOTAL.load(Ordering::Relaxed),
    )
}
