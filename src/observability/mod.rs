//! Crash-report context for analysis runs.
//!
//! Stages record the active phase and file in a thread-local context; the
//! panic hook reads it back so a crash report says where the engine was.
//!
//! ```ignore
//! use grainmap::observability::{set_current_file, set_phase, AnalysisPhase};
//!
//! let _phase = set_phase(AnalysisPhase::SchemaExtraction);
//! for file in files {
//!     let _file = set_current_file(&file);
//!     scan(&file);
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, set_current_detector,
    set_current_file, set_phase, start_progress, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
