//! Parallelism configuration for per-file scanning.

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Controls whether each extraction stage scans its files on rayon's pool.
///
/// Results are always merged in discovery order, so turning this off only
/// changes wall-clock time, never the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker count (default: all available cores)
    #[serde(default)]
    pub jobs: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            jobs: None,
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            jobs: None,
        }
    }

    /// Effective worker count. `Some(0)` is treated like `None`.
    pub fn worker_count(&self) -> usize {
        match self.jobs {
            Some(jobs) if jobs > 0 => jobs,
            _ => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}
