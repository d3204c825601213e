//! Error types for grainmap analysis operations.
//!
//! Every [`AnalysisError`] that reaches a caller ends the run: a missing
//! root, an unreadable or invalid explicit config file, or a convention that
//! does not compile. Anything that goes wrong while reading or scanning a
//! single file becomes a [`FileFailure`] instead. It is logged, and the file
//! is skipped for this run.

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The repository (or module) root handed to the engine is missing.
    #[error("Repository path does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configured naming convention produced an invalid regular expression.
    #[error("Invalid pattern: {message}")]
    Pattern { message: String },

    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl AnalysisError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<regex::Error> for AnalysisError {
    fn from(err: regex::Error) -> Self {
        Self::pattern(err.to_string())
    }
}

/// A file that was skipped during one stage of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

impl FileFailure {
    pub fn new(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Log this failure as a warning and hand it back for collection.
    pub fn logged(self) -> Self {
        log::warn!("Skipping {}: {}", self.path.display(), self.message);
        self
    }
}

impl From<AnalysisError> for FileFailure {
    fn from(err: AnalysisError) -> Self {
        let path = match &err {
            AnalysisError::RootNotFound { path }
            | AnalysisError::Io { path, .. }
            | AnalysisError::Config { path, .. } => path.clone(),
            AnalysisError::Pattern { .. } => PathBuf::new(),
        };
        let mut message = err.to_string();
        let mut cause = std::error::Error::source(&err);
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }
        Self { path, message }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
