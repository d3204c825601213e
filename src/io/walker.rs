use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::FileFailure;

/// Files found under one stage root, plus directory entries that could not
/// be visited.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FileWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec!["java".to_string()],
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Walk the root recursively in file-name order.
    ///
    /// Sorting makes discovery order stable across platforms, which in turn
    /// fixes the order of every correlation group.
    pub fn walk(&self) -> Discovery {
        let mut discovery = Discovery::default();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    if self.should_process(entry.path()) {
                        discovery.files.push(entry.into_path());
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    discovery
                        .failures
                        .push(FileFailure::new(path, err.to_string()).logged());
                }
            }
        }

        discovery
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy();
                self.extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(&ext))
            })
            .unwrap_or(false)
    }
}

/// Path of `path` relative to `root`, or `path` itself when it lies outside.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
