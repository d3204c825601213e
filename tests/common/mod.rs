// Shared fixtures for grainmap integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use grainmap::config::{GrainmapConfig, ParallelConfig};

pub const RECORDS: &str = "src/main/java/com/increff/irisx/row/input";
pub const CONTAINERS: &str = "src/main/java/com/increff/irisx/data";
pub const VALIDATIONS: &str = "src/main/java/com/increff/irisx/validation";

/// A throwaway repository laid out with the default conventions.
pub struct JavaRepo {
    dir: TempDir,
}

impl JavaRepo {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp repo"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("fixture has a parent")).expect("create dirs");
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn record(&self, file: &str, content: &str) -> PathBuf {
        self.write(Path::new(RECORDS).join(file), content)
    }

    pub fn container(&self, file: &str, content: &str) -> PathBuf {
        self.write(Path::new(CONTAINERS).join(file), content)
    }

    pub fn validation(&self, file: &str, content: &str) -> PathBuf {
        self.write(Path::new(VALIDATIONS).join(file), content)
    }
}

pub fn sequential_config() -> GrainmapConfig {
    GrainmapConfig {
        parallel: ParallelConfig::sequential(),
        ..GrainmapConfig::default()
    }
}

pub fn record_path(file: &str) -> PathBuf {
    Path::new(RECORDS).join(file)
}

pub fn container_path(file: &str) -> PathBuf {
    Path::new(CONTAINERS).join(file)
}
