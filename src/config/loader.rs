use std::fs;
use std::path::{Path, PathBuf};

use super::core::GrainmapConfig;
use crate::errors::AnalysisError;

pub const CONFIG_FILE_NAME: &str = ".grainmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse `.grainmap.toml` contents and reject invalid values.
pub fn parse_and_validate_config(contents: &str) -> Result<GrainmapConfig, String> {
    let config = toml::from_str::<GrainmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn try_load_config_from_path(config_path: &Path) -> Option<GrainmapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // A missing file is the common case.
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Search `start` and its ancestors for `.grainmap.toml`.
///
/// Unreadable or invalid files are skipped with a warning; nothing found
/// means defaults.
pub fn load_config(start: &Path) -> GrainmapConfig {
    let start = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No {} within {} directories, using defaults",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            GrainmapConfig::default()
        })
}

/// Load an explicitly requested config file. Unlike discovery, any failure
/// here is an error.
pub fn load_config_from_file(path: &Path) -> Result<GrainmapConfig, AnalysisError> {
    let contents = fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
    parse_and_validate_config(&contents).map_err(|message| AnalysisError::config(path, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ancestors_stop_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn config_is_found_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[conventions]\nwarning_call = \"warn\"\n",
        )
        .unwrap();
        let nested = temp.path().join("module");
        fs::create_dir(&nested).unwrap();

        let config = load_config(&nested);
        assert_eq!(config.conventions.warning_call, "warn");
    }

    #[test]
    fn invalid_discovered_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[scoring\n").unwrap();

        let config = load_config(temp.path());
        assert_eq!(config, GrainmapConfig::default());
    }

    #[test]
    fn invalid_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[scoring]\npattern_a = -1.0\n").unwrap();

        let err = load_config_from_file(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::Config { .. }));
    }
}
