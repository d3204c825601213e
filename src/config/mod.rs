// Sub-modules
mod core;
mod loader;
mod parallel;
mod scoring;

pub use self::core::{ConventionsConfig, GrainmapConfig, LayoutConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from_file, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
pub use scoring::ScoringWeights;
