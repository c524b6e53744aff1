//! Runtime configuration for the command-line front end.

use std::path::PathBuf;

use pilot_core::DEFAULT_SHADE_COUNT;

/// Default directory for the file-backed store.
const DEFAULT_DATA_DIR: &str = ".palette-pilot";

/// Environment variable overriding the store directory.
pub const DATA_DIR_ENV: &str = "PALETTE_PILOT_DATA_DIR";
/// Environment variable overriding the default shade ramp length.
pub const SHADES_ENV: &str = "PALETTE_PILOT_SHADES";

/// Settings resolved from the environment, before CLI flags are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Directory holding one JSON file per library collection.
    pub data_dir: PathBuf,
    /// Shade ramp length when `--count` is not given.
    pub shade_count: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl CliConfig {
    /// Resolve settings through `lookup`, falling back to built-in defaults
    /// for anything missing or unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup(DATA_DIR_ENV)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            shade_count: lookup(SHADES_ENV)
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SHADE_COUNT),
        }
    }

    /// Apply a `--data-dir` flag, if given.
    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = dir;
        }
        self
    }
}
