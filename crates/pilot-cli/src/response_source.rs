//! Palette source backed by a recorded service response on disk.

use std::fs;
use std::path::PathBuf;

use pilot_core::source::{PaletteSource, SourceError, parse_generation_output};
use pilot_core::Color;

/// Answers every prompt with the colors from a saved
/// `{"colors": [{"hex", "name"}, ...]}` response file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PaletteSource for JsonFileSource {
    fn generate(&self, prompt: &str) -> Result<Vec<Color>, SourceError> {
        tracing::debug!("answering {prompt:?} from {}", self.path.display());
        let json = fs::read_to_string(&self.path).map_err(|e| {
            SourceError::Service(format!("failed to read {}: {e}", self.path.display()))
        })?;
        parse_generation_output(&json)
    }
}
