//! Palette export as CSS custom properties or JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::Palette;

/// Supported export payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `--palette-<id>-color-<n>-hex/name` custom properties.
    Css,
    /// Pretty-printed palette JSON (2-space indent).
    Json,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
    #[error("failed to serialize palette: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `palette` in the requested format.
pub fn export_palette(palette: &Palette, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(palette)?),
        ExportFormat::Css => Ok(export_css(palette)),
    }
}

fn export_css(palette: &Palette) -> String {
    let id = css_identifier(palette.id.split('-').next().unwrap_or_default());

    palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let n = i + 1;
            format!(
                "--palette-{id}-color-{n}-hex: {};\n--palette-{id}-color-{n}-name: \"{}\";",
                color.hex,
                color.name.replace('"', "\\\"")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Suggested file name for an export: the palette name with whitespace
/// runs turned into `_` and everything outside `[A-Za-z0-9_]` dropped.
pub fn export_file_name(palette: &Palette, format: ExportFormat) -> String {
    let name = palette.name.as_deref().unwrap_or("palette");

    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' {
            stem.push(c);
        }
    }

    if stem.is_empty() {
        stem.push_str("custom_palette");
    }
    format!("{stem}.{}", format.extension())
}

fn css_identifier(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect()
}
