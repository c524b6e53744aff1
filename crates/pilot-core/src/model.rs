//! Value types exchanged with the UI, the store, and the generation service.
//!
//! Field names serialize in camelCase so previously saved palettes keep
//! loading unchanged.

use serde::{Deserialize, Serialize};

/// Suffix marking a palette id as derived from an adjustment.
pub const ADJUSTED_MARKER: &str = "-adjusted";

/// A named swatch. `hex` is usually `#rrggbb` but is never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub name: String,
}

impl Color {
    pub fn new(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
        }
    }
}

/// An ordered set of colors with an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub colors: Vec<Color>,
    /// Set on palettes produced by an adjustment and cleared again on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_adjusted: Option<bool>,
}

impl Palette {
    pub fn new(id: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            id: id.into(),
            name: None,
            colors,
            is_adjusted: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The id this palette was derived from: everything before the first
    /// `-adjusted` marker, or the whole id.
    pub fn base_id(&self) -> &str {
        base_id(&self.id)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled")
    }
}

/// Strip any `-adjusted…` suffix from a palette id.
pub fn base_id(id: &str) -> &str {
    id.split(ADJUSTED_MARKER).next().unwrap_or(id)
}

/// A single color bookmarked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedColor {
    pub id: String,
    #[serde(flatten)]
    pub color: Color,
    /// Milliseconds since the Unix epoch.
    pub saved_at: i64,
}

impl SavedColor {
    /// Bookmark `color` at `saved_at`; the id is `<hex>-<saved_at>`.
    pub fn new(color: Color, saved_at: i64) -> Self {
        Self {
            id: format!("{}-{}", color.hex, saved_at),
            color,
            saved_at,
        }
    }
}
