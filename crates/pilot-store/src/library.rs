//! The user's palette library: generation history, saved palettes, and
//! bookmarked individual colors.
//!
//! Each collection is a [`Persisted`] value under its own key, so a library
//! opened on the same store picks up where the last one left off. All lists
//! are ordered newest first.

use pilot_core::model::{ADJUSTED_MARKER, base_id};
use pilot_core::{Color, Palette, SavedColor};

use crate::backend::KeyValueStore;
use crate::error::LibraryError;
use crate::persisted::Persisted;

pub const SAVED_PALETTES_KEY: &str = "palettePilot_savedPalettes";
pub const HISTORY_KEY: &str = "palettePilot_paletteHistory";
pub const SAVED_COLORS_KEY: &str = "palettePilot_savedIndividualColors";

/// History keeps at most this many palettes.
pub const HISTORY_LIMIT: usize = 20;

/// Longest accepted palette name, in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// What [`PaletteLibrary::save_palette`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Added as a new saved palette.
    Saved,
    /// Replaced an existing saved palette with the same base id.
    Updated,
}

/// What [`PaletteLibrary::toggle_saved_color`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToggle {
    Saved,
    Removed,
}

pub struct PaletteLibrary<S> {
    store: S,
    history: Persisted<Vec<Palette>>,
    saved_palettes: Persisted<Vec<Palette>>,
    saved_colors: Persisted<Vec<SavedColor>>,
}

impl<S: KeyValueStore> PaletteLibrary<S> {
    /// Open the library stored in `store`. Missing or corrupt collections
    /// start out empty.
    pub fn open(store: S) -> Self {
        let history = Persisted::load(&store, HISTORY_KEY, Vec::new);
        let saved_palettes = Persisted::load(&store, SAVED_PALETTES_KEY, Vec::new);
        let saved_colors = Persisted::load(&store, SAVED_COLORS_KEY, Vec::new);
        Self {
            store,
            history,
            saved_palettes,
            saved_colors,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn history(&self) -> &[Palette] {
        self.history.get()
    }

    pub fn saved_palettes(&self) -> &[Palette] {
        self.saved_palettes.get()
    }

    pub fn saved_colors(&self) -> &[SavedColor] {
        self.saved_colors.get()
    }

    /// Look a palette up by exact id, saved palettes first, then history.
    pub fn find_palette(&self, id: &str) -> Option<&Palette> {
        self.saved_palettes()
            .iter()
            .chain(self.history())
            .find(|p| p.id == id)
    }

    // ── History ──────────────────────────────────────────────────

    /// Put `palette` at the front of the history, replacing any entry with
    /// the same id and dropping the oldest beyond [`HISTORY_LIMIT`].
    pub fn record_generated(&mut self, palette: Palette) -> Result<(), LibraryError> {
        tracing::debug!("recording palette {} in history", palette.id);
        self.history.update(&self.store, |history| {
            history.retain(|p| p.id != palette.id);
            history.insert(0, palette);
            history.truncate(HISTORY_LIMIT);
        })?;
        Ok(())
    }

    /// Turn an adjustment preview into a history entry.
    ///
    /// The result gets the id `<base id>-adjusted-<now ms>` and is flagged
    /// as adjusted.
    pub fn apply_adjustment(&mut self, preview: Palette) -> Result<Palette, LibraryError> {
        let id = format!("{}{ADJUSTED_MARKER}-{}", base_id(&preview.id), now_ms());
        let adjusted = Palette {
            id,
            is_adjusted: Some(true),
            ..preview
        };
        self.record_generated(adjusted.clone())?;
        tracing::info!("Palette adjusted: {}", adjusted.id);
        Ok(adjusted)
    }

    pub fn clear_history(&mut self) -> Result<(), LibraryError> {
        self.history.set(&self.store, Vec::new())?;
        tracing::info!("History cleared");
        Ok(())
    }

    // ── Saved palettes ───────────────────────────────────────────

    /// Save `palette` under its base id.
    ///
    /// The adjusted flag is cleared and a missing name defaults to
    /// `Palette <first 4 chars of id>`. An already saved palette with the
    /// same base id is replaced in place; otherwise the palette goes first.
    pub fn save_palette(&mut self, palette: &Palette) -> Result<(Palette, SaveOutcome), LibraryError> {
        let id = base_id(&palette.id).to_string();
        let name = palette
            .name
            .clone()
            .unwrap_or_else(|| format!("Palette {}", id.chars().take(4).collect::<String>()));
        let to_save = Palette {
            id,
            name: Some(name),
            colors: palette.colors.clone(),
            is_adjusted: Some(false),
        };

        let stored = to_save.clone();
        let outcome = self.saved_palettes.update(&self.store, move |saved| {
            match saved.iter_mut().find(|p| p.id == stored.id) {
                Some(existing) => {
                    *existing = stored;
                    SaveOutcome::Updated
                }
                None => {
                    saved.insert(0, stored);
                    SaveOutcome::Saved
                }
            }
        })?;

        tracing::info!("Palette {outcome:?}: {:?}", to_save.display_name());
        Ok((to_save, outcome))
    }

    /// Remove a saved palette. Returns it if it existed.
    pub fn delete_palette(&mut self, id: &str) -> Result<Option<Palette>, LibraryError> {
        let removed = self.saved_palettes.update(&self.store, |saved| {
            let pos = saved.iter().position(|p| p.id == id)?;
            Some(saved.remove(pos))
        })?;
        if let Some(p) = &removed {
            tracing::info!("Palette deleted: {:?}", p.display_name());
        }
        Ok(removed)
    }

    /// Rename a saved palette and every history entry derived from it
    /// (same base id). Names must be 1–50 characters.
    pub fn rename_palette(&mut self, id: &str, name: &str) -> Result<(), LibraryError> {
        validate_name(name)?;
        let found = self.saved_palettes.update(&self.store, |saved| {
            saved
                .iter_mut()
                .find(|p| p.id == id)
                .map(|p| p.name = Some(name.to_string()))
                .is_some()
        })?;
        if !found {
            return Err(LibraryError::NotFound(id.to_string()));
        }
        self.history.update(&self.store, |history| {
            for p in history.iter_mut().filter(|p| base_id(&p.id) == id) {
                p.name = Some(name.to_string());
            }
        })?;
        tracing::info!("Palette {id} renamed to {name:?}");
        Ok(())
    }

    /// Whether the palette `id` (or the palette it was adjusted from) is saved.
    pub fn is_palette_saved(&self, id: &str) -> bool {
        let base = base_id(id);
        self.saved_palettes().iter().any(|p| p.id == base)
    }

    // ── Saved colors ─────────────────────────────────────────────

    /// Bookmark `color`, or un-bookmark it if a color with the same hex
    /// (case-insensitive) is already saved.
    pub fn toggle_saved_color(&mut self, color: &Color) -> Result<ColorToggle, LibraryError> {
        let saved_at = now_ms();
        let toggle = self.saved_colors.update(&self.store, |saved| {
            match saved
                .iter()
                .position(|c| c.color.hex.eq_ignore_ascii_case(&color.hex))
            {
                Some(pos) => {
                    saved.remove(pos);
                    ColorToggle::Removed
                }
                None => {
                    saved.insert(0, SavedColor::new(color.clone(), saved_at));
                    ColorToggle::Saved
                }
            }
        })?;
        tracing::info!("Color {toggle:?}: {} ({})", color.name, color.hex);
        Ok(toggle)
    }

    pub fn is_color_saved(&self, hex: &str) -> bool {
        self.saved_colors()
            .iter()
            .any(|c| c.color.hex.eq_ignore_ascii_case(hex))
    }

    /// Remove a bookmarked color by its saved id. Returns it if it existed.
    pub fn delete_saved_color(&mut self, id: &str) -> Result<Option<SavedColor>, LibraryError> {
        let removed = self.saved_colors.update(&self.store, |saved| {
            let pos = saved.iter().position(|c| c.id == id)?;
            Some(saved.remove(pos))
        })?;
        if let Some(c) = &removed {
            tracing::info!("Color removed: {} ({})", c.color.name, c.color.hex);
        }
        Ok(removed)
    }
}

fn validate_name(name: &str) -> Result<(), LibraryError> {
    let len = name.chars().count();
    if len == 0 {
        return Err(LibraryError::EmptyName);
    }
    if len > MAX_NAME_CHARS {
        return Err(LibraryError::NameTooLong(len));
    }
    Ok(())
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
