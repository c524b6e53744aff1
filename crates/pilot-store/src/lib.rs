//! Pilot Store: persistence for the palette library.
//!
//! A [`KeyValueStore`] holds serialized values under string keys;
//! [`PaletteLibrary`] keeps history, saved palettes, and saved colors on top
//! of it.

pub mod backend;
pub mod error;
pub mod library;
pub mod persisted;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::{LibraryError, StoreError};
pub use library::{ColorToggle, PaletteLibrary, SaveOutcome};
pub use persisted::Persisted;
