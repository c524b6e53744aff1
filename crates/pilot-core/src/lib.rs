//! Pilot Core: color engine for the palette generator.
//!
//! Hex/RGB/HSL conversion, hue/saturation/brightness/temperature
//! adjustment, perceived-lightness classification, shade ramps, palette
//! export, and the seam to the generation service. No I/O, no shared state:
//! every function is pure and callable from any thread.

pub mod adjust;
pub mod color;
pub mod error;
pub mod export;
pub mod model;
pub mod shades;
pub mod source;

// Re-exports for convenience.
pub use adjust::{PaletteAdjustment, adjust_hsl, adjust_temperature};
pub use color::{Hsl, Rgb, format_hex, hsl_to_rgb, is_light, parse_hex, rgb_to_hsl};
pub use error::HexError;
pub use export::{ExportError, ExportFormat, export_file_name, export_palette};
pub use model::{Color, Palette, SavedColor};
pub use shades::{DEFAULT_SHADE_COUNT, generate_shades};
pub use source::{PaletteSource, SourceError, generate_palette};
