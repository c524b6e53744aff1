//! Color adjustments: HSL deltas, temperature shift, and whole-palette application.

pub mod hsl;
pub mod palette;
pub mod temperature;

pub use hsl::adjust_hsl;
pub use palette::PaletteAdjustment;
pub use temperature::adjust_temperature;
