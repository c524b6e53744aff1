//! Whole-palette adjustment.
//!
//! `PaletteAdjustment` is the slider state of the adjust dialog. Applying it
//! runs every color through the HSL shift first and the temperature shift
//! second.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::adjust::{adjust_hsl, adjust_temperature};
use crate::model::{ADJUSTED_MARKER, Color, Palette};

/// Slider range for the hue rotation, in degrees.
pub const HUE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
/// Slider range for the saturation shift, in percentage points.
pub const SATURATION_RANGE: RangeInclusive<f64> = -50.0..=50.0;
/// Slider range for the brightness (HSL lightness) shift, in percentage points.
pub const BRIGHTNESS_RANGE: RangeInclusive<f64> = -50.0..=50.0;
/// Slider range for the temperature shift.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = -50.0..=50.0;

/// Deltas applied uniformly to every color of a palette.
///
/// The ranges above are what the UI offers; values outside them are still
/// applied as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteAdjustment {
    /// Hue rotation in degrees.
    pub hue: f64,
    /// Saturation shift in percentage points.
    pub saturation: f64,
    /// Lightness shift in percentage points.
    pub brightness: f64,
    /// Warm (positive) / cool (negative) shift.
    pub temperature: f64,
}

impl PaletteAdjustment {
    /// True when applying this adjustment changes nothing but hex casing.
    pub fn is_identity(&self) -> bool {
        self.hue == 0.0 && self.saturation == 0.0 && self.brightness == 0.0 && self.temperature == 0.0
    }

    /// Adjust one color. The name is kept.
    pub fn apply_color(&self, color: &Color) -> Color {
        let hex = adjust_hsl(&color.hex, self.hue, self.saturation, self.brightness);
        Color {
            hex: adjust_temperature(&hex, self.temperature),
            name: color.name.clone(),
        }
    }

    /// Preview of `palette` with this adjustment applied.
    ///
    /// The preview keeps the palette's name and flag and gets the temporary
    /// id `<id>-adjusted`; the library assigns the final id when the preview
    /// is applied.
    pub fn apply(&self, palette: &Palette) -> Palette {
        Palette {
            id: format!("{}{ADJUSTED_MARKER}", palette.id),
            name: palette.name.clone(),
            colors: palette.colors.iter().map(|c| self.apply_color(c)).collect(),
            is_adjusted: palette.is_adjusted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette::new(
            "1700",
            vec![
                Color::new("#808080", "Gray"),
                Color::new("#FF0000", "Red"),
                Color::new("oops", "Broken"),
            ],
        )
        .with_name("Sample")
    }

    #[test]
    fn test_default_is_identity() {
        let adj = PaletteAdjustment::default();
        assert!(adj.is_identity());

        let out = adj.apply(&sample());
        assert_eq!(out.colors[0].hex, "#808080");
        assert_eq!(out.colors[1].hex, "#ff0000");
        assert_eq!(out.colors[2].hex, "oops");
    }

    #[test]
    fn test_preview_id_and_names() {
        let adj = PaletteAdjustment {
            hue: 30.0,
            ..Default::default()
        };
        let out = adj.apply(&sample());
        assert_eq!(out.id, "1700-adjusted");
        assert_eq!(out.name.as_deref(), Some("Sample"));
        let names: Vec<_> = out.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Gray", "Red", "Broken"]);
    }

    #[test]
    fn test_hsl_runs_before_temperature() {
        let adj = PaletteAdjustment {
            brightness: 10.0,
            temperature: 20.0,
            ..Default::default()
        };
        let color = Color::new("#336699", "Steel");
        let expected = adjust_temperature(&adjust_hsl("#336699", 0.0, 0.0, 10.0), 20.0);
        assert_eq!(adj.apply_color(&color).hex, expected);
    }

    #[test]
    fn test_temperature_only_matches_direct_call() {
        let adj = PaletteAdjustment {
            temperature: 50.0,
            ..Default::default()
        };
        let out = adj.apply(&sample());
        assert_eq!(out.colors[0].hex, "#9e806a");
        assert_eq!(out.colors[2].hex, "oops");
    }

    #[test]
    fn test_ranges_contain_zero() {
        for range in [HUE_RANGE, SATURATION_RANGE, BRIGHTNESS_RANGE, TEMPERATURE_RANGE] {
            assert!(range.contains(&0.0));
        }
    }
}
