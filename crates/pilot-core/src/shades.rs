//! Shade ramps: lightness-only variants of a base color.
//!
//! A ramp is symmetric around the base color: `steps` darker shades
//! (farthest first), the base color verbatim, then `steps` lighter shades
//! (nearest first). Lightness moves by `45 / steps` per step and stays
//! within `[5, 95]`; hue and saturation are held.
//!
//! ```text
//!   Darker N … Darker 1 │ base │ Lighter 1 … Lighter N
//! ```

use crate::color::{hsl_to_rgb, parse_hex, rgb_to_hsl};
use crate::model::Color;

/// Ramp length used when the caller has no preference.
pub const DEFAULT_SHADE_COUNT: usize = 9;

/// Total lightness excursion, in percentage points, on each side of the base.
pub const MAX_LIGHTNESS_CHANGE: f64 = 45.0;

/// Darkest lightness a generated shade may have.
pub const MIN_SHADE_LIGHTNESS: f64 = 5.0;

/// Lightest lightness a generated shade may have.
pub const MAX_SHADE_LIGHTNESS: f64 = 95.0;

/// Generate a shade ramp of `count` colors around `base`.
///
/// Even counts are bumped to the next odd number so the base sits in the
/// middle; the result always has `2 × (count / 2) + 1` entries. An
/// unparseable base yields just the base.
pub fn generate_shades(base: &Color, count: usize) -> Vec<Color> {
    let rgb = match parse_hex(&base.hex) {
        Ok(rgb) => rgb,
        Err(e) => {
            tracing::debug!("generate_shades: passing through {:?}: {e}", base.hex);
            return vec![base.clone()];
        }
    };

    let count = if count % 2 == 0 { count + 1 } else { count };
    let steps = count / 2;
    if steps == 0 {
        return vec![base.clone()];
    }

    let base_hsl = rgb_to_hsl(rgb);
    let step_size = MAX_LIGHTNESS_CHANGE / steps as f64;

    let shade = |lightness: f64, name: String| Color {
        hex: hsl_to_rgb(base_hsl.with_lightness(lightness)).to_hex(),
        name,
    };

    let mut shades = Vec::with_capacity(2 * steps + 1);

    for i in (1..=steps).rev() {
        let l = (base_hsl.l - i as f64 * step_size).max(MIN_SHADE_LIGHTNESS);
        shades.push(shade(l, format!("{} (Darker {i})", base.name)));
    }

    shades.push(base.clone());

    for i in 1..=steps {
        let l = (base_hsl.l + i as f64 * step_size).min(MAX_SHADE_LIGHTNESS);
        shades.push(shade(l, format!("{} (Lighter {i})", base.name)));
    }

    shades
}
