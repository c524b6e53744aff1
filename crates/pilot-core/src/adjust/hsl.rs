//! Hue / saturation / brightness adjustment in HSL space.

use crate::color::{Hsl, hsl_to_rgb, parse_hex, rgb_to_hsl};

/// Shift a hex color in HSL space.
///
/// - `hue_delta`: degrees, wrapped modulo 360.
/// - `saturation_delta`, `lightness_delta`: percentage points, the result
///   clamped to `[0, 100]` independently.
///
/// Unparseable input is returned unchanged. All-zero deltas reproduce the
/// input within ±1 per channel (output is always lowercase).
pub fn adjust_hsl(
    hex: &str,
    hue_delta: f64,
    saturation_delta: f64,
    lightness_delta: f64,
) -> String {
    let rgb = match parse_hex(hex) {
        Ok(rgb) => rgb,
        Err(e) => {
            tracing::debug!("adjust_hsl: passing through {hex:?}: {e}");
            return hex.to_string();
        }
    };

    let hsl = rgb_to_hsl(rgb);
    let adjusted = Hsl::new(
        wrap_hue(hsl.h + hue_delta),
        (hsl.s + saturation_delta).clamp(0.0, 100.0),
        (hsl.l + lightness_delta).clamp(0.0, 100.0),
    );

    hsl_to_rgb(adjusted).to_hex()
}

/// Wrap into `[0, 360)`. `%` keeps the dividend's sign, so one `+360` is enough.
fn wrap_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}
