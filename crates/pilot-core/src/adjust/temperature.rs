//! Warm/cool shift by trading red against blue.
//!
//! This is a compatibility transform, not a white-balance model: saved
//! palettes were produced with exactly these constants.
//!
//! ```text
//! change = delta × 0.6
//! delta > 0:  r' = min(255, r + change)     b' = max(0, b − 0.75 × change)
//! delta ≤ 0:  b' = min(255, b − change)     r' = max(0, r + 0.75 × change)
//! ```
//!
//! Green is never touched.

use crate::color::{format_hex, parse_hex};

/// Scale applied to the raw slider delta.
pub const TEMPERATURE_SCALE: f64 = 0.6;

/// Fraction of `change` applied to the opposing channel.
pub const CROSS_FACTOR: f64 = 0.75;

/// Warm (`delta > 0`) or cool (`delta ≤ 0`) a hex color.
///
/// `delta` is conventionally in `-50..=50` but is not range-checked.
/// Unparseable input is returned unchanged.
pub fn adjust_temperature(hex: &str, delta: f64) -> String {
    let rgb = match parse_hex(hex) {
        Ok(rgb) => rgb,
        Err(e) => {
            tracing::debug!("adjust_temperature: passing through {hex:?}: {e}");
            return hex.to_string();
        }
    };

    let change = delta * TEMPERATURE_SCALE;
    let (r, b) = if delta > 0.0 {
        (
            (rgb.r + change).min(255.0),
            (rgb.b - change * CROSS_FACTOR).max(0.0),
        )
    } else {
        (
            (rgb.r + change * CROSS_FACTOR).max(0.0),
            (rgb.b - change).min(255.0),
        )
    };

    format_hex(r, rgb.g, b)
}
