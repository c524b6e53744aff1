//! Perceived-brightness classification for choosing overlay text color.
//!
//! Uses the HSP model rather than WCAG relative luminance:
//! ```text
//! hsp = sqrt(0.299 × r² + 0.587 × g² + 0.114 × b²)
//! ```
//! on 0–255 channels, with a fixed light/dark threshold of 127.5.

/// Scores strictly above this are classified as light.
pub const HSP_THRESHOLD: f64 = 127.5;

const HSP_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// HSP perceived brightness for 0–255 channels.
pub fn hsp_brightness(r: f64, g: f64, b: f64) -> f64 {
    (HSP_WEIGHTS[0] * r * r + HSP_WEIGHTS[1] * g * g + HSP_WEIGHTS[2] * b * b).sqrt()
}

/// Whether `hex` reads as a light background (so dark text should sit on it).
///
/// Accepts `rgb` shorthand and `rrggbb`, each with or without `#`. Anything
/// unparseable counts as light, so text over a broken swatch stays
/// dark-on-light.
pub fn is_light(hex: &str) -> bool {
    match expand_channels(hex) {
        Some([r, g, b]) => hsp_brightness(r.into(), g.into(), b.into()) > HSP_THRESHOLD,
        None => {
            tracing::debug!("is_light: unparseable color {hex:?}, defaulting to light");
            true
        }
    }
}

fn expand_channels(hex: &str) -> Option<[u8; 3]> {
    // Only the first `#` is stripped; `##fff` stays invalid.
    let digits = hex.replacen('#', "", 1);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibbles: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    match nibbles.as_slice() {
        &[r, g, b] => Some([r * 17, g * 17, b * 17]),
        &[r1, r2, g1, g2, b1, b2] => Some([r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2]),
        _ => None,
    }
}
