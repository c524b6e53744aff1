//! RGB ⇄ HSL conversion.
//!
//! # Formula
//! ```text
//! l = (max + min) / 2
//! s = 0                          if max == min
//!   = d / (2 − max − min)        if l > 0.5
//!   = d / (max + min)            otherwise
//! h = 60 × ((g − b)/d mod 6)     if max == r
//!   = 60 × ((b − r)/d + 2)       if max == g
//!   = 60 × ((r − g)/d + 4)       if max == b
//! ```
//!
//! The inverse uses the two-parameter `(p, q)` hue helper evaluated at
//! `h + 1/3`, `h` and `h − 1/3`. A round trip reproduces every 8-bit
//! triple within ±1 per channel.

use crate::color::hex::Rgb;

/// Hue in degrees, saturation and lightness in percent.
///
/// Hue is periodic and may sit outside `[0, 360)` while an adjustment is in
/// flight; saturation and lightness are expected in `[0, 100]` by the time
/// the value is converted back with [`hsl_to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Copy of `self` with a different lightness.
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

/// Convert RGB (0–255 channels) to HSL (degrees, percent, percent).
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Red wins ties, then green.
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL back to RGB. Output channels are rounded to whole numbers.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new((r * 255.0).round(), (g * 255.0).round(), (b * 255.0).round())
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
