//! `#rrggbb` encoding and decoding.
//!
//! Hex is the canonical wire format exchanged with the rest of the
//! application; [`Rgb`] only exists for the duration of a computation.

use crate::error::HexError;

/// An RGB triple with channels nominally in `0.0..=255.0`.
///
/// Channels are not required to be integral or in range until they are
/// encoded with [`format_hex`], which clamps and rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Encode as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format_hex(self.r, self.g, self.b)
    }
}

/// Decode a 6-digit hex color, case-insensitive, with an optional leading `#`.
///
/// Shorthand (`#fff`), alpha (`#rrggbbaa`) and anything else that is not
/// exactly six hex digits is rejected.
pub fn parse_hex(hex: &str) -> Result<Rgb, HexError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let len = digits.chars().count();
    if len != 6 {
        return Err(HexError::InvalidLength(len));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(bad));
    }

    // All six chars are ASCII, so byte slicing is safe.
    let channel = |i: usize| -> Result<f64, HexError> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(f64::from)
            .map_err(|_| HexError::InvalidDigit(digits.as_bytes()[i] as char))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Encode three channels as `#rrggbb`.
///
/// Each channel is rounded to the nearest integer and clamped to `[0, 255]`,
/// so any input (including out-of-range or NaN) produces six digits.
pub fn format_hex(r: f64, g: f64, b: f64) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        encode_channel(r),
        encode_channel(g),
        encode_channel(b)
    )
}

fn encode_channel(c: f64) -> u8 {
    // Float-to-int `as` saturates and maps NaN to 0.
    c.round().clamp(0.0, 255.0) as u8
}
