//! Color representations: hex encoding, RGB/HSL conversion, and perceived lightness.

pub mod hex;
pub mod hsl;
pub mod luma;

pub use hex::{Rgb, format_hex, parse_hex};
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use luma::{HSP_THRESHOLD, hsp_brightness, is_light};
