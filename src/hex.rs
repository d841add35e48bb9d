//! Hex string parsing and formatting for `RRGGBB` colors.

use crate::color::Rgb;
use crate::constants::{CHANNEL_MAX, HEX_DIGITS};
use crate::error::{ColorError, Result};

/// Parse a 6-digit hex color, case-insensitive.
///
/// Surrounding whitespace and a single leading `#` are ignored. Anything
/// else that is not exactly six hex digits is rejected.
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != HEX_DIGITS || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        log::debug!("rejecting hex color {input:?}");
        return Err(ColorError::InvalidFormat(input.to_string()));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorError::InvalidFormat(input.to_string()))?;

    Ok(Rgb::new(
        f64::from((value >> 16) & 0xFF) / CHANNEL_MAX,
        f64::from((value >> 8) & 0xFF) / CHANNEL_MAX,
        f64::from(value & 0xFF) / CHANNEL_MAX,
    ))
}

/// Format as uppercase `RRGGBB` (no `#` prefix).
///
/// Channels are scaled to 0–255 and truncated, not rounded.
pub fn format_hex(rgb: Rgb) -> String {
    format!(
        "{:02X}{:02X}{:02X}",
        channel_byte(rgb.r()),
        channel_byte(rgb.g()),
        channel_byte(rgb.b())
    )
}

fn channel_byte(x: f64) -> u8 {
    (x * CHANNEL_MAX) as u8
}
