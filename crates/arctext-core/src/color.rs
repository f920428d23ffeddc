// this_file: crates/arctext-core/src/color.rs

//! Hex color parsing helpers.

use crate::{ArcTextError, Result};

/// Parse a `#RRGGBB` color into its channels. The leading `#` is optional;
/// the six hex digits are read as one 24-bit integer and split by shifting.
pub fn hex_to_rgb(value: &str) -> Result<(u8, u8, u8)> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 {
        return Err(ArcTextError::InvalidColor {
            value: value.to_string(),
        });
    }
    let bits = u32::from_str_radix(hex, 16).map_err(|_| ArcTextError::InvalidColor {
        value: value.to_string(),
    })?;
    Ok((
        ((bits >> 16) & 255) as u8,
        ((bits >> 8) & 255) as u8,
        (bits & 255) as u8,
    ))
}

/// Compose a hex color with an opacity into RGBA channels. Opacity is
/// expected in 0..1; values outside that range are clamped for the u8
/// conversion.
pub fn rgba_with_opacity(value: &str, opacity: f32) -> Result<(u8, u8, u8, u8)> {
    let (r, g, b) = hex_to_rgb(value)?;
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Ok((r, g, b, alpha))
}
