use egui::Color32;

use crate::error::{PaintError, PaintResult};

/// Color the surface is cleared to, and the color the eraser paints with.
pub const BACKGROUND: Color32 = Color32::WHITE;

pub const ACCENT_PRIMARY: &str = "#FF6B6B";
pub const ACCENT_SECONDARY: &str = "#4ECDC4";

/// Palette offered before the user adds any custom colors.
pub fn default_palette() -> Vec<String> {
    vec![
        ACCENT_PRIMARY.to_owned(),
        ACCENT_SECONDARY.to_owned(),
        "#000000".to_owned(),
        "#FFFFFF".to_owned(),
    ]
}

/// Parse a `#RRGGBB` (or `RRGGBB`) hex string into an opaque color.
pub fn parse_hex(hex: &str) -> PaintResult<Color32> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PaintError::InvalidColor(hex.to_owned()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| PaintError::InvalidColor(hex.to_owned()))
    };
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Format an opaque color as `#RRGGBB`.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{r:02X}{g:02X}{b:02X}")
}
