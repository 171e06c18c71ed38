//! GICLUB brand colours.

use crate::writer::Color;

/// Primary accent, titles and highlights (`#F5C518`).
pub const GOLD: Color = Color::rgb8(0xF5, 0xC5, 0x18);
/// Page background (`#0D0D1A`).
pub const DARK: Color = Color::rgb8(0x0D, 0x0D, 0x1A);
/// Header bars and logo discs (`#0A1628`).
pub const NAVY: Color = Color::rgb8(0x0A, 0x16, 0x28);
/// `#FFFFFF`
pub const WHITE: Color = Color::rgb8(0xFF, 0xFF, 0xFF);
/// Secondary text (`#E8EAF0`).
pub const LIGHT: Color = Color::rgb8(0xE8, 0xEA, 0xF0);
/// `#00C896`
pub const GREEN: Color = Color::rgb8(0x00, 0xC8, 0x96);
/// Section heads and call-to-action panels (`#7B2FBE`).
pub const PURPLE: Color = Color::rgb8(0x7B, 0x2F, 0xBE);
/// `#FF6B35`
pub const ORANGE: Color = Color::rgb8(0xFF, 0x6B, 0x35);

/// Card surface tone (`#1A1A2E`); not part of the named palette.
pub const CARD: Color = Color::rgb8(0x1A, 0x1A, 0x2E);

/// The named brand palette.
pub const BRAND_PALETTE: [(&str, Color); 8] = [
    ("GOLD", GOLD),
    ("DARK", DARK),
    ("NAVY", NAVY),
    ("WHITE", WHITE),
    ("LIGHT", LIGHT),
    ("GREEN", GREEN),
    ("PURPLE", PURPLE),
    ("ORANGE", ORANGE),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(color: Color) -> String {
        let channel = |v: f32| (v * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", channel(color.r), channel(color.g), channel(color.b))
    }

    #[test]
    fn test_palette_matches_brand_hex() {
        let expected = [
            "#F5C518", "#0D0D1A", "#0A1628", "#FFFFFF", "#E8EAF0", "#00C896", "#7B2FBE", "#FF6B35",
        ];
        for ((name, color), expected) in BRAND_PALETTE.iter().zip(expected) {
            assert_eq!(hex(*color), expected, "{}", name);
        }
        assert_eq!(hex(CARD), "#1A1A2E");
    }
}
