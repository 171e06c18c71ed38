//! RGB colour values for fills, strokes and text.

/// RGB color with channels in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels, e.g. `Color::rgb8(0xF5, 0xC5, 0x18)`.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a black color.
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a white color.
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_scales_channels() {
        assert_eq!(Color::rgb8(0xFF, 0xFF, 0xFF), Color::white());
        assert_eq!(Color::rgb8(0, 0, 0), Color::black());
        assert!((Color::rgb8(0x80, 0, 0).r - 0.50196).abs() < 1e-5);
    }
}
