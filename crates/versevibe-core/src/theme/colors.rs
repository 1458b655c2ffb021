//! Color value type for theme tokens

use std::fmt;

/// RGBA color: 8-bit channels plus a 0.0..=1.0 alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Create a color with explicit alpha
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            1.0,
        )
    }

    /// Same channels, different alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// Channels as an array, ignoring alpha
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Composite this color over an opaque background
    pub fn over(self, background: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        Rgba::new(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
            1.0,
        )
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

/// Renders the CSS form: `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Transparent color
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

/// White color
pub const WHITE: Rgba = Rgba::rgb(0xffffff);

/// Black color
pub const BLACK: Rgba = Rgba::rgb(0x000000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rendering() {
        assert_eq!(Rgba::rgb(0x60a5fa).to_string(), "#60a5fa");
        assert_eq!(Rgba::new(96, 165, 250, 0.45).to_string(), "rgba(96,165,250,0.45)");
        assert_eq!(TRANSPARENT.to_string(), "rgba(0,0,0,0)");
    }

    #[test]
    fn test_compositing() {
        assert_eq!(WHITE.with_alpha(0.5).over(BLACK).channels(), [128, 128, 128]);
        assert_eq!(TRANSPARENT.over(WHITE), WHITE);
        assert_eq!(Rgba::rgb(0x123456).over(WHITE), Rgba::rgb(0x123456));
    }
}
