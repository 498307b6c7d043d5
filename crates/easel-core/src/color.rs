//! 8-bit device color.
//!
//! The UI and tool layers speak 8-bit RGB (color pickers, swatches,
//! default palettes). [`Rgb8`] is the bridge type a colorspace accepts
//! and produces when converting between device colors and its native
//! channel depth.

use std::fmt;

/// An 8-bit RGB device color, logical component order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque black.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hex() {
        assert_eq!(Rgb8::new(255, 128, 0).to_string(), "#ff8000");
        assert_eq!(Rgb8::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_from_tuple() {
        let c: Rgb8 = (10, 20, 30).into();
        assert_eq!(c, Rgb8::new(10, 20, 30));
    }
}
