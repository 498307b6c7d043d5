//! Display image container and byte-order selection.
//!
//! # Types
//!
//! - [`DisplayFormat`] - channel order of the produced bytes
//! - [`DisplayImage`] - owned 8-bit image ready for a display surface
//!
//! # Design
//!
//! The engine hands rendered bytes straight to window-system buffers,
//! and those disagree about channel order (little-endian ARGB words read
//! as BGRA bytes, most GPU upload paths want RGBA). The order is a
//! runtime parameter instead of a build-time switch so one binary can
//! serve both.

use std::fmt;

/// Bytes per pixel in a rendered display image.
pub const DISPLAY_PIXEL_SIZE: usize = 4;

/// Channel order of a rendered display image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayFormat {
    /// Blue, green, red, alpha. Matches little-endian ARGB words.
    #[default]
    Bgra8,
    /// Red, green, blue, alpha.
    Rgba8,
}

impl DisplayFormat {
    /// Short identifier, used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            DisplayFormat::Bgra8 => "BGRA8",
            DisplayFormat::Rgba8 => "RGBA8",
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An 8-bit image produced by the display conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayImage {
    /// Packed pixel bytes, 4 per pixel, rows top to bottom.
    pub pixels: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel order of `pixels`.
    pub format: DisplayFormat,
}

impl DisplayImage {
    /// Bytes of row `y`.
    ///
    /// Panics if `y` is outside the image.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * DISPLAY_PIXEL_SIZE;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }
}
