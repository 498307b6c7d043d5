//! Exposure and gamma mapping from linear float channels to display bytes.
//!
//! Float canvases are scene-referred: values are linear light with no
//! upper bound, so showing them on an 8-bit surface takes a viewing
//! transform. This module implements the one the canvas widget applies:
//!
//! 1. multiply by `2^(exposure + 2.47393)`
//! 2. raise to the fixed display gamma `1/2.2`
//! 3. scale by 84.66 into framebuffer range, round, clamp to 0..=255
//!
//! The bias constant makes `2^2.47393` close to `1/0.18`, so at exposure
//! 0.0 a scene value of 0.18 (photographic middle gray) encodes to 1.0
//! before gamma and lands on framebuffer value 85. Alpha bypasses all of
//! this and is quantized directly.
//!
//! # Example
//!
//! ```
//! use easel_display::convert::{DISPLAY_GAMMA, convert_to_display, exposure_factor};
//!
//! let factor = exposure_factor(0.0);
//! assert_eq!(convert_to_display(0.18, factor, DISPLAY_GAMMA), 85);
//! ```
//!
//! # Used By
//!
//! - `easel-color` - the colorspace display hook

use easel_core::channel::{ChannelValue, to_byte};
use easel_core::error::{Error, Result};
use easel_core::layout;
use tracing::debug;

use crate::image::{DISPLAY_PIXEL_SIZE, DisplayFormat, DisplayImage};

// ============================================================================
// Viewing Transform Constants
// ============================================================================

/// Exposure bias that lands middle gray on the display scale.
///
/// `2^2.47393` is close to `1/0.18`, so exposure 0.0 maps a scene value
/// of 0.18 to roughly 1.0 before gamma encoding.
pub const EXPOSURE_MIDDLE_GRAY_BIAS: f32 = 2.47393;

/// Framebuffer value that gamma-encoded middle gray lands on.
pub const DISPLAY_MIDDLE_GRAY_SCALE: f32 = 84.66;

/// Fixed display gamma exponent.
pub const DISPLAY_GAMMA: f32 = 1.0 / 2.2;

// ============================================================================
// Per-Channel Transform
// ============================================================================

/// Linear scale factor for an exposure setting, `2^(exposure + bias)`.
#[inline]
pub fn exposure_factor(exposure: f32) -> f32 {
    (exposure + EXPOSURE_MIDDLE_GRAY_BIAS).exp2()
}

/// Map one linear channel value to a display byte.
///
/// Applies the exposure factor, the display gamma, and the middle gray
/// scale, then rounds half-up and clamps to 0..=255. Negative inputs
/// turn into NaN under `powf` and clamp to 0 with the saturating cast.
#[inline]
pub fn convert_to_display(value: f32, exposure_factor: f32, gamma: f32) -> u8 {
    let mut value = value * exposure_factor;
    value = value.powf(gamma);
    value *= DISPLAY_MIDDLE_GRAY_SCALE;
    ((value + 0.5) as i32).clamp(0, 255) as u8
}

// ============================================================================
// Buffer Walk
// ============================================================================

/// Render a packed float RGBA buffer to an 8-bit display image.
///
/// `data` holds `width * height` pixels of channel type `T` in engine
/// memory order. Color channels go through [`convert_to_display`] with
/// the factor for `exposure`; alpha is quantized with [`to_byte`],
/// untouched by exposure and gamma. Trailing bytes past the addressed
/// pixels are ignored.
///
/// # Errors
///
/// [`Error::DimensionsTooLarge`] when the byte size of the image
/// overflows, [`Error::BufferTooSmall`] when `data` is shorter than the
/// dimensions require.
pub fn to_display_image<T: ChannelValue>(
    data: &[u8],
    width: u32,
    height: u32,
    exposure: f32,
    format: DisplayFormat,
) -> Result<DisplayImage> {
    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::dimensions_too_large(width as usize, height as usize))?;
    let needed = count
        .checked_mul(layout::pixel_size::<T>())
        .ok_or_else(|| Error::dimensions_too_large(width as usize, height as usize))?;
    if data.len() < needed {
        return Err(Error::buffer_too_small("src", needed, data.len()));
    }

    debug!(width, height, exposure, format = %format, "rendering display image");

    let factor = exposure_factor(exposure);
    let mut pixels = vec![0u8; count * DISPLAY_PIXEL_SIZE];

    for (out, px) in pixels
        .chunks_exact_mut(DISPLAY_PIXEL_SIZE)
        .zip(data[..needed].chunks_exact(layout::pixel_size::<T>()))
    {
        let channel = |index: usize| T::read(&px[layout::channel_offset::<T>(index)..]).to_f32();
        let r = convert_to_display(channel(layout::RED), factor, DISPLAY_GAMMA);
        let g = convert_to_display(channel(layout::GREEN), factor, DISPLAY_GAMMA);
        let b = convert_to_display(channel(layout::BLUE), factor, DISPLAY_GAMMA);
        let a = to_byte(channel(layout::ALPHA));
        match format {
            DisplayFormat::Bgra8 => out.copy_from_slice(&[b, g, r, a]),
            DisplayFormat::Rgba8 => out.copy_from_slice(&[r, g, b, a]),
        }
    }

    Ok(DisplayImage {
        pixels,
        width,
        height,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use half::f16;

    fn pixel_f32(r: f32, g: f32, b: f32, a: f32) -> [u8; 16] {
        let mut px = [0u8; 16];
        px[0..4].copy_from_slice(&b.to_ne_bytes());
        px[4..8].copy_from_slice(&g.to_ne_bytes());
        px[8..12].copy_from_slice(&r.to_ne_bytes());
        px[12..16].copy_from_slice(&a.to_ne_bytes());
        px
    }

    #[test]
    fn test_bias_inverts_middle_gray() {
        // 2^2.47393 against 1/0.18
        assert_relative_eq!(exposure_factor(0.0), 1.0 / 0.18, max_relative = 1e-4);
    }

    #[test]
    fn test_middle_gray_hits_display_scale() {
        assert_eq!(convert_to_display(0.18, exposure_factor(0.0), DISPLAY_GAMMA), 85);
    }

    #[test]
    fn test_low_values_clamp_to_zero() {
        let factor = exposure_factor(0.0);
        assert_eq!(convert_to_display(0.0, factor, DISPLAY_GAMMA), 0);
        assert_eq!(convert_to_display(-0.25, factor, DISPLAY_GAMMA), 0);
        assert_eq!(convert_to_display(f32::NAN, factor, DISPLAY_GAMMA), 0);
    }

    #[test]
    fn test_bright_values_saturate() {
        assert_eq!(convert_to_display(100.0, exposure_factor(0.0), DISPLAY_GAMMA), 255);
    }

    #[test]
    fn test_exposure_is_monotonic() {
        let mut prev = 0;
        for stop in -8..=8 {
            let byte = convert_to_display(0.18, exposure_factor(stop as f32), DISPLAY_GAMMA);
            assert!(byte >= prev, "stop {stop} went backwards: {byte} < {prev}");
            prev = byte;
        }
    }

    #[test]
    fn test_byte_orders_swap_red_and_blue() {
        let px = pixel_f32(1.0, 0.0, 0.0, 1.0);
        let bgra = to_display_image::<f32>(&px, 1, 1, 0.0, DisplayFormat::Bgra8).unwrap();
        let rgba = to_display_image::<f32>(&px, 1, 1, 0.0, DisplayFormat::Rgba8).unwrap();
        let red = bgra.pixels[2];
        assert!(red > 0);
        assert_eq!(rgba.pixels[0], red);
        assert_eq!(bgra.pixels[0], rgba.pixels[2]);
        assert_eq!(bgra.pixels[1], rgba.pixels[1]);
        assert_eq!(bgra.pixels[3], 255);
        assert_eq!(rgba.pixels[3], 255);
    }

    #[test]
    fn test_alpha_ignores_exposure() {
        let px = pixel_f32(0.5, 0.5, 0.5, 0.5);
        let img = to_display_image::<f32>(&px, 1, 1, -10.0, DisplayFormat::Bgra8).unwrap();
        assert_eq!(img.pixels[3], 128);
        assert!(img.pixels[0] < 10, "colors should be crushed: {}", img.pixels[0]);
    }

    #[test]
    fn test_rows_pack_top_to_bottom() {
        let mut data = Vec::new();
        data.extend_from_slice(&pixel_f32(1.0, 0.0, 0.0, 1.0));
        data.extend_from_slice(&pixel_f32(0.0, 1.0, 0.0, 1.0));
        data.extend_from_slice(&pixel_f32(0.0, 0.0, 1.0, 1.0));
        data.extend_from_slice(&pixel_f32(0.0, 0.0, 0.0, 0.0));

        let img = to_display_image::<f32>(&data, 2, 2, 0.0, DisplayFormat::Bgra8).unwrap();
        let top = img.row(0);
        let bottom = img.row(1);
        // red pixel: only byte 2 lit; green pixel: only byte 1
        assert_eq!(top[0], 0);
        assert!(top[2] > 0);
        assert!(top[5] > 0);
        assert_eq!(top[6], 0);
        // blue pixel leads the bottom row, transparent black ends it
        assert!(bottom[0] > 0);
        assert_eq!(&bottom[4..8], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_half_pixels_render() {
        let mut px = [0u8; 8];
        for i in 0..3 {
            px[i * 2..][..2].copy_from_slice(&f16::from_f32(0.18).to_ne_bytes());
        }
        px[6..8].copy_from_slice(&f16::from_f32(1.0).to_ne_bytes());
        let img = to_display_image::<f16>(&px, 1, 1, 0.0, DisplayFormat::Bgra8).unwrap();
        assert_eq!(img.pixels[3], 255);
        for c in &img.pixels[..3] {
            assert!((84..=86).contains(c), "gray byte {c}");
        }
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let px = pixel_f32(0.0, 0.0, 0.0, 0.0);
        let err = to_display_image::<f32>(&px, 2, 1, 0.0, DisplayFormat::Bgra8).unwrap_err();
        assert!(err.is_size_error());
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        let err =
            to_display_image::<f32>(&[], u32::MAX, u32::MAX, 0.0, DisplayFormat::Rgba8).unwrap_err();
        assert!(err.is_dimension_error());
    }
}
