//! The colorspace service trait.
//!
//! A colorspace is a stateless interpreter for one pixel encoding: it
//! owns no image data and every operation takes caller-provided byte
//! buffers. The painter, selection tools, filters and the canvas widget
//! all talk to layers through `&dyn ColorSpace`, so the trait surface
//! is byte-oriented and object safe; the native-typed accessors live on
//! the concrete types instead.
//!
//! # Design
//!
//! Buffer geometry is a documented precondition on the hot paths (they
//! panic on short slices, like any out-of-bounds indexing). Only the
//! display conversion validates and returns errors, since its inputs
//! arrive straight from document metadata.
//!
//! # Example
//!
//! ```
//! use easel_color::{ColorSpace, RgbaF32};
//! use easel_core::Rgb8;
//!
//! let cs = RgbaF32::new();
//! let mut pixel = vec![0u8; cs.pixel_size()];
//! cs.from_rgb8_with_alpha(Rgb8::new(255, 0, 0), 255, &mut pixel);
//! assert_eq!(cs.to_rgb8(&pixel), Rgb8::new(255, 0, 0));
//! assert_eq!(cs.intensity8(&pixel), 77);
//! ```

use easel_composite::CompositeOp;
use easel_core::error::Result;
use easel_core::info::{ChannelFlags, ChannelInfo};
use easel_core::Rgb8;
use easel_display::{DisplayFormat, DisplayImage};

/// Pixel-encoding service object.
///
/// Implementations are cheap to construct, carry only immutable
/// metadata, and are safe to share across threads; all methods take
/// `&self`.
pub trait ColorSpace: Send + Sync {
    // ------------------------------------------------------------------
    // Identity and channel metadata
    // ------------------------------------------------------------------

    /// Stable encoding identifier, e.g. `"RGBAF32"`.
    ///
    /// Persisted in documents; never changes for an encoding.
    fn id(&self) -> &'static str;

    /// Human-readable encoding name for UI listings.
    fn name(&self) -> &'static str;

    /// Channel descriptors in logical order (red, green, blue, alpha).
    ///
    /// Each descriptor carries the channel's byte offset into the
    /// encoding's memory layout.
    fn channels(&self) -> &[ChannelInfo];

    /// Pixel stride in bytes.
    fn pixel_size(&self) -> usize;

    /// Byte offset of the alpha channel, or `None` without one.
    fn alpha_offset(&self) -> Option<usize>;

    /// Number of channels per pixel.
    fn channel_count(&self) -> usize {
        self.channels().len()
    }

    /// Number of color channels per pixel.
    fn color_channel_count(&self) -> usize {
        self.channels().iter().filter(|c| c.kind.is_color()).count()
    }

    /// Whether the encoding carries alpha.
    fn has_alpha(&self) -> bool {
        self.alpha_offset().is_some()
    }

    // ------------------------------------------------------------------
    // 8-bit device color bridge
    // ------------------------------------------------------------------

    /// Write a device color's components into one pixel, alpha untouched.
    fn from_rgb8(&self, color: Rgb8, dst: &mut [u8]);

    /// Write a device color and an 8-bit opacity into one pixel.
    fn from_rgb8_with_alpha(&self, color: Rgb8, opacity: u8, dst: &mut [u8]);

    /// Read one pixel as a device color, clamping out-of-range channels.
    fn to_rgb8(&self, src: &[u8]) -> Rgb8;

    /// Read one pixel as a device color plus its 8-bit opacity.
    fn to_rgb8_with_alpha(&self, src: &[u8]) -> (Rgb8, u8);

    // ------------------------------------------------------------------
    // Alpha operations
    // ------------------------------------------------------------------

    /// One pixel's alpha as an 8-bit value; opaque without an alpha channel.
    fn alpha8(&self, pixel: &[u8]) -> u8;

    /// Set the alpha of every whole pixel in `pixels`.
    fn set_alpha(&self, pixels: &mut [u8], alpha: u8);

    /// Scale the alpha of every whole pixel in `pixels` by `alpha / 255`.
    fn multiply_alpha(&self, pixels: &mut [u8], alpha: u8);

    /// Scale each pixel's alpha by its mask byte. One mask byte per pixel.
    fn apply_alpha_mask(&self, pixels: &mut [u8], mask: &[u8]);

    /// Scale each pixel's alpha by its mask byte's complement.
    fn apply_inverse_alpha_mask(&self, pixels: &mut [u8], mask: &[u8]);

    // ------------------------------------------------------------------
    // Pixel utilities
    // ------------------------------------------------------------------

    /// Perceptual distance between two pixels as the largest absolute
    /// color channel difference, in 8-bit scale. Alpha is ignored.
    fn difference(&self, a: &[u8], b: &[u8]) -> u8;

    /// Weighted average of source pixels into `dst`.
    ///
    /// Contributions are premultiplied (`color * alpha * weight / 255`),
    /// the accumulated weighted alpha becomes the destination alpha, and
    /// colors are un-premultiplied by it afterwards. Weight ratios
    /// matter, not magnitudes; they need not sum to 255.
    fn mix_colors(&self, colors: &[&[u8]], weights: &[u8], dst: &mut [u8]);

    /// Convolve source pixels into `dst` with integer kernel weights.
    ///
    /// Accumulates `channel * weight` without alpha premultiplication,
    /// then writes `clamp(total / factor + offset, 0, 1)` into the
    /// channel groups selected by `flags`; unselected destination
    /// channels keep their previous values.
    fn convolve_colors(
        &self,
        colors: &[&[u8]],
        kernel: &[i32],
        flags: ChannelFlags,
        dst: &mut [u8],
        factor: i32,
        offset: i32,
    );

    /// Photometrically invert the color channels of every whole pixel,
    /// leaving alpha as it is.
    fn invert_color(&self, pixels: &mut [u8]);

    /// One pixel's luma as an 8-bit value, `0.30 R + 0.59 G + 0.11 B`.
    fn intensity8(&self, pixel: &[u8]) -> u8;

    // ------------------------------------------------------------------
    // Compositing
    // ------------------------------------------------------------------

    /// The blend modes offered in layer and brush menus, in menu order.
    fn user_visible_composite_ops(&self) -> &'static [CompositeOp] {
        easel_composite::user_visible_composite_ops()
    }

    /// Composite a source rectangle over a destination rectangle.
    ///
    /// Strides are in bytes and may exceed the row width for padded
    /// buffers. `mask` is an optional per-pixel 8-bit coverage buffer
    /// with its own stride; `opacity` attenuates the whole operation.
    /// Reserved modes leave the destination untouched.
    #[allow(clippy::too_many_arguments)]
    fn bit_blt(
        &self,
        dst: &mut [u8],
        dst_row_stride: usize,
        src: &[u8],
        src_row_stride: usize,
        mask: Option<&[u8]>,
        mask_row_stride: usize,
        rows: usize,
        cols: usize,
        opacity: u8,
        op: CompositeOp,
    );

    // ------------------------------------------------------------------
    // Display
    // ------------------------------------------------------------------

    /// Render `width * height` packed pixels to an 8-bit display image
    /// with the given exposure, in the requested byte order.
    fn to_display_image(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        exposure: f32,
        format: DisplayFormat,
    ) -> Result<DisplayImage>;
}
