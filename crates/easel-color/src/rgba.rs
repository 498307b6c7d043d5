//! The generic float RGBA colorspace.
//!
//! One implementation covers both channel depths: everything is
//! parameterized over [`ChannelValue`], so the half and single float
//! variants are the same code at different widths. [`RgbaF16`] and
//! [`RgbaF32`] are the two instantiations, with [`RGBA_F16`] and
//! [`RGBA_F32`] as shared instances.
//!
//! # Design
//!
//! Arithmetic widens every channel to f32, operates there, and narrows
//! on store. Channel metadata is built at construction from the layout
//! constants, so descriptors and accessors can never disagree about
//! offsets.

use half::f16;

use easel_composite::CompositeOp;
use easel_core::channel::{ChannelValue, OPACITY_OPAQUE, to_byte, to_normalized};
use easel_core::error::Result;
use easel_core::info::{ChannelFlags, ChannelFormat, ChannelInfo, ChannelKind};
use easel_core::{Rgb8, layout};
use easel_display::{DisplayFormat, DisplayImage};

use crate::alpha::AlphaOps;
use crate::space::ColorSpace;

// ============================================================================
// Channel Access
// ============================================================================

#[inline]
fn channel_f32<T: ChannelValue>(px: &[u8], index: usize) -> f32 {
    T::read(&px[layout::channel_offset::<T>(index)..]).to_f32()
}

#[inline]
fn set_channel_f32<T: ChannelValue>(px: &mut [u8], index: usize, value: f32) {
    T::from_f32(value).write(&mut px[layout::channel_offset::<T>(index)..]);
}

// ============================================================================
// Colorspace
// ============================================================================

/// RGBA colorspace over channel type `T`.
///
/// Pixels are four `T` channels in memory order blue, green, red,
/// alpha. The type is stateless apart from its immutable metadata; one
/// instance can serve any number of images concurrently.
#[derive(Debug, Clone)]
pub struct RgbaColorSpace<T: ChannelValue> {
    id: &'static str,
    name: &'static str,
    channels: [ChannelInfo; layout::CHANNELS],
    alpha: AlphaOps<T>,
}

/// RGBA with half precision channels, 8 bytes per pixel.
pub type RgbaF16 = RgbaColorSpace<f16>;

/// RGBA with single precision channels, 16 bytes per pixel.
pub type RgbaF32 = RgbaColorSpace<f32>;

/// Shared half precision colorspace instance.
pub static RGBA_F16: RgbaF16 = RgbaF16::new();

/// Shared single precision colorspace instance.
pub static RGBA_F32: RgbaF32 = RgbaF32::new();

impl<T: ChannelValue> RgbaColorSpace<T> {
    /// Build the colorspace for channel type `T`.
    pub const fn new() -> Self {
        let (id, name) = match T::FORMAT {
            ChannelFormat::Float16 => ("RGBAF16", "RGB (16-bit float/channel)"),
            ChannelFormat::Float32 => ("RGBAF32", "RGB (32-bit float/channel)"),
        };
        let channels = [
            ChannelInfo::new(
                "Red",
                layout::channel_offset::<T>(layout::RED),
                ChannelKind::Color,
                T::FORMAT,
            ),
            ChannelInfo::new(
                "Green",
                layout::channel_offset::<T>(layout::GREEN),
                ChannelKind::Color,
                T::FORMAT,
            ),
            ChannelInfo::new(
                "Blue",
                layout::channel_offset::<T>(layout::BLUE),
                ChannelKind::Color,
                T::FORMAT,
            ),
            ChannelInfo::new(
                "Alpha",
                layout::alpha_offset::<T>(),
                ChannelKind::Alpha,
                T::FORMAT,
            ),
        ];
        Self {
            id,
            name,
            channels,
            alpha: AlphaOps::new(Some(layout::alpha_offset::<T>()), layout::pixel_size::<T>()),
        }
    }

    /// Write native channel values into one pixel.
    pub fn set_pixel(&self, dst: &mut [u8], red: T, green: T, blue: T, alpha: T) {
        red.write(&mut dst[layout::channel_offset::<T>(layout::RED)..]);
        green.write(&mut dst[layout::channel_offset::<T>(layout::GREEN)..]);
        blue.write(&mut dst[layout::channel_offset::<T>(layout::BLUE)..]);
        alpha.write(&mut dst[layout::alpha_offset::<T>()..]);
    }

    /// Read one pixel's native channel values as `(red, green, blue, alpha)`.
    pub fn pixel(&self, src: &[u8]) -> (T, T, T, T) {
        (
            T::read(&src[layout::channel_offset::<T>(layout::RED)..]),
            T::read(&src[layout::channel_offset::<T>(layout::GREEN)..]),
            T::read(&src[layout::channel_offset::<T>(layout::BLUE)..]),
            T::read(&src[layout::alpha_offset::<T>()..]),
        )
    }
}

impl<T: ChannelValue> Default for RgbaColorSpace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ChannelValue> ColorSpace for RgbaColorSpace<T> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn channels(&self) -> &[ChannelInfo] {
        &self.channels
    }

    fn pixel_size(&self) -> usize {
        layout::pixel_size::<T>()
    }

    fn alpha_offset(&self) -> Option<usize> {
        Some(layout::alpha_offset::<T>())
    }

    fn from_rgb8(&self, color: Rgb8, dst: &mut [u8]) {
        set_channel_f32::<T>(dst, layout::RED, to_normalized(color.r));
        set_channel_f32::<T>(dst, layout::GREEN, to_normalized(color.g));
        set_channel_f32::<T>(dst, layout::BLUE, to_normalized(color.b));
    }

    fn from_rgb8_with_alpha(&self, color: Rgb8, opacity: u8, dst: &mut [u8]) {
        self.from_rgb8(color, dst);
        set_channel_f32::<T>(dst, layout::ALPHA, to_normalized(opacity));
    }

    fn to_rgb8(&self, src: &[u8]) -> Rgb8 {
        Rgb8::new(
            to_byte(channel_f32::<T>(src, layout::RED)),
            to_byte(channel_f32::<T>(src, layout::GREEN)),
            to_byte(channel_f32::<T>(src, layout::BLUE)),
        )
    }

    fn to_rgb8_with_alpha(&self, src: &[u8]) -> (Rgb8, u8) {
        (
            self.to_rgb8(src),
            to_byte(channel_f32::<T>(src, layout::ALPHA)),
        )
    }

    fn alpha8(&self, pixel: &[u8]) -> u8 {
        self.alpha.alpha8(pixel)
    }

    fn set_alpha(&self, pixels: &mut [u8], alpha: u8) {
        self.alpha.set_alpha(pixels, alpha);
    }

    fn multiply_alpha(&self, pixels: &mut [u8], alpha: u8) {
        self.alpha.multiply_alpha(pixels, alpha);
    }

    fn apply_alpha_mask(&self, pixels: &mut [u8], mask: &[u8]) {
        self.alpha.apply_alpha_mask(pixels, mask);
    }

    fn apply_inverse_alpha_mask(&self, pixels: &mut [u8], mask: &[u8]) {
        self.alpha.apply_inverse_alpha_mask(pixels, mask);
    }

    fn difference(&self, a: &[u8], b: &[u8]) -> u8 {
        let dr = (channel_f32::<T>(a, layout::RED) - channel_f32::<T>(b, layout::RED)).abs();
        let dg = (channel_f32::<T>(a, layout::GREEN) - channel_f32::<T>(b, layout::GREEN)).abs();
        let db = (channel_f32::<T>(a, layout::BLUE) - channel_f32::<T>(b, layout::BLUE)).abs();
        to_byte(dr.max(dg).max(db))
    }

    fn mix_colors(&self, colors: &[&[u8]], weights: &[u8], dst: &mut [u8]) {
        debug_assert_eq!(colors.len(), weights.len());

        let mut total_red = 0.0f32;
        let mut total_green = 0.0f32;
        let mut total_blue = 0.0f32;
        let mut new_alpha = 0.0f32;

        for (px, &weight) in colors.iter().zip(weights) {
            let alpha_times_weight = channel_f32::<T>(px, layout::ALPHA) * to_normalized(weight);
            total_red += channel_f32::<T>(px, layout::RED) * alpha_times_weight;
            total_green += channel_f32::<T>(px, layout::GREEN) * alpha_times_weight;
            total_blue += channel_f32::<T>(px, layout::BLUE) * alpha_times_weight;
            new_alpha += alpha_times_weight;
        }

        debug_assert!(
            new_alpha <= OPACITY_OPAQUE + T::EPSILON,
            "mixed alpha {new_alpha} above opaque"
        );
        let new_alpha = new_alpha.min(OPACITY_OPAQUE);
        set_channel_f32::<T>(dst, layout::ALPHA, new_alpha);

        if new_alpha > T::EPSILON {
            total_red /= new_alpha;
            total_green /= new_alpha;
            total_blue /= new_alpha;
        }
        set_channel_f32::<T>(dst, layout::RED, total_red);
        set_channel_f32::<T>(dst, layout::GREEN, total_green);
        set_channel_f32::<T>(dst, layout::BLUE, total_blue);
    }

    fn convolve_colors(
        &self,
        colors: &[&[u8]],
        kernel: &[i32],
        flags: ChannelFlags,
        dst: &mut [u8],
        factor: i32,
        offset: i32,
    ) {
        debug_assert_eq!(colors.len(), kernel.len());

        let mut total = [0.0f32; layout::CHANNELS];
        for (px, &weight) in colors.iter().zip(kernel) {
            if weight == 0 {
                continue;
            }
            let weight = weight as f32;
            for (index, slot) in total.iter_mut().enumerate() {
                *slot += channel_f32::<T>(px, index) * weight;
            }
        }

        let factor = factor as f32;
        let offset = offset as f32;
        if flags.contains(ChannelFlags::COLOR) {
            for index in 0..layout::COLOR_CHANNELS {
                set_channel_f32::<T>(dst, index, (total[index] / factor + offset).clamp(0.0, 1.0));
            }
        }
        if flags.contains(ChannelFlags::ALPHA) {
            set_channel_f32::<T>(
                dst,
                layout::ALPHA,
                (total[layout::ALPHA] / factor + offset).clamp(0.0, 1.0),
            );
        }
    }

    fn invert_color(&self, pixels: &mut [u8]) {
        for px in pixels.chunks_exact_mut(layout::pixel_size::<T>()) {
            for index in 0..layout::COLOR_CHANNELS {
                let value = channel_f32::<T>(px, index);
                set_channel_f32::<T>(px, index, 1.0 - value);
            }
        }
    }

    fn intensity8(&self, pixel: &[u8]) -> u8 {
        to_byte(
            channel_f32::<T>(pixel, layout::RED) * 0.30
                + channel_f32::<T>(pixel, layout::GREEN) * 0.59
                + channel_f32::<T>(pixel, layout::BLUE) * 0.11,
        )
    }

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
    ) {
        easel_composite::bit_blt::<T>(
            dst,
            dst_row_stride,
            src,
            src_row_stride,
            mask,
            mask_row_stride,
            rows,
            cols,
            opacity,
            op,
        );
    }

    fn to_display_image(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        exposure: f32,
        format: DisplayFormat,
    ) -> Result<DisplayImage> {
        easel_display::to_display_image::<T>(data, width, height, exposure, format)
    }
}
