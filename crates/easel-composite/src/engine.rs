//! Buffer-over-buffer compositing routines.
//!
//! Every routine walks `rows x cols` pixels of a destination and source
//! buffer with independent byte row strides, an optional one-byte-per-
//! pixel selection mask with its own stride, and a normalized opacity.
//! Arithmetic widens to f32; "effectively opaque" and "effectively
//! transparent" tests use the channel type's own epsilon, so half
//! buffers compare at half precision.
//!
//! # Design
//!
//! [`composite_over`] is special-cased for its bulk-copy fast paths.
//! Every other color mode shares one prologue and epilog through
//! [`composite_with`], which takes the mode as a closure from source
//! and destination RGB triplets (logical red, green, blue order) to the
//! blended triplet. Channelwise modes layer on a private adapter.
//!
//! The mask byte 255 means "fully selected" and skips the mask multiply
//! entirely; any other value scales source alpha. A missing mask selects
//! everything.
//!
//! # Preconditions
//!
//! Geometry is the caller's contract: each buffer must cover its
//! `rows`/`cols` extent at its stride. Violations panic in the slice
//! machinery; nothing is read or written out of bounds. The validating
//! parallel front end in [`crate::parallel`] returns typed errors
//! instead.
//!
//! # Used By
//!
//! - `easel-color` - colorspace bit_blt
//! - `easel-composite::parallel` - per-band dispatch

use crate::op::CompositeOp;
use easel_core::channel::{ChannelValue, OPACITY_OPAQUE_U8, lerp, to_normalized};
use easel_core::hsx::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
use easel_core::layout;
use tracing::trace;

// ============================================================================
// Channel Access
// ============================================================================

#[inline]
fn channel_f32<T: ChannelValue>(px: &[u8], index: usize) -> f32 {
    T::read(&px[index * T::BYTES..]).to_f32()
}

#[inline]
fn set_channel_f32<T: ChannelValue>(px: &mut [u8], index: usize, value: f32) {
    T::from_f32(value).write(&mut px[index * T::BYTES..]);
}

/// Apply the mask rule: 255 is the fully-selected sentinel and skips
/// the multiply, anything else scales source alpha.
#[inline]
fn masked_alpha(src_alpha: f32, mask: Option<u8>) -> f32 {
    match mask {
        Some(m) if m != OPACITY_OPAQUE_U8 => src_alpha * to_normalized(m),
        _ => src_alpha,
    }
}

/// Walk dst and src rows in lockstep, calling `f` per pixel with the
/// pixel's mask byte when a mask is present.
#[inline]
fn for_each_pixel<T, F>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    mut f: F,
) where
    T: ChannelValue,
    F: FnMut(&mut [u8], &[u8], Option<u8>),
{
    let pixel = layout::pixel_size::<T>();
    let row_bytes = cols * pixel;

    for r in 0..rows {
        let dst_row = &mut dst[r * dst_row_stride..][..row_bytes];
        let src_row = &src[r * src_row_stride..][..row_bytes];

        if let Some(mask) = mask {
            let mask_row = &mask[r * mask_row_stride..][..cols];
            for ((d, s), &m) in dst_row
                .chunks_exact_mut(pixel)
                .zip(src_row.chunks_exact(pixel))
                .zip(mask_row)
            {
                f(d, s, Some(m));
            }
        } else {
            for (d, s) in dst_row
                .chunks_exact_mut(pixel)
                .zip(src_row.chunks_exact(pixel))
            {
                f(d, s, None);
            }
        }
    }
}

// ============================================================================
// Over
// ============================================================================

/// Source-over composition.
///
/// The only mode without the min-alpha clamp, and the only one with
/// bulk-copy fast paths: an effectively opaque source pixel is copied
/// byte-for-byte, and an effectively full blend factor copies the three
/// color channels byte-for-byte.
#[allow(clippy::too_many_arguments)]
pub fn composite_over<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    let color_bytes = layout::COLOR_CHANNELS * T::BYTES;

    for_each_pixel::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        |d, s, m| {
            let mut src_alpha = masked_alpha(channel_f32::<T>(s, layout::ALPHA), m);

            if src_alpha <= T::EPSILON {
                return;
            }
            if opacity < 1.0 - T::EPSILON {
                src_alpha *= opacity;
            }

            if src_alpha > 1.0 - T::EPSILON {
                d.copy_from_slice(s);
                return;
            }

            let dst_alpha = channel_f32::<T>(d, layout::ALPHA);
            let src_blend = if dst_alpha > 1.0 - T::EPSILON {
                src_alpha
            } else {
                let new_alpha = dst_alpha + (1.0 - dst_alpha) * src_alpha;
                set_channel_f32::<T>(d, layout::ALPHA, new_alpha);
                if new_alpha > T::EPSILON {
                    src_alpha / new_alpha
                } else {
                    src_alpha
                }
            };

            if src_blend > 1.0 - T::EPSILON {
                d[..color_bytes].copy_from_slice(&s[..color_bytes]);
            } else {
                for i in 0..layout::COLOR_CHANNELS {
                    let sc = channel_f32::<T>(s, i);
                    let dc = channel_f32::<T>(d, i);
                    set_channel_f32::<T>(d, i, lerp(sc, dc, src_blend));
                }
            }
        },
    );
}

// ============================================================================
// Generic Color-Mode Engine
// ============================================================================

/// Shared engine for every color mode except OVER.
///
/// `blend` maps the source and destination RGB triplets (logical red,
/// green, blue order) to the mode's color. The engine clamps source
/// alpha to destination alpha first, applies the mask and opacity,
/// unions alphas into the destination, and interpolates all three
/// color channels from the destination toward the mode color by the
/// resulting blend factor.
#[allow(clippy::too_many_arguments)]
pub fn composite_with<T, F>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
    blend: F,
) where
    T: ChannelValue,
    F: Fn([f32; 3], [f32; 3]) -> [f32; 3],
{
    for_each_pixel::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        |d, s, m| {
            let dst_alpha = channel_f32::<T>(d, layout::ALPHA);

            // Color modes never raise coverage above what both layers have.
            let mut src_alpha = channel_f32::<T>(s, layout::ALPHA).min(dst_alpha);
            src_alpha = masked_alpha(src_alpha, m);

            if src_alpha <= T::EPSILON {
                return;
            }
            if opacity < 1.0 - T::EPSILON {
                src_alpha *= opacity;
            }

            let src_blend = if dst_alpha > 1.0 - T::EPSILON {
                src_alpha
            } else {
                let new_alpha = dst_alpha + (1.0 - dst_alpha) * src_alpha;
                set_channel_f32::<T>(d, layout::ALPHA, new_alpha);
                if new_alpha > T::EPSILON {
                    src_alpha / new_alpha
                } else {
                    src_alpha
                }
            };

            let s_rgb = [
                channel_f32::<T>(s, layout::RED),
                channel_f32::<T>(s, layout::GREEN),
                channel_f32::<T>(s, layout::BLUE),
            ];
            let d_rgb = [
                channel_f32::<T>(d, layout::RED),
                channel_f32::<T>(d, layout::GREEN),
                channel_f32::<T>(d, layout::BLUE),
            ];
            let m_rgb = blend(s_rgb, d_rgb);

            set_channel_f32::<T>(d, layout::RED, lerp(m_rgb[0], d_rgb[0], src_blend));
            set_channel_f32::<T>(d, layout::GREEN, lerp(m_rgb[1], d_rgb[1], src_blend));
            set_channel_f32::<T>(d, layout::BLUE, lerp(m_rgb[2], d_rgb[2], src_blend));
        },
    );
}

/// Channelwise adapter over [`composite_with`].
#[allow(clippy::too_many_arguments)]
fn composite_channels<T, F>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
    f: F,
) where
    T: ChannelValue,
    F: Fn(f32, f32) -> f32,
{
    composite_with::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| [f(s[0], d[0]), f(s[1], d[1]), f(s[2], d[2])],
    );
}

// ============================================================================
// Channelwise Modes
// ============================================================================

/// MULTIPLY: `s * d`.
#[allow(clippy::too_many_arguments)]
pub fn composite_multiply<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_channels::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| s * d,
    );
}

/// DIVIDE: `min(d / (s + e), 1)`.
#[allow(clippy::too_many_arguments)]
pub fn composite_divide<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_channels::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| (d / (s + T::EPSILON)).min(1.0),
    );
}

/// SCREEN: `1 - (1 - d)(1 - s)`.
#[allow(clippy::too_many_arguments)]
pub fn composite_screen<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_channels::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| 1.0 - (1.0 - d) * (1.0 - s),
    );
}

/// OVERLAY: `d * (d + 2s(1 - d))`.
#[allow(clippy::too_many_arguments)]
pub fn composite_overlay<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_channels::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| d * (d + 2.0 * s * (1.0 - d)),
    );
}

/// DODGE: `min(d / (1 + e - s), 1)`.
#[allow(clippy::too_many_arguments)]
pub fn composite_dodge<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_channels::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| (d / (1.0 + T::EPSILON - s)).min(1.0),
    );
}

/// BURN: `clamp(1 - min((1 - d) / (s + e), 1), 0, 1)`.
#[allow(clippy::too_many_arguments)]
pub fn composite_burn<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_channels::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| (1.0 - ((1.0 - d) / (s + T::EPSILON)).min(1.0)).clamp(0.0, 1.0),
    );
}

/// DARKEN: `min(s, d)`.
#[allow(clippy::too_many_arguments)]
pub fn composite_darken<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_channels::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| s.min(d),
    );
}

/// LIGHTEN: `max(s, d)`.
#[allow(clippy::too_many_arguments)]
pub fn composite_lighten<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_channels::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| s.max(d),
    );
}

// ============================================================================
// Hue-Based Modes
// ============================================================================

/// HUE: source hue with destination saturation and value.
#[allow(clippy::too_many_arguments)]
pub fn composite_hue<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_with::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| {
            let (src_hue, _, _) = rgb_to_hsv(s[0], s[1], s[2]);
            let (_, dst_sat, dst_val) = rgb_to_hsv(d[0], d[1], d[2]);
            let (r, g, b) = hsv_to_rgb(src_hue, dst_sat, dst_val);
            [r, g, b]
        },
    );
}

/// SATURATION: source saturation with destination hue and value.
#[allow(clippy::too_many_arguments)]
pub fn composite_saturation<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_with::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| {
            let (_, src_sat, _) = rgb_to_hsv(s[0], s[1], s[2]);
            let (dst_hue, _, dst_val) = rgb_to_hsv(d[0], d[1], d[2]);
            let (r, g, b) = hsv_to_rgb(dst_hue, src_sat, dst_val);
            [r, g, b]
        },
    );
}

/// VALUE: source value with destination hue and saturation.
#[allow(clippy::too_many_arguments)]
pub fn composite_value<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_with::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| {
            let (_, _, src_val) = rgb_to_hsv(s[0], s[1], s[2]);
            let (dst_hue, dst_sat, _) = rgb_to_hsv(d[0], d[1], d[2]);
            let (r, g, b) = hsv_to_rgb(dst_hue, dst_sat, src_val);
            [r, g, b]
        },
    );
}

/// COLOR: source hue and saturation with destination lightness.
#[allow(clippy::too_many_arguments)]
pub fn composite_color<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    composite_with::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
        |s, d| {
            let (src_hue, src_sat, _) = rgb_to_hsl(s[0], s[1], s[2]);
            let (_, _, dst_light) = rgb_to_hsl(d[0], d[1], d[2]);
            let (r, g, b) = hsl_to_rgb(src_hue, src_sat, dst_light);
            [r, g, b]
        },
    );
}

// ============================================================================
// Alpha-Only and Overwrite Modes
// ============================================================================

/// ERASE: multiply destination alpha down by source alpha.
///
/// Color channels never change and opacity does not participate. With a
/// mask, source alpha is first pulled toward opaque by the unselected
/// fraction, so unselected pixels erase less.
#[allow(clippy::too_many_arguments)]
pub fn composite_erase<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    mask: Option<&[u8]>,
    mask_row_stride: usize,
    rows: usize,
    cols: usize,
    _opacity: f32,
) {
    for_each_pixel::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        |d, s, m| {
            let mut src_alpha = channel_f32::<T>(s, layout::ALPHA);
            if let Some(m) = m {
                if m != OPACITY_OPAQUE_U8 {
                    src_alpha = lerp(src_alpha, 1.0, to_normalized(m));
                }
            }

            let dst_alpha = channel_f32::<T>(d, layout::ALPHA);
            set_channel_f32::<T>(d, layout::ALPHA, dst_alpha * src_alpha);
        },
    );
}

/// COPY: unconditional overwrite of the destination, alpha scaled by
/// opacity. The mask does not participate.
pub fn composite_copy<T: ChannelValue>(
    dst: &mut [u8],
    dst_row_stride: usize,
    src: &[u8],
    src_row_stride: usize,
    rows: usize,
    cols: usize,
    opacity: f32,
) {
    let pixel = layout::pixel_size::<T>();
    let row_bytes = cols * pixel;

    if opacity > 1.0 - T::EPSILON {
        for r in 0..rows {
            let dst_row = &mut dst[r * dst_row_stride..][..row_bytes];
            let src_row = &src[r * src_row_stride..][..row_bytes];
            dst_row.copy_from_slice(src_row);
        }
        return;
    }

    for_each_pixel::<T, _>(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        None,
        0,
        rows,
        cols,
        |d, s, _| {
            d.copy_from_slice(s);
            let alpha = channel_f32::<T>(s, layout::ALPHA);
            set_channel_f32::<T>(d, layout::ALPHA, alpha * opacity);
        },
    );
}

// ============================================================================
// Dispatch
// ============================================================================

/// Composite `src` onto `dst` with the given mode.
///
/// Converts the 8-bit opacity to float once and dispatches. Reserved
/// and unimplemented modes leave the destination untouched; that
/// silence is part of the document-compatibility contract.
#[allow(clippy::too_many_arguments)]
pub fn bit_blt<T: ChannelValue>(
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
    trace!(rows, cols, opacity, op = %op, "bit_blt");
    let opacity = to_normalized(opacity);

    if op == CompositeOp::Copy {
        composite_copy::<T>(dst, dst_row_stride, src, src_row_stride, rows, cols, opacity);
        return;
    }

    type Routine = fn(&mut [u8], usize, &[u8], usize, Option<&[u8]>, usize, usize, usize, f32);

    let routine: Routine = match op {
        CompositeOp::Over => composite_over::<T>,
        CompositeOp::Multiply => composite_multiply::<T>,
        CompositeOp::Divide => composite_divide::<T>,
        CompositeOp::Dodge => composite_dodge::<T>,
        CompositeOp::Burn => composite_burn::<T>,
        CompositeOp::Darken => composite_darken::<T>,
        CompositeOp::Lighten => composite_lighten::<T>,
        CompositeOp::Hue => composite_hue::<T>,
        CompositeOp::Saturation => composite_saturation::<T>,
        CompositeOp::Value => composite_value::<T>,
        CompositeOp::Color => composite_color::<T>,
        CompositeOp::Screen => composite_screen::<T>,
        CompositeOp::Overlay => composite_overlay::<T>,
        CompositeOp::Erase => composite_erase::<T>,
        // Reserved slots and explicit no-ops: destination stays as is.
        _ => return,
    };

    routine(
        dst,
        dst_row_stride,
        src,
        src_row_stride,
        mask,
        mask_row_stride,
        rows,
        cols,
        opacity,
    );
}
