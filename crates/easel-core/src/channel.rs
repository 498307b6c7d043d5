//! Channel scalar model and numeric conversion helpers.
//!
//! Everything in the engine stores channels as IEEE floats, either half
//! precision (`f16`) or single precision (`f32`), inside raw byte buffers.
//! This module defines the [`ChannelValue`] trait that abstracts over the
//! two, plus the 8-bit/16-bit integer bridges shared by every colorspace.
//!
//! # Types
//!
//! - [`ChannelValue`] - Trait for channel scalar types (f16, f32)
//! - Free helpers: [`to_normalized`], [`to_byte`], [`to_word`], [`lerp`]
//!
//! # Design
//!
//! Channel values are nominally in [0.0, 1.0] but may leave that range
//! transiently (HDR sources, convolution overshoot); clamping happens only
//! at the explicit points the operations define. Each scalar type carries
//! its own [`EPSILON`](ChannelValue::EPSILON) used for "effectively
//! opaque" / "effectively transparent" tests, so half-precision buffers
//! are compared at half precision.
//!
//! Byte access is native-endian reinterpretation: buffers are `&[u8]` and
//! channels are read/written with [`ChannelValue::read`] and
//! [`ChannelValue::write`] at computed byte offsets. This keeps buffer
//! code free of alignment assumptions.
//!
//! # Example
//!
//! ```
//! use easel_core::channel::{to_byte, to_normalized, ChannelValue};
//!
//! // 8-bit round trip
//! assert_eq!(to_byte(to_normalized(128)), 128);
//!
//! // Native-endian channel access
//! let mut buf = [0u8; 4];
//! 0.25f32.write(&mut buf);
//! assert_eq!(f32::read(&buf), 0.25);
//! ```
//!
//! # Dependencies
//!
//! - `half` crate for `f16` support
//!
//! # Used By
//!
//! - `easel-color` - pixel accessors and alpha operations
//! - `easel-composite` - blend arithmetic
//! - `easel-display` - display quantization

use crate::info::ChannelFormat;
use half::f16;

// ============================================================================
// Opacity Constants
// ============================================================================

/// Fully opaque alpha in the 8-bit encoding.
///
/// Doubles as the mask sentinel: a mask byte equal to this value means
/// "fully selected" and the per-pixel mask multiply is skipped entirely.
pub const OPACITY_OPAQUE_U8: u8 = u8::MAX;

/// Fully transparent alpha in the 8-bit encoding.
pub const OPACITY_TRANSPARENT_U8: u8 = 0;

/// Fully opaque alpha in normalized float form.
pub const OPACITY_OPAQUE: f32 = 1.0;

/// Fully transparent alpha in normalized float form.
pub const OPACITY_TRANSPARENT: f32 = 0.0;

// ============================================================================
// Integer Bridges
// ============================================================================

/// Convert an 8-bit channel encoding to a normalized float.
///
/// Maps 0 to 0.0 and 255 to 1.0.
#[inline]
pub fn to_normalized(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Quantize a normalized float to the 8-bit channel encoding.
///
/// Rounds half-up via `+ 0.5` then truncation, clamped to 0..=255.
/// Out-of-range and NaN inputs land on the nearest bound (NaN on 0)
/// through the saturating float-to-int cast.
#[inline]
pub fn to_byte(v: f32) -> u8 {
    ((v * 255.0 + 0.5) as i32).clamp(0, 255) as u8
}

/// Quantize a normalized float to the 16-bit channel encoding.
///
/// Same rounding and clamping policy as [`to_byte`], over 0..=65535.
#[inline]
pub fn to_word(v: f32) -> u16 {
    ((v * 65535.0 + 0.5) as i32).clamp(0, 65535) as u16
}

/// Interpolate from `dst` toward `src` by `alpha`.
///
/// Computes `dst + (src - dst) * alpha`: alpha 0.0 yields `dst`,
/// alpha 1.0 yields `src`. This exact formulation is the one every
/// compositing epilog uses.
#[inline]
pub fn lerp(src: f32, dst: f32, alpha: f32) -> f32 {
    dst + (src - dst) * alpha
}

// ============================================================================
// Channel Scalar Trait
// ============================================================================

/// Trait for channel scalar types stored in pixel buffers.
///
/// Implemented for the two float formats the engine supports:
///
/// - `f16` - 16-bit half precision (8-byte RGBA pixels)
/// - `f32` - 32-bit single precision (16-byte RGBA pixels)
///
/// # Constants
///
/// - [`FORMAT`](ChannelValue::FORMAT) - the [`ChannelFormat`] tag
/// - [`BYTES`](ChannelValue::BYTES) - channel width in bytes
/// - [`EPSILON`](ChannelValue::EPSILON) - tolerance for effectively
///   opaque/transparent tests at this precision
///
/// # Byte Access
///
/// [`read`](ChannelValue::read) and [`write`](ChannelValue::write)
/// reinterpret the leading `BYTES` bytes of a slice in native endian
/// order. They index the slice directly, so a too-short slice panics;
/// callers address channels at `index * BYTES` inside a pixel.
pub trait ChannelValue:
    Copy + Clone + Default + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Numeric format tag for channel metadata.
    const FORMAT: ChannelFormat;

    /// Channel width in bytes.
    const BYTES: usize;

    /// Comparison tolerance at this precision.
    ///
    /// 1e-6 for `f32` (the engine's historical constant, looser than the
    /// machine epsilon); 2^-10 for `f16` (the half machine epsilon).
    const EPSILON: f32;

    /// Widen to f32 for arithmetic.
    fn to_f32(self) -> f32;

    /// Narrow from f32 after arithmetic.
    fn from_f32(v: f32) -> Self;

    /// Read a channel from the leading bytes of a slice, native endian.
    fn read(bytes: &[u8]) -> Self;

    /// Write a channel into the leading bytes of a slice, native endian.
    fn write(self, bytes: &mut [u8]);
}

impl ChannelValue for f16 {
    const FORMAT: ChannelFormat = ChannelFormat::Float16;
    const BYTES: usize = 2;
    const EPSILON: f32 = 9.765625e-4; // 2^-10

    #[inline]
    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        f16::from_f32(v)
    }

    #[inline]
    fn read(bytes: &[u8]) -> Self {
        f16::from_ne_bytes([bytes[0], bytes[1]])
    }

    #[inline]
    fn write(self, bytes: &mut [u8]) {
        bytes[..2].copy_from_slice(&self.to_ne_bytes());
    }
}

impl ChannelValue for f32 {
    const FORMAT: ChannelFormat = ChannelFormat::Float32;
    const BYTES: usize = 4;
    const EPSILON: f32 = 1e-6;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }

    #[inline]
    fn read(bytes: &[u8]) -> Self {
        f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline]
    fn write(self, bytes: &mut [u8]) {
        bytes[..4].copy_from_slice(&self.to_ne_bytes());
    }
}
