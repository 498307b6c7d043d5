//! Pixel memory layout for the float RGBA family.
//!
//! Pixels store four channels in memory order blue, green, red, alpha.
//! A channel's byte offset is its memory index times the channel width,
//! so the three color channels occupy the leading bytes of every pixel
//! and alpha sits last. Bulk color copies exploit that contiguity.
//!
//! # Types
//!
//! - Channel memory indices: [`BLUE`], [`GREEN`], [`RED`], [`ALPHA`]
//! - Size helpers: [`pixel_size`], [`channel_offset`], [`alpha_offset`]
//!
//! # Used By
//!
//! - `easel-color` - channel metadata and pixel accessors
//! - `easel-composite` - channel addressing in the blend loops
//! - `easel-display` - source channel addressing

use crate::channel::ChannelValue;

/// Memory index of the blue channel.
pub const BLUE: usize = 0;

/// Memory index of the green channel.
pub const GREEN: usize = 1;

/// Memory index of the red channel.
pub const RED: usize = 2;

/// Memory index of the alpha channel.
pub const ALPHA: usize = 3;

/// Channels per pixel.
pub const CHANNELS: usize = 4;

/// Color channels per pixel (alpha excluded).
pub const COLOR_CHANNELS: usize = 3;

/// Byte offset of a channel inside a pixel of channel type `T`.
#[inline]
pub const fn channel_offset<T: ChannelValue>(index: usize) -> usize {
    index * T::BYTES
}

/// Pixel stride in bytes for channel type `T`.
#[inline]
pub const fn pixel_size<T: ChannelValue>() -> usize {
    CHANNELS * T::BYTES
}

/// Byte offset of the alpha channel for channel type `T`.
#[inline]
pub const fn alpha_offset<T: ChannelValue>() -> usize {
    ALPHA * T::BYTES
}
