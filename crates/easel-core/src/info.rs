//! Channel metadata for colorspace introspection.
//!
//! A colorspace publishes one [`ChannelInfo`] per channel so that UI and
//! tooling (channel docks, histograms, curve dialogs) can enumerate
//! channels without knowing the pixel layout. [`ChannelFlags`] selects
//! channel groups for operations that touch only part of a pixel, such
//! as convolution.
//!
//! # Types
//!
//! - [`ChannelKind`] - semantic role (color vs alpha)
//! - [`ChannelFormat`] - numeric storage format (half vs single float)
//! - [`ChannelFlags`] - channel group selector bits
//! - [`ChannelInfo`] - per-channel descriptor
//!
//! # Used By
//!
//! - `easel-color` - builds the descriptor table per colorspace
//! - `easel-composite` - convolution channel gating

use bitflags::bitflags;
use std::fmt;

/// Semantic role of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// A color component.
    Color,
    /// Coverage / opacity.
    Alpha,
}

impl ChannelKind {
    /// Whether this channel carries color.
    #[inline]
    pub const fn is_color(self) -> bool {
        matches!(self, ChannelKind::Color)
    }

    /// Whether this channel carries opacity.
    #[inline]
    pub const fn is_alpha(self) -> bool {
        matches!(self, ChannelKind::Alpha)
    }
}

/// Numeric storage format of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelFormat {
    /// IEEE 754 half precision.
    Float16,
    /// IEEE 754 single precision.
    Float32,
}

impl ChannelFormat {
    /// Channel width in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            ChannelFormat::Float16 => 2,
            ChannelFormat::Float32 => 4,
        }
    }

    /// Channel width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            ChannelFormat::Float16 => 16,
            ChannelFormat::Float32 => 32,
        }
    }

    /// Lowercase format name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ChannelFormat::Float16 => "float16",
            ChannelFormat::Float32 => "float32",
        }
    }
}

impl fmt::Display for ChannelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Channel group selectors for partially-applied pixel operations.
    ///
    /// Convolution takes a flag set and writes only the selected groups,
    /// leaving the destination's other channels untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChannelFlags: u8 {
        /// The color channels as a group.
        const COLOR = 0b01;
        /// The alpha channel.
        const ALPHA = 0b10;
    }
}

/// Metadata describing one channel of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelInfo {
    /// Display name shown in channel listings.
    pub name: &'static str,
    /// Byte offset of the channel within a pixel.
    pub offset: usize,
    /// Semantic role.
    pub kind: ChannelKind,
    /// Numeric storage format.
    pub format: ChannelFormat,
}

impl ChannelInfo {
    /// Build a descriptor.
    #[inline]
    pub const fn new(
        name: &'static str,
        offset: usize,
        kind: ChannelKind,
        format: ChannelFormat,
    ) -> Self {
        Self {
            name,
            offset,
            kind,
            format,
        }
    }

    /// Channel size in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.format.bytes()
    }
}
