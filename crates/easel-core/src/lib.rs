//! # easel-core
//!
//! Core channel and pixel-layout types for the Easel paint engine.
//!
//! This crate is the foundation the colorspace and compositing crates
//! build on:
//!
//! - [`ChannelValue`] - trait over the channel scalar types (f16, f32)
//! - [`channel`] - integer bridges, lerp, opacity constants
//! - [`layout`] - the BGRA pixel memory layout
//! - [`ChannelInfo`], [`ChannelFlags`] - channel metadata and selectors
//! - [`hsx`] - HSV/HSL conversions for the hue-based blend modes
//! - [`Rgb8`] - 8-bit device color bridge
//! - [`Error`], [`Result`] - geometry validation errors
//!
//! ## Design Philosophy
//!
//! Pixel buffers stay raw bytes end to end. Nothing here owns an image;
//! the types describe how channels sit inside `&[u8]` runs and how to
//! move values in and out at the right precision. All arithmetic widens
//! to f32 and narrows back on store, so half and single precision
//! buffers share one code path.
//!
//! ## Crate Structure
//!
//! ```text
//! easel-core (this crate)
//!    ^
//!    |
//!    +-- easel-composite (blend modes, dispatcher)
//!    +-- easel-color (colorspaces, alpha ops)
//!    +-- easel-display (display conversion)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod color;
pub mod error;
pub mod hsx;
pub mod info;
pub mod layout;

// Re-exports for convenience
pub use channel::{
    ChannelValue, OPACITY_OPAQUE, OPACITY_OPAQUE_U8, OPACITY_TRANSPARENT, OPACITY_TRANSPARENT_U8,
    lerp, to_byte, to_normalized, to_word,
};
pub use color::Rgb8;
pub use error::{Error, Result};
pub use info::{ChannelFlags, ChannelFormat, ChannelInfo, ChannelKind};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use easel_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{
        ChannelValue, OPACITY_OPAQUE, OPACITY_OPAQUE_U8, OPACITY_TRANSPARENT,
        OPACITY_TRANSPARENT_U8, lerp, to_byte, to_normalized, to_word,
    };
    pub use crate::color::Rgb8;
    pub use crate::error::{Error, Result};
    pub use crate::info::{ChannelFlags, ChannelFormat, ChannelInfo, ChannelKind};
    pub use crate::layout;
}
