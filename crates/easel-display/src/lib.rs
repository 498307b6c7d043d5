//! # easel-display
//!
//! Exposure and gamma mapping from float canvases to 8-bit display
//! buffers for the Easel paint engine.
//!
//! Scene-referred float pixels are linear light and unbounded, so the
//! canvas widget cannot hand them to a window surface as-is. This crate
//! implements the viewing transform it applies instead: an exposure
//! multiplier, the fixed `1/2.2` display gamma, and a middle gray scale
//! that lands a 0.18 scene value near the conventional framebuffer
//! gray. Alpha passes through as plain quantization.
//!
//! # Example
//!
//! ```
//! use easel_display::{DisplayFormat, to_display_image};
//!
//! // One opaque middle-gray f32 pixel in engine memory order.
//! let mut data = [0u8; 16];
//! for i in 0..3 {
//!     data[i * 4..][..4].copy_from_slice(&0.18f32.to_ne_bytes());
//! }
//! data[12..].copy_from_slice(&1.0f32.to_ne_bytes());
//!
//! let img = to_display_image::<f32>(&data, 1, 1, 0.0, DisplayFormat::Bgra8).unwrap();
//! assert_eq!(img.pixels, [85, 85, 85, 255]);
//! ```
//!
//! # Dependencies
//!
//! - `easel-core` - channel access and validation errors
//! - `tracing` - conversion diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod image;

pub use convert::{
    DISPLAY_GAMMA, DISPLAY_MIDDLE_GRAY_SCALE, EXPOSURE_MIDDLE_GRAY_BIAS, convert_to_display,
    exposure_factor, to_display_image,
};
pub use image::{DISPLAY_PIXEL_SIZE, DisplayFormat, DisplayImage};
