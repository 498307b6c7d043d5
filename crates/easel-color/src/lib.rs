//! # easel-color
//!
//! Float RGBA colorspaces for the Easel paint engine.
//!
//! A colorspace interprets raw pixel bytes: it knows the channel
//! layout, bridges 8-bit device colors, runs the per-pixel utilities
//! (difference, mixing, convolution, inversion, luma), applies alpha
//! masks, and dispatches compositing and display conversion. Layers
//! hold plain byte buffers and a `&dyn ColorSpace`; nothing here owns
//! image data.
//!
//! Both channel depths come from one generic implementation:
//!
//! - [`RgbaF16`] - half precision, 8-byte pixels
//! - [`RgbaF32`] - single precision, 16-byte pixels
//!
//! # Example
//!
//! ```
//! use easel_color::{ColorSpace, RGBA_F32};
//! use easel_composite::CompositeOp;
//! use easel_core::Rgb8;
//!
//! let cs: &dyn ColorSpace = &RGBA_F32;
//!
//! // Paint one opaque red pixel over a transparent canvas.
//! let mut canvas = vec![0u8; cs.pixel_size()];
//! let mut brush = vec![0u8; cs.pixel_size()];
//! cs.from_rgb8_with_alpha(Rgb8::new(255, 0, 0), 255, &mut brush);
//! cs.bit_blt(
//!     &mut canvas,
//!     cs.pixel_size(),
//!     &brush,
//!     cs.pixel_size(),
//!     None,
//!     0,
//!     1,
//!     1,
//!     255,
//!     CompositeOp::Over,
//! );
//! assert_eq!(cs.to_rgb8(&canvas), Rgb8::new(255, 0, 0));
//! ```
//!
//! # Dependencies
//!
//! - `easel-core` - channel model, layout, metadata
//! - `easel-composite` - blend modes and the compositing engine
//! - `easel-display` - display conversion
//! - `half` - the f16 channel type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alpha;
pub mod rgba;
pub mod space;

pub use alpha::AlphaOps;
pub use rgba::{RGBA_F16, RGBA_F32, RgbaColorSpace, RgbaF16, RgbaF32};
pub use space::ColorSpace;

// The types callers meet through the trait surface.
pub use easel_composite::CompositeOp;
pub use easel_display::{DisplayFormat, DisplayImage};
