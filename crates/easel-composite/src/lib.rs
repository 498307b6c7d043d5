//! # easel-composite
//!
//! Buffer compositing engine and blend-mode registry for the Easel
//! paint engine.
//!
//! The engine composites one raw pixel buffer onto another, pixel by
//! pixel, with a selectable blend mode, an opacity, and an optional
//! one-byte-per-pixel selection mask:
//!
//! - [`CompositeOp`] - blend modes with stable document ids
//! - [`bit_blt`] - the dispatcher: id in, pixels out
//! - [`engine`] - the individual compositing routines
//! - [`parallel`] - opt-in row-band parallelism (feature `parallel`)
//!
//! Buffers are `&[u8]`/`&mut [u8]` in the BGRA float layout from
//! `easel-core`; the channel type (`f16` or `f32`) is the generic
//! parameter on every routine.
//!
//! ## Example
//!
//! ```
//! use easel_composite::{CompositeOp, bit_blt};
//!
//! // One opaque red f32 pixel over one opaque blue pixel.
//! let mut dst = Vec::new();
//! for v in [1.0f32, 0.0, 0.0, 1.0] {
//!     dst.extend_from_slice(&v.to_ne_bytes()); // B, G, R, A
//! }
//! let mut src = Vec::new();
//! for v in [0.0f32, 0.0, 1.0, 1.0] {
//!     src.extend_from_slice(&v.to_ne_bytes());
//! }
//!
//! bit_blt::<f32>(&mut dst, 16, &src, 16, None, 0, 1, 1, 255, CompositeOp::Over);
//! assert_eq!(dst, src); // opaque source copies through
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Rayon row-band dispatch (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod engine;
pub mod op;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use engine::{
    bit_blt, composite_burn, composite_color, composite_copy, composite_darken, composite_divide,
    composite_dodge, composite_erase, composite_hue, composite_lighten, composite_multiply,
    composite_over, composite_overlay, composite_saturation, composite_screen, composite_value,
    composite_with,
};
pub use op::{CompositeOp, USER_VISIBLE_OPS, user_visible_composite_ops};
