//! Error types for buffer geometry validation.
//!
//! The hot per-pixel paths are infallible by contract: geometry is a
//! documented precondition and violations surface as slice panics. The
//! validating entry points (parallel dispatch, display image building)
//! check geometry up front and return these typed errors instead.
//!
//! # Usage
//!
//! ```rust
//! use easel_core::{Error, Result};
//!
//! fn check_rows(len: usize, rows: usize, stride: usize) -> Result<()> {
//!     let needed = rows * stride;
//!     if len < needed {
//!         return Err(Error::buffer_too_small("dst", needed, len));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro for error implementations

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the validating buffer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A buffer is shorter than its geometry requires.
    #[error("{role} buffer holds {len} bytes but the geometry needs {needed}")]
    BufferTooSmall {
        /// Which buffer ("src", "dst", "mask", "pixels").
        role: &'static str,
        /// Bytes the geometry addresses.
        needed: usize,
        /// Bytes actually present.
        len: usize,
    },

    /// A row stride is smaller than one row of pixels.
    #[error("{role} row stride {stride} is smaller than the {row_bytes}-byte row")]
    StrideTooSmall {
        /// Which buffer the stride belongs to.
        role: &'static str,
        /// Stride in bytes.
        stride: usize,
        /// Bytes one row of pixels occupies.
        row_bytes: usize,
    },

    /// Image dimensions overflow the addressable byte range.
    #[error("image dimensions {width}x{height} overflow the addressable size")]
    DimensionsTooLarge {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
}

impl Error {
    /// Build a [`Error::BufferTooSmall`].
    pub fn buffer_too_small(role: &'static str, needed: usize, len: usize) -> Self {
        Error::BufferTooSmall { role, needed, len }
    }

    /// Build a [`Error::StrideTooSmall`].
    pub fn stride_too_small(role: &'static str, stride: usize, row_bytes: usize) -> Self {
        Error::StrideTooSmall {
            role,
            stride,
            row_bytes,
        }
    }

    /// Build a [`Error::DimensionsTooLarge`].
    pub fn dimensions_too_large(width: usize, height: usize) -> Self {
        Error::DimensionsTooLarge { width, height }
    }

    /// Whether this is a buffer or stride size error.
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            Error::BufferTooSmall { .. } | Error::StrideTooSmall { .. }
        )
    }

    /// Whether this is a dimension overflow error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Error::DimensionsTooLarge { .. })
    }
}
