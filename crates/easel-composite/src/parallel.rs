//! Parallel compositing using Rayon.
//!
//! A validating row-band front end over the sequential engine: the
//! destination is split into disjoint bands of whole rows, and each
//! band runs [`crate::engine::bit_blt`] on its own thread. Because a
//! composite touches each destination pixel independently, banding
//! produces byte-identical results to the sequential path.
//!
//! Unlike the hot engine routines, this entry point checks geometry up
//! front and returns typed errors, so callers handing over large
//! untrusted tile runs get a diagnostic instead of a panic.
//!
//! # Example
//!
//! ```rust
//! use easel_composite::op::CompositeOp;
//! use easel_composite::parallel::bit_blt_par;
//!
//! let src = vec![0u8; 64 * 64 * 16];
//! let mut dst = vec![0u8; 64 * 64 * 16];
//! bit_blt_par::<f32>(
//!     &mut dst, 64 * 16,
//!     &src, 64 * 16,
//!     None, 0,
//!     64, 64,
//!     255, CompositeOp::Over,
//!     16,
//! )
//! .unwrap();
//! ```

use crate::engine;
use crate::op::CompositeOp;
use easel_core::channel::ChannelValue;
use easel_core::{Error, Result, layout};
use rayon::prelude::*;

/// Band height that amortizes dispatch without starving the pool.
pub const DEFAULT_BAND_ROWS: usize = 64;

/// Composite `src` onto `dst` in parallel row bands.
///
/// Semantics match [`crate::engine::bit_blt`] exactly; `band_rows`
/// controls how many rows each task processes (0 is treated as 1).
///
/// # Errors
///
/// Returns a size error when a stride is smaller than one row or a
/// buffer cannot cover the requested geometry, and a dimension error
/// when the geometry itself overflows the addressable range.
#[allow(clippy::too_many_arguments)]
pub fn bit_blt_par<T: ChannelValue>(
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
    band_rows: usize,
) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let pixel = layout::pixel_size::<T>();
    let row_bytes = cols
        .checked_mul(pixel)
        .ok_or_else(|| Error::dimensions_too_large(cols, rows))?;

    if rows > 1 {
        if dst_row_stride < row_bytes {
            return Err(Error::stride_too_small("dst", dst_row_stride, row_bytes));
        }
        if src_row_stride < row_bytes {
            return Err(Error::stride_too_small("src", src_row_stride, row_bytes));
        }
        if mask.is_some() && mask_row_stride < cols {
            return Err(Error::stride_too_small("mask", mask_row_stride, cols));
        }
    }

    let span = |stride: usize, tail: usize| -> Result<usize> {
        (rows - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(tail))
            .ok_or_else(|| Error::dimensions_too_large(cols, rows))
    };

    let dst_needed = span(dst_row_stride, row_bytes)?;
    if dst.len() < dst_needed {
        return Err(Error::buffer_too_small("dst", dst_needed, dst.len()));
    }
    let src_needed = span(src_row_stride, row_bytes)?;
    if src.len() < src_needed {
        return Err(Error::buffer_too_small("src", src_needed, src.len()));
    }
    if let Some(m) = mask {
        let mask_needed = span(mask_row_stride, cols)?;
        if m.len() < mask_needed {
            return Err(Error::buffer_too_small("mask", mask_needed, m.len()));
        }
    }

    let band_rows = band_rows.max(1);
    if rows <= band_rows {
        engine::bit_blt::<T>(
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
        return Ok(());
    }

    dst[..dst_needed]
        .par_chunks_mut(band_rows * dst_row_stride)
        .enumerate()
        .for_each(|(band, chunk)| {
            let row0 = band * band_rows;
            let band_rows_here = band_rows.min(rows - row0);
            let src_band = &src[row0 * src_row_stride..];
            let mask_band = mask.map(|m| &m[row0 * mask_row_stride..]);
            engine::bit_blt::<T>(
                chunk,
                dst_row_stride,
                src_band,
                src_row_stride,
                mask_band,
                mask_row_stride,
                band_rows_here,
                cols,
                opacity,
                op,
            );
        });

    Ok(())
}
