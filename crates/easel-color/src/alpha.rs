//! Alpha-channel operations over pixel runs.
//!
//! Selections, layer opacity and the eraser all end up scaling alpha
//! across runs of pixels. [`AlphaOps`] packages those loops once,
//! parameterized by the alpha channel's byte offset and the pixel
//! stride, so every colorspace variant shares them.
//!
//! # Design
//!
//! A colorspace without an alpha channel passes `None` for the offset;
//! reads then report fully opaque and the mutating operations become
//! no-ops. Mask buffers carry one byte per pixel and scale alpha by
//! `mask / 255` (or the complement for the inverse form).

use std::marker::PhantomData;

use easel_core::channel::{ChannelValue, OPACITY_OPAQUE_U8, to_byte, to_normalized};

/// Alpha operations for one pixel encoding.
#[derive(Debug, Clone, Copy)]
pub struct AlphaOps<T> {
    alpha_offset: Option<usize>,
    pixel_size: usize,
    _channel: PhantomData<T>,
}

impl<T: ChannelValue> AlphaOps<T> {
    /// Build the operations for a layout.
    ///
    /// `alpha_offset` is the alpha channel's byte offset within a pixel,
    /// or `None` when the encoding has no alpha channel.
    pub const fn new(alpha_offset: Option<usize>, pixel_size: usize) -> Self {
        Self {
            alpha_offset,
            pixel_size,
            _channel: PhantomData,
        }
    }

    /// Alpha channel byte offset, if the encoding has one.
    pub const fn alpha_offset(&self) -> Option<usize> {
        self.alpha_offset
    }

    /// Pixel stride in bytes.
    pub const fn pixel_size(&self) -> usize {
        self.pixel_size
    }

    /// Read one pixel's alpha as an 8-bit value.
    ///
    /// Reports fully opaque when the encoding has no alpha channel.
    pub fn alpha8(&self, pixel: &[u8]) -> u8 {
        match self.alpha_offset {
            Some(offset) => to_byte(T::read(&pixel[offset..]).to_f32()),
            None => OPACITY_OPAQUE_U8,
        }
    }

    /// Set every pixel's alpha to `alpha`.
    pub fn set_alpha(&self, pixels: &mut [u8], alpha: u8) {
        let Some(offset) = self.alpha_offset else {
            return;
        };
        let value = T::from_f32(to_normalized(alpha));
        for px in pixels.chunks_exact_mut(self.pixel_size) {
            value.write(&mut px[offset..]);
        }
    }

    /// Scale every pixel's alpha by `alpha / 255`.
    pub fn multiply_alpha(&self, pixels: &mut [u8], alpha: u8) {
        let Some(offset) = self.alpha_offset else {
            return;
        };
        let factor = to_normalized(alpha);
        for px in pixels.chunks_exact_mut(self.pixel_size) {
            let slot = &mut px[offset..];
            let a = T::read(slot).to_f32();
            T::from_f32(a * factor).write(slot);
        }
    }

    /// Scale each pixel's alpha by its mask byte, `mask[i] / 255`.
    ///
    /// `mask` carries one byte per pixel.
    pub fn apply_alpha_mask(&self, pixels: &mut [u8], mask: &[u8]) {
        let Some(offset) = self.alpha_offset else {
            return;
        };
        debug_assert!(
            mask.len() * self.pixel_size >= pixels.len(),
            "mask shorter than the pixel run"
        );
        for (px, &m) in pixels.chunks_exact_mut(self.pixel_size).zip(mask) {
            let slot = &mut px[offset..];
            let a = T::read(slot).to_f32();
            T::from_f32(a * to_normalized(m)).write(slot);
        }
    }

    /// Scale each pixel's alpha by the mask complement, `(255 - mask[i]) / 255`.
    ///
    /// Deselected pixels keep their alpha, fully selected ones lose it.
    pub fn apply_inverse_alpha_mask(&self, pixels: &mut [u8], mask: &[u8]) {
        let Some(offset) = self.alpha_offset else {
            return;
        };
        debug_assert!(
            mask.len() * self.pixel_size >= pixels.len(),
            "mask shorter than the pixel run"
        );
        for (px, &m) in pixels.chunks_exact_mut(self.pixel_size).zip(mask) {
            let slot = &mut px[offset..];
            let a = T::read(slot).to_f32();
            T::from_f32(a * to_normalized(OPACITY_OPAQUE_U8 - m)).write(slot);
        }
    }
}
