//! Interleaved RGBA pixel storage with validated dimensions
//!
//! A `PixelBuffer` can only be constructed in a well-formed state: both
//! dimensions are at least one and the byte length is exactly
//! `width * height * 4`. Everything downstream relies on that, which is what
//! lets the transform itself be infallible.

use crate::io::error::{DitherError, Result};
use image::RgbaImage;
use std::slice::ChunksExactMut;

/// Number of interleaved channels per pixel (R, G, B, A)
pub const CHANNELS: usize = 4;

/// Row-major RGBA8 pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw interleaved RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns `DitherError::InvalidBuffer` if either dimension is zero or the
    /// byte length does not equal `width * height * 4`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = expected_len(width, height);
        if width == 0 || height == 0 || expected != Some(data.len()) {
            return Err(DitherError::InvalidBuffer {
                width,
                height,
                len: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel has the same RGBA value
    ///
    /// # Errors
    ///
    /// Returns `DitherError::InvalidBuffer` if either dimension is zero or
    /// the pixel count does not fit in memory
    pub fn from_pixel(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = expected_len(width, height).ok_or(DitherError::InvalidBuffer {
            width,
            height,
            len: 0,
        })?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Self::new(width, height, data)
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw interleaved bytes
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its raw interleaved bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at (x, y), or `None` outside the grid
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let index = self.index(x, y)?;
        let channels = self.data.get(index..index + CHANNELS)?;
        <[u8; 4]>::try_from(channels).ok()
    }

    /// Iterate over pixels in raster order
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| <[u8; 4]>::try_from(c).unwrap_or_default())
    }

    /// Red channel of the pixel at (x, y); the gray level once tone mapping ran
    pub(crate) fn gray(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).and_then(|i| self.data.get(i).copied())
    }

    /// Write one level to R, G and B of the pixel at (x, y), leaving alpha
    pub(crate) fn set_gray(&mut self, x: u32, y: u32, value: u8) {
        if let Some(index) = self.index(x, y) {
            if let Some(rgb) = self.data.get_mut(index..index + 3) {
                rgb.fill(value);
            }
        }
    }

    /// Mutable per-pixel chunks in raster order
    pub(crate) fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// Convert into an `image` crate buffer for encoding
    ///
    /// # Errors
    ///
    /// Returns `DitherError::InvalidBuffer` if the image crate rejects the
    /// layout, which cannot happen for a buffer built through `new`
    pub fn into_image(self) -> Result<RgbaImage> {
        let (width, height, len) = (self.width, self.height, self.data.len());
        RgbaImage::from_raw(width, height, self.data)
            .ok_or(DitherError::InvalidBuffer { width, height, len })
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * CHANNELS)
    }
}

impl TryFrom<RgbaImage> for PixelBuffer {
    type Error = DitherError;

    fn try_from(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }
}

fn expected_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
}
