//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Checked accessors validate both the coordinate and the palette index;
//! the `_unchecked` variants are for inner loops whose bounds are already
//! established by the loop itself.

use super::{Image, ImageMut, MAX_INDEX, TRANSPARENT, pixel_offset};
use crate::error::{Error, Result};

impl Image {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width() && y < self.height() {
            Some(self.get_pixel_unchecked(x, y))
        } else {
            None
        }
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the data buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[pixel_offset(self.width(), x, y)]
    }

    /// Read a pixel at signed coordinates.
    ///
    /// Coordinates outside the image read as [`TRANSPARENT`], the same
    /// sentinel the host returns for off-image reads. Neighborhood filters
    /// rely on this instead of clamping.
    #[inline]
    pub fn sample(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 {
            return TRANSPARENT;
        }
        self.get_pixel(x as u32, y as u32).unwrap_or(TRANSPARENT)
    }

    /// Read a pixel at signed coordinates, clamped to the nearest edge.
    #[inline]
    pub fn sample_clamped(&self, x: i32, y: i32) -> u8 {
        let cx = x.clamp(0, self.width() as i32 - 1) as u32;
        let cy = y.clamp(0, self.height() as i32 - 1) as u32;
        self.get_pixel_unchecked(cx, cy)
    }
}

impl ImageMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width() && y < self.height() {
            Some(self.get_pixel_unchecked(x, y))
        } else {
            None
        }
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[pixel_offset(self.width(), x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::InvalidPaletteIndex`] if `val > MAX_INDEX`.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        if val > MAX_INDEX {
            return Err(Error::InvalidPaletteIndex(val as u32));
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the data buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        debug_assert!(val <= MAX_INDEX);
        let idx = pixel_offset(self.width(), x, y);
        self.data_mut()[idx] = val;
    }
}
