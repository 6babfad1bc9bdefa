//! Image - The indexed sprite buffer
//!
//! An `Image` is a rectangular grid of palette indices. Every pixel holds
//! one index in `0..=MAX_INDEX`; index [`TRANSPARENT`] is the background
//! that the host composites through.
//!
//! # Pixel layout
//!
//! - One byte per pixel, row-major, no row padding
//! - `(0, 0)` is the top-left corner, `x` grows right and `y` grows down
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership), so handing a
//! sprite's image to the rotation registry never copies pixels. To modify
//! pixel data, convert to `ImageMut` via [`Image::try_into_mut`] or
//! [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
pub mod compare;
pub mod serial;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Palette index treated as transparent background.
///
/// Freshly created images are filled with it, and reads outside the image
/// bounds through [`Image::sample`] return it.
pub const TRANSPARENT: u8 = 0;

/// Largest valid palette index.
pub const MAX_INDEX: u8 = 15;

/// Offset of pixel `(x, y)` in a row-major buffer `width` pixels wide.
#[inline]
pub(crate) fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Internal image data
#[derive(Debug)]
struct ImageData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageData {
    fn blank(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![TRANSPARENT; len],
        })
    }
}

impl Clone for ImageData {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }
}

/// Indexed-color sprite image
///
/// `Image` is the buffer type exchanged with the host: sprites own one,
/// the rotation engine reads it and produces new ones.
///
/// # Examples
///
/// ```
/// use pixspin_core::Image;
///
/// let image = Image::new(16, 16).unwrap();
/// assert_eq!(image.width(), 16);
/// assert_eq!(image.get_pixel(3, 4), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image filled with [`TRANSPARENT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Image {
            inner: Arc::new(ImageData::blank(width, height)?),
        })
    }

    /// Create an image from row-major palette indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len() != width * height`
    /// and [`Error::InvalidPaletteIndex`] if any index exceeds [`MAX_INDEX`].
    pub fn from_indices(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let mut image = ImageData::blank(width, height)?;
        if data.len() != image.data.len() {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: (data.len() as u32, 1),
            });
        }
        if let Some(&bad) = data.iter().find(|&&v| v > MAX_INDEX) {
            return Err(Error::InvalidPaletteIndex(bad as u32));
        }
        image.data = data;
        Ok(Image {
            inner: Arc::new(image),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = pixel_offset(self.inner.width, 0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new(self.inner.as_ref().clone()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: self.inner.as_ref().clone(),
        }
    }
}

/// Mutable image
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new mutable image filled with [`TRANSPARENT`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(ImageMut {
            inner: ImageData::blank(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable raw access to the pixel data.
    ///
    /// Callers are responsible for keeping every value `<= MAX_INDEX`.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set every pixel to `val`.
    pub fn fill(&mut self, val: u8) -> Result<()> {
        if val > MAX_INDEX {
            return Err(Error::InvalidPaletteIndex(val as u32));
        }
        self.inner.data.fill(val);
        Ok(())
    }

    /// Reset every pixel to [`TRANSPARENT`].
    pub fn clear(&mut self) {
        self.inner.data.fill(TRANSPARENT);
    }
}

impl From<ImageMut> for Image {
    fn from(image_mut: ImageMut) -> Self {
        Image {
            inner: Arc::new(image_mut.inner),
        }
    }
}
