//! Image comparison operations
//!
//! - Pixel equality checks
//! - Pixel difference counting
//! - Opaque pixel counting, used to measure the holes a rotation leaves

use super::{Image, TRANSPARENT};
use crate::error::{Error, Result};

impl Image {
    /// Check whether two images have identical dimensions and pixels.
    pub fn equals(&self, other: &Image) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Count the pixels that differ between two images of the same size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn count_pixel_diffs(&self, other: &Image) -> Result<u64> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .filter(|(a, b)| a != b)
            .count() as u64)
    }

    /// Count pixels that are not [`TRANSPARENT`].
    pub fn count_opaque(&self) -> u64 {
        self.data().iter().filter(|&&v| v != TRANSPARENT).count() as u64
    }

    /// Count pixels equal to `index`.
    pub fn count_index(&self, index: u8) -> u64 {
        self.data().iter().filter(|&&v| v == index).count() as u64
    }
}
