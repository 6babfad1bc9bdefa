//! pixspin Core - Basic data structures for sprite rotation
//!
//! This crate provides the fundamental data structures used throughout
//! the pixspin workspace:
//!
//! - [`Image`] / [`ImageMut`] - Indexed sprite buffer (immutable / mutable)
//! - [`Palette`] / [`Rgb`] - 16-entry color table
//! - [`Coordinate`] / [`PolarVector`] - Geometry primitives for resampling
//!
//! The image type is the whole capability set the rotation engine needs
//! from a host: create, clone, size, read a pixel and write a pixel.

pub mod error;
pub mod geometry;
pub mod image;
pub mod palette;

pub use error::{Error, Result};
pub use geometry::{Coordinate, PolarVector};
pub use image::{Image, ImageMut, MAX_INDEX, TRANSPARENT};
pub use palette::{PALETTE_SIZE, Palette, Rgb};
