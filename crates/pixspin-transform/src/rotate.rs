//! Sprite rotation
//!
//! This module provides:
//! - Orthogonal rotations (90/180/270 degrees), exact pixel permutations
//! - Arbitrary angle rotation by inverse polar sampling of an upscaled copy
//! - [`rotate`], which picks between the two for a given angle
//!
//! # Conventions
//!
//! Angles are in degrees and positive angles turn clockwise on screen
//! (image `y` grows downward). Any finite angle is accepted and normalized
//! into `[0, 360)`; only the four axis-aligned results are exact.
//!
//! # Sampling
//!
//! Point-sampling a rotated low-resolution sprite directly leaves holes
//! where no source pixel lands. Instead, every destination pixel is mapped
//! back into an upscaled copy of the sprite (normally produced by
//! [`scale2x`]), which halves the gap rate and keeps the diagonal edges EPX
//! introduced. The output always has the size of the original sprite.

use crate::scale::scale2x;
use crate::{TransformError, TransformResult};
use pixspin_core::{Coordinate, Image, ImageMut, PolarVector};

/// Size ratio between the sample source and the original sprite.
pub const SAMPLE_SCALE: u32 = 2;

/// How a rotation is carried out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotatePath {
    /// Exact rotation by this many clockwise quarter turns (0-3)
    Orthogonal(u32),
    /// Inverse polar sampling at this normalized angle in degrees
    Sampled(f64),
}

/// Normalize an angle in degrees into `[0, 360)`.
///
/// ```
/// use pixspin_transform::normalize_degrees;
///
/// assert_eq!(normalize_degrees(450.0), 90.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// ```
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Decide how a rotation by `degrees` is carried out.
///
/// # Errors
///
/// Returns [`TransformError::InvalidAngle`] if `degrees` is not finite.
pub fn select_rotate_path(degrees: f64) -> TransformResult<RotatePath> {
    if !degrees.is_finite() {
        return Err(TransformError::InvalidAngle(degrees));
    }
    let normalized = normalize_degrees(degrees);
    if normalized % 90.0 == 0.0 {
        Ok(RotatePath::Orthogonal((normalized / 90.0) as u32))
    } else {
        Ok(RotatePath::Sampled(normalized))
    }
}

/// Rotate an image by 90-degree increments
///
/// # Arguments
/// * `image` - Input image
/// * `quads` - Number of 90-degree clockwise rotations (taken modulo 4)
pub fn rotate_orth(image: &Image, quads: u32) -> TransformResult<Image> {
    match quads % 4 {
        0 => Ok(image.deep_clone()),
        1 => rotate_90(image, true),
        2 => rotate_180(image),
        3 => rotate_90(image, false),
        _ => unreachable!(),
    }
}

/// Rotate an image 90 degrees
///
/// The output has width and height swapped.
///
/// # Arguments
/// * `image` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(image: &Image, clockwise: bool) -> TransformResult<Image> {
    let (w, h) = image.dimensions();
    let mut out = ImageMut::new(h, w)?;

    for y in 0..h {
        for x in 0..w {
            let val = image.get_pixel_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            out.set_pixel_unchecked(nx, ny, val);
        }
    }

    Ok(out.into())
}

/// Rotate an image 180 degrees
pub fn rotate_180(image: &Image) -> TransformResult<Image> {
    let (w, h) = image.dimensions();
    let mut out = ImageMut::new(w, h)?;

    for y in 0..h {
        for x in 0..w {
            let val = image.get_pixel_unchecked(x, y);
            out.set_pixel_unchecked(w - 1 - x, h - 1 - y, val);
        }
    }

    Ok(out.into())
}

fn check_sample_source(original: &Image, scaled: &Image) -> TransformResult<()> {
    let (w, h) = original.dimensions();
    let expected = (w * SAMPLE_SCALE, h * SAMPLE_SCALE);
    if scaled.dimensions() != expected {
        return Err(TransformError::ScaledSizeMismatch {
            expected,
            actual: scaled.dimensions(),
        });
    }
    Ok(())
}

/// Round half up, like the host's `Math.round`.
#[inline]
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Rotate by inverse polar sampling of an upscaled sample source
///
/// For every destination pixel the offset from the image center (integer
/// half-size) is converted to polar form, turned back by the rotation
/// angle, doubled and re-centered on `scaled`. The pixel found there is
/// copied; destinations that map outside `scaled` stay transparent.
///
/// This path is used for every angle, including multiples of 90 degrees.
/// Use [`rotate`] to get the exact orthogonal results at those angles.
///
/// # Arguments
/// * `original` - Sprite image, determines the output size
/// * `scaled` - Sample source, exactly [`SAMPLE_SCALE`] times the size of `original`
/// * `degrees` - Clockwise rotation angle
///
/// # Errors
///
/// Returns [`TransformError::ScaledSizeMismatch`] if `scaled` has the wrong
/// size and [`TransformError::InvalidAngle`] if `degrees` is not finite.
pub fn rotate_sampled(original: &Image, scaled: &Image, degrees: f64) -> TransformResult<Image> {
    if !degrees.is_finite() {
        return Err(TransformError::InvalidAngle(degrees));
    }
    check_sample_source(original, scaled)?;

    let (w, h) = original.dimensions();
    let (sw, sh) = (i64::from(scaled.width()), i64::from(scaled.height()));
    let radians = normalize_degrees(degrees).to_radians();
    let factor = f64::from(SAMPLE_SCALE);

    let center = Coordinate::new((w / 2) as i32, (h / 2) as i32);
    let scaled_cx = f64::from(center.x()) * factor;
    let scaled_cy = f64::from(center.y()) * factor;

    let mut out = ImageMut::new(w, h)?;
    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = Coordinate::new(x as i32, y as i32).offset_from(center);
            let src = PolarVector::from_offset(dx, dy)
                .rotated(radians)
                .scaled(factor);
            let (ox, oy) = src.to_offset();

            let sx = round_half_up(scaled_cx + ox);
            let sy = round_half_up(scaled_cy + oy);
            if sx >= 0 && sx < sw && sy >= 0 && sy < sh {
                let val = scaled.get_pixel_unchecked(sx as u32, sy as u32);
                out.set_pixel_unchecked(x, y, val);
            }
        }
    }

    Ok(out.into())
}

/// Rotate a sprite to an absolute angle
///
/// The angle is normalized into `[0, 360)`. At 0, 90, 180 and 270 degrees
/// the result is an exact copy, quarter turn or half turn of `original`
/// (quarter turns swap width and height). Every other angle goes through
/// [`rotate_sampled`] and keeps the original size.
///
/// # Arguments
/// * `original` - Sprite image at rotation 0
/// * `scaled` - Sample source for [`rotate_sampled`], usually `scale2x(original)`
/// * `degrees` - Clockwise rotation angle
pub fn rotate(original: &Image, scaled: &Image, degrees: f64) -> TransformResult<Image> {
    check_sample_source(original, scaled)?;
    match select_rotate_path(degrees)? {
        RotatePath::Orthogonal(quads) => rotate_orth(original, quads),
        RotatePath::Sampled(normalized) => rotate_sampled(original, scaled, normalized),
    }
}

/// Rotate an image, building the [`scale2x`] sample source on the fly
///
/// Convenient for one-off rotations. Callers rotating the same sprite
/// repeatedly should keep the upscaled copy and call [`rotate`].
pub fn rotate_image(image: &Image, degrees: f64) -> TransformResult<Image> {
    if let RotatePath::Orthogonal(quads) = select_rotate_path(degrees)? {
        return rotate_orth(image, quads);
    }
    let scaled = scale2x(image)?;
    rotate(image, &scaled, degrees)
}
