//! Image scaling operations
//!
//! Integer-factor upscalers for pixel art:
//! - EPX / Scale2x and Scale3x: edge-preserving, smooth diagonal steps
//!   without introducing any new colors
//! - Replication: every source pixel becomes a solid block
//!
//! How the EPX rules see the pixels past the image border is selected by
//! [`EdgeMode`].

use crate::{TransformError, TransformResult};
use pixspin_core::{Error, Image, ImageMut};

/// How neighbor reads past the image border are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EdgeMode {
    /// Repeat the nearest edge pixel. A uniform image scales to pure
    /// replication.
    #[default]
    Clamp,
    /// Read [`TRANSPARENT`](pixspin_core::TRANSPARENT), like the host's
    /// off-image reads. Opaque image corners get rounded off.
    Transparent,
}

impl EdgeMode {
    #[inline]
    fn read(self, image: &Image, x: i32, y: i32) -> u8 {
        match self {
            EdgeMode::Clamp => image.sample_clamped(x, y),
            EdgeMode::Transparent => image.sample(x, y),
        }
    }
}

/// Output dimensions for an integer scale factor.
fn scaled_dimensions(image: &Image, factor: u32) -> TransformResult<(u32, u32)> {
    let (w, h) = image.dimensions();
    match (w.checked_mul(factor), h.checked_mul(factor)) {
        (Some(sw), Some(sh)) => Ok((sw, sh)),
        _ => Err(Error::InvalidDimension {
            width: w,
            height: h,
        }
        .into()),
    }
}

/// Scale2x rule for one source pixel.
///
/// Neighborhood and result layout:
///
/// ```text
///  . a .      0 1
///  c p b  ->  2 3
///  . d .
/// ```
#[inline]
fn expand_2x(p: u8, a: u8, b: u8, c: u8, d: u8) -> [u8; 4] {
    [
        if c == a && c != d && a != b { a } else { p },
        if a == b && a != c && b != d { b } else { p },
        if d == c && d != b && c != a { c } else { p },
        if b == d && b != a && d != c { d } else { p },
    ]
}

/// Scale3x rule for one source pixel.
///
/// Neighborhood and result layout:
///
/// ```text
///  a b c      0 1 2
///  d e f  ->  3 4 5
///  g h i      6 7 8
/// ```
#[allow(clippy::too_many_arguments)]
#[inline]
fn expand_3x(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8) -> [u8; 9] {
    // Only smooth where exactly one pair of opposite edges agrees.
    if b == h || d == f {
        return [e; 9];
    }
    [
        if d == b { d } else { e },
        if (d == b && e != c) || (b == f && e != a) {
            b
        } else {
            e
        },
        if b == f { f } else { e },
        if (d == b && e != g) || (d == h && e != a) {
            d
        } else {
            e
        },
        e,
        if (b == f && e != i) || (h == f && e != c) {
            f
        } else {
            e
        },
        if d == h { d } else { e },
        if (d == h && e != i) || (h == f && e != g) {
            h
        } else {
            e
        },
        if h == f { f } else { e },
    ]
}

/// Double the size of an image with the Scale2x (EPX) rules.
///
/// Each source pixel `p` becomes a 2x2 block that defaults to `p`. A corner
/// of the block takes the color of the two 4-neighbors that share it when
/// those two agree and neither of the other two neighbors does, which turns
/// stair-stepped diagonals into smooth ones while leaving solid regions and
/// straight edges untouched.
///
/// Neighbors past the border repeat the edge pixel ([`EdgeMode::Clamp`]).
/// This differs from the host, whose off-image reads return
/// [`TRANSPARENT`](pixspin_core::TRANSPARENT): an opaque pixel in an image
/// corner keeps its outer corner here but loses it there. Use
/// [`scale2x_with_edges`] with [`EdgeMode::Transparent`] to match the host.
///
/// # Examples
///
/// ```
/// use pixspin_core::Image;
/// use pixspin_transform::{EdgeMode, scale2x, scale2x_with_edges};
///
/// let image = Image::from_art("3 3\n3 3").unwrap();
/// let scaled = scale2x(&image).unwrap();
/// assert_eq!(scaled.dimensions(), (4, 4));
/// assert_eq!(scaled.count_index(3), 16);
///
/// let host = scale2x_with_edges(&image, EdgeMode::Transparent).unwrap();
/// assert_eq!(host.get_pixel(0, 0), Some(0));
/// ```
pub fn scale2x(image: &Image) -> TransformResult<Image> {
    scale2x_with_edges(image, EdgeMode::Clamp)
}

/// [`scale2x`] with an explicit border policy.
pub fn scale2x_with_edges(image: &Image, edges: EdgeMode) -> TransformResult<Image> {
    let (sw, sh) = scaled_dimensions(image, 2)?;
    let mut out = ImageMut::new(sw, sh)?;

    for y in 0..image.height() {
        let yi = y as i32;
        for x in 0..image.width() {
            let xi = x as i32;
            let block = expand_2x(
                image.get_pixel_unchecked(x, y),
                edges.read(image, xi, yi - 1),
                edges.read(image, xi + 1, yi),
                edges.read(image, xi - 1, yi),
                edges.read(image, xi, yi + 1),
            );

            let (ox, oy) = (x * 2, y * 2);
            out.set_pixel_unchecked(ox, oy, block[0]);
            out.set_pixel_unchecked(ox + 1, oy, block[1]);
            out.set_pixel_unchecked(ox, oy + 1, block[2]);
            out.set_pixel_unchecked(ox + 1, oy + 1, block[3]);
        }
    }

    Ok(out.into())
}

/// Triple the size of an image with the Scale3x rules.
///
/// The 3x3 block of each source pixel defaults to the center color. Its
/// corners follow the same agreement rule as [`scale2x`]; its edge cells
/// additionally require that the center differs from the diagonal neighbor
/// on the far side, so thin lines keep their width.
pub fn scale3x(image: &Image) -> TransformResult<Image> {
    scale3x_with_edges(image, EdgeMode::Clamp)
}

/// [`scale3x`] with an explicit border policy.
pub fn scale3x_with_edges(image: &Image, edges: EdgeMode) -> TransformResult<Image> {
    let (sw, sh) = scaled_dimensions(image, 3)?;
    let mut out = ImageMut::new(sw, sh)?;

    for y in 0..image.height() {
        let yi = y as i32;
        for x in 0..image.width() {
            let xi = x as i32;
            let block = expand_3x(
                edges.read(image, xi - 1, yi - 1),
                edges.read(image, xi, yi - 1),
                edges.read(image, xi + 1, yi - 1),
                edges.read(image, xi - 1, yi),
                image.get_pixel_unchecked(x, y),
                edges.read(image, xi + 1, yi),
                edges.read(image, xi - 1, yi + 1),
                edges.read(image, xi, yi + 1),
                edges.read(image, xi + 1, yi + 1),
            );

            let (ox, oy) = (x * 3, y * 3);
            for (k, &val) in block.iter().enumerate() {
                let k = k as u32;
                out.set_pixel_unchecked(ox + k % 3, oy + k / 3, val);
            }
        }
    }

    Ok(out.into())
}

/// Enlarge an image by an integer factor, replicating every pixel.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if `factor` is 0.
pub fn scale_by_replication(image: &Image, factor: u32) -> TransformResult<Image> {
    if factor == 0 {
        return Err(TransformError::InvalidScaleFactor(factor));
    }
    if factor == 1 {
        return Ok(image.deep_clone());
    }

    let (sw, sh) = scaled_dimensions(image, factor)?;
    let mut out = ImageMut::new(sw, sh)?;
    for y in 0..sh {
        let src_row = image.row(y / factor);
        for x in 0..sw {
            out.set_pixel_unchecked(x, y, src_row[(x / factor) as usize]);
        }
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_2x_corners() {
        // Solid neighborhood: nothing fires
        assert_eq!(expand_2x(1, 1, 1, 1, 1), [1, 1, 1, 1]);
        // Up and left agree: top-left corner takes them
        assert_eq!(expand_2x(1, 2, 3, 2, 4), [2, 1, 1, 1]);
        // Up and right agree: top-right
        assert_eq!(expand_2x(1, 2, 2, 3, 4), [1, 2, 1, 1]);
        // Down and left agree: bottom-left
        assert_eq!(expand_2x(1, 3, 4, 2, 2), [1, 1, 2, 1]);
        // Right and down agree: bottom-right
        assert_eq!(expand_2x(1, 3, 2, 4, 2), [1, 1, 1, 2]);
    }

    #[test]
    fn test_expand_2x_contested() {
        // Three neighbors agree: every corner is contested
        assert_eq!(expand_2x(1, 2, 2, 2, 3), [1, 1, 1, 1]);
        // All four agree: single pixel hole stays
        assert_eq!(expand_2x(1, 2, 2, 2, 2), [1, 1, 1, 1]);
    }

    #[test]
    fn test_expand_3x_rules() {
        assert_eq!(expand_3x(1, 1, 1, 1, 1, 1, 1, 1, 1), [1; 9]);
        // b == h blocks smoothing entirely
        assert_eq!(expand_3x(0, 2, 0, 2, 1, 3, 0, 2, 0), [1; 9]);

        // Up and left agree (b == d == 2), everything else distinct
        let block = expand_3x(4, 2, 5, 2, 1, 3, 6, 7, 8);
        assert_eq!(block[0], 2);
        // e != c (1 != 5): top edge takes b
        assert_eq!(block[1], 2);
        // e != g (1 != 6): left edge takes d
        assert_eq!(block[3], 2);
        assert_eq!(block[4], 1);
        assert_eq!(&block[5..], &[1, 1, 1, 1]);
        assert_eq!(block[2], 1);
    }

    #[test]
    fn test_expand_3x_edge_needs_far_diagonal() {
        // b == d but c == e: top edge keeps center
        let block = expand_3x(4, 2, 1, 2, 1, 3, 1, 7, 8);
        assert_eq!(block[0], 2);
        assert_eq!(block[1], 1);
        // g == e too: left edge keeps center
        assert_eq!(block[3], 1);
    }

    #[test]
    fn test_scale2x_dimensions() {
        let image = Image::new(3, 5).unwrap();
        let scaled = scale2x(&image).unwrap();
        assert_eq!(scaled.dimensions(), (6, 10));
    }

    #[test]
    fn test_scale3x_dimensions() {
        let image = Image::new(3, 5).unwrap();
        let scaled = scale3x(&image).unwrap();
        assert_eq!(scaled.dimensions(), (9, 15));
    }

    #[test]
    fn test_scale2x_single_pixel() {
        let image = Image::from_indices(1, 1, vec![5]).unwrap();
        for edges in [EdgeMode::Clamp, EdgeMode::Transparent] {
            let scaled = scale2x_with_edges(&image, edges).unwrap();
            assert_eq!(scaled.data(), &[5, 5, 5, 5]);
        }
    }

    #[test]
    fn test_scale2x_rounds_plus_into_octagon() {
        let image = Image::from_art(
            "
            . 7 .
            7 7 7
            . 7 .
            ",
        )
        .unwrap();
        let expected = Image::from_art(
            "
            . . 7 7 . .
            . 7 7 7 7 .
            7 7 7 7 7 7
            7 7 7 7 7 7
            . 7 7 7 7 .
            . . 7 7 . .
            ",
        )
        .unwrap();
        for edges in [EdgeMode::Clamp, EdgeMode::Transparent] {
            let scaled = scale2x_with_edges(&image, edges).unwrap();
            assert!(scaled.equals(&expected), "{edges:?} got:\n{}", scaled.to_art());
        }
    }

    #[test]
    fn test_edge_modes_differ_on_opaque_corners() {
        let image = Image::from_art("3 3\n3 3").unwrap();

        let clamped = scale2x(&image).unwrap();
        assert_eq!(clamped.count_index(3), 16);

        let transparent = scale2x_with_edges(&image, EdgeMode::Transparent).unwrap();
        assert_eq!(transparent.count_index(3), 12);
        assert_eq!(transparent.get_pixel(0, 0), Some(0));
        assert_eq!(transparent.get_pixel(3, 0), Some(0));
        assert_eq!(transparent.get_pixel(0, 3), Some(0));
        assert_eq!(transparent.get_pixel(3, 3), Some(0));
    }

    #[test]
    fn test_scale3x_uniform_is_replication() {
        let image = Image::from_art("4 4 4\n4 4 4").unwrap();
        let scaled = scale3x(&image).unwrap();
        assert!(scaled.equals(&scale_by_replication(&image, 3).unwrap()));
    }

    #[test]
    fn test_replication() {
        let image = Image::from_indices(2, 1, vec![1, 2]).unwrap();
        let scaled = scale_by_replication(&image, 3).unwrap();
        assert_eq!(scaled.dimensions(), (6, 3));
        assert_eq!(scaled.row(2), &[1, 1, 1, 2, 2, 2]);

        assert!(scale_by_replication(&image, 1).unwrap().equals(&image));
        assert!(matches!(
            scale_by_replication(&image, 0),
            Err(TransformError::InvalidScaleFactor(0))
        ));
    }
}
