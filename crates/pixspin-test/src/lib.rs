//! pixspin-test - Regression test framework for pixspin
//!
//! A small regression harness:
//! checks are recorded instead of panicking, and a final
//! [`RegParams::cleanup`] reports every failure at once.
//!
//! # Usage
//!
//! ```ignore
//! use pixspin_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("rotate");
//! let turtle = load_test_image("turtle").unwrap();
//! rp.compare_values(16.0, turtle.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to also write checked images as PNGs

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixspin_core::{Image, ImageMut};

/// The turtle sprite from the turtle-graphics demo.
pub const TURTLE_ART: &str = "
    . . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . . . .
    . . . . . . e e . . 7 7 7 . . .
    . . . . . e e e e . 7 7 f 7 . .
    . . . . e e e d e e 7 7 7 7 . .
    . . . . e d e e d e 7 7 7 . . .
    . . . 7 e e e e e e . . . . . .
    . . . . 7 7 7 7 7 7 . . . . . .
    . . . . 7 7 . . 7 7 . . . . . .
    . . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . . . .
";

/// A non-square arrow pointing right.
pub const ARROW_ART: &str = "
    . . . . 2 . . .
    . . . . 2 2 . .
    2 2 2 2 2 2 2 .
    . . . . 2 2 . .
    . . . . 2 . . .
";

/// A filled diamond with diagonal silhouette edges.
pub const DIAMOND_ART: &str = "
    . . . 5 . . .
    . . 5 5 5 . .
    . 5 5 5 5 5 .
    5 5 5 5 5 5 5
    . 5 5 5 5 5 .
    . . 5 5 5 . .
    . . . 5 . . .
";

/// Load a built-in test image by name
///
/// Known names: `turtle`, `arrow`, `diamond`.
pub fn load_test_image(name: &str) -> TestResult<Image> {
    let art = match name {
        "turtle" => TURTLE_ART,
        "arrow" => ARROW_ART,
        "diamond" => DIAMOND_ART,
        _ => return Err(TestError::UnknownImage(name.to_string())),
    };
    Image::from_art(art).map_err(|e| TestError::ImageBuild {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Image filled with a single palette index
pub fn uniform_image(width: u32, height: u32, index: u8) -> TestResult<Image> {
    let mut image = ImageMut::new(width, height).map_err(|e| build_error("uniform", e))?;
    image.fill(index).map_err(|e| build_error("uniform", e))?;
    Ok(image.into())
}

/// Checkerboard of two palette indices, `a` at the top-left corner
pub fn checkerboard_image(width: u32, height: u32, a: u8, b: u8) -> TestResult<Image> {
    let mut image = ImageMut::new(width, height).map_err(|e| build_error("checkerboard", e))?;
    for y in 0..height {
        for x in 0..width {
            let val = if (x + y) % 2 == 0 { a } else { b };
            image
                .set_pixel(x, y, val)
                .map_err(|e| build_error("checkerboard", e))?;
        }
    }
    Ok(image.into())
}

/// Image whose every pixel is distinct from its 4-neighbors
///
/// Pixel `(x, y)` holds `1 + (x + 3 * y) % 15`, so no index is transparent.
pub fn distinct_image(width: u32, height: u32) -> TestResult<Image> {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| 1 + ((x + 3 * y) % 15) as u8))
        .collect();
    Image::from_indices(width, height, data).map_err(|e| build_error("distinct", e))
}

fn build_error(name: &str, e: pixspin_core::Error) -> TestError {
    TestError::ImageBuild {
        name: name.to_string(),
        message: e.to_string(),
    }
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixspin-test is at crates/pixspin-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_images_parse() {
        let turtle = load_test_image("turtle").unwrap();
        assert_eq!(turtle.dimensions(), (16, 16));
        assert_eq!(turtle.get_pixel(12, 6), Some(15));

        let arrow = load_test_image("arrow").unwrap();
        assert_eq!(arrow.dimensions(), (8, 5));

        let diamond = load_test_image("diamond").unwrap();
        assert_eq!(diamond.count_opaque(), 25);

        assert!(load_test_image("missing").is_err());
    }

    #[test]
    fn test_generated_images() {
        let u = uniform_image(3, 2, 4).unwrap();
        assert_eq!(u.count_index(4), 6);

        let c = checkerboard_image(2, 2, 1, 2).unwrap();
        assert_eq!(c.data(), &[1, 2, 2, 1]);

        let d = distinct_image(4, 4).unwrap();
        assert_eq!(d.count_opaque(), 16);
        for y in 0..4 {
            for x in 0..3 {
                assert_ne!(d.get_pixel(x, y), d.get_pixel(x + 1, y));
            }
        }
    }
}
