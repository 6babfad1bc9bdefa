//! Sprite art literals
//!
//! Text form of an indexed image, as sprites are usually authored:
//!
//! ```text
//! . . 7 7 . .
//! . 7 e e 7 .
//! . . 7 7 . .
//! ```
//!
//! - `.` is [`TRANSPARENT`], `0`-`9` and `a`-`f` (either case) are palette indices
//! - whitespace between pixels is ignored
//! - every non-blank line is one row; all rows must have the same width

use super::{Image, ImageMut, TRANSPARENT};
use crate::error::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn parse_pixel(ch: char) -> Option<u8> {
    match ch {
        '.' => Some(TRANSPARENT),
        _ => ch.to_digit(16).map(|d| d as u8),
    }
}

fn format_pixel(val: u8) -> char {
    if val == TRANSPARENT {
        '.'
    } else {
        HEX_DIGITS[(val & 0xf) as usize] as char
    }
}

impl Image {
    /// Parse an image from a sprite art literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArt`] for unknown characters, ragged rows or
    /// a literal without any rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixspin_core::Image;
    ///
    /// let image = Image::from_art("
    ///     . 2
    ///     4 .
    /// ").unwrap();
    /// assert_eq!(image.dimensions(), (2, 2));
    /// assert_eq!(image.get_pixel(1, 0), Some(2));
    /// ```
    pub fn from_art(art: &str) -> Result<Self> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut width = 0usize;

        for (idx, line) in art.lines().enumerate() {
            let line_no = idx + 1;
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let val = parse_pixel(ch).ok_or_else(|| Error::InvalidArt {
                    line: line_no,
                    message: format!("unexpected character {ch:?}"),
                })?;
                row.push(val);
            }
            if row.is_empty() {
                continue;
            }
            if rows.is_empty() {
                width = row.len();
            } else if row.len() != width {
                return Err(Error::InvalidArt {
                    line: line_no,
                    message: format!("row has {} pixels, expected {}", row.len(), width),
                });
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(Error::InvalidArt {
                line: 0,
                message: "no pixel rows".to_string(),
            });
        }

        let height = rows.len() as u32;
        let mut image = ImageMut::new(width as u32, height)?;
        for (dst, src) in image
            .data_mut()
            .chunks_exact_mut(width)
            .zip(rows.iter())
        {
            dst.copy_from_slice(src);
        }
        Ok(image.into())
    }

    /// Render the image as a sprite art literal.
    ///
    /// Pixels are separated by single spaces and rows by newlines, with no
    /// trailing newline. [`Image::from_art`] parses the result back.
    pub fn to_art(&self) -> String {
        let mut out = String::with_capacity(self.data().len() * 2);
        for y in 0..self.height() {
            if y > 0 {
                out.push('\n');
            }
            for (x, &val) in self.row(y).iter().enumerate() {
                if x > 0 {
                    out.push(' ');
                }
                out.push(format_pixel(val));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_art() {
        let image = Image::from_art(
            "
            . . e e
            . 7 F .
            ",
        )
        .unwrap();
        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(image.row(0), &[0, 0, 14, 14]);
        assert_eq!(image.row(1), &[0, 7, 15, 0]);
    }

    #[test]
    fn test_parse_without_separators() {
        let image = Image::from_art("..12\n3456").unwrap();
        assert_eq!(image.row(1), &[3, 4, 5, 6]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Image::from_art(". .\n. . .").unwrap_err();
        assert!(matches!(err, Error::InvalidArt { line: 2, .. }));
    }

    #[test]
    fn test_bad_character_rejected() {
        let err = Image::from_art(". g").unwrap_err();
        assert!(matches!(err, Error::InvalidArt { line: 1, .. }));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Image::from_art("  \n\n").is_err());
    }

    #[test]
    fn test_to_art() {
        let image = Image::from_indices(3, 2, vec![0, 10, 1, 15, 0, 9]).unwrap();
        assert_eq!(image.to_art(), ". a 1\nf . 9");
        assert!(Image::from_art(&image.to_art()).unwrap().equals(&image));
    }
}
