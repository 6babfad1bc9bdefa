//! pixspin-io - Palette PNG input/output for sprites
//!
//! The rotation engine itself never touches files; this crate exists so
//! sprites and their rotated frames can be loaded from and dumped to
//! ordinary PNG files.

mod error;
pub mod pngio;

pub use error::{IoError, IoResult};
pub use pngio::{read_png, read_png_with_palette, write_png};

use pixspin_core::{Image, Palette};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a sprite image from a PNG file.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a sprite image to a PNG file.
pub fn write_image<P: AsRef<Path>>(path: P, image: &Image, palette: &Palette) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(image, palette, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_roundtrip() {
        let dir = std::env::temp_dir().join(format!("pixspin-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sprite.png");

        let image = Image::from_art("7 .\n. 7").unwrap();
        write_image(&path, &image, &Palette::arcade()).unwrap();
        let decoded = read_image(&path).unwrap();
        assert!(decoded.equals(&image));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_image("/nonexistent/pixspin/sprite.png"),
            Err(IoError::Io(_))
        ));
    }
}
