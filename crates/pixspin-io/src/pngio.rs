//! PNG format support for indexed sprites
//!
//! Sprites are written as 4-bit palette PNGs with a `tRNS` chunk that
//! makes [`TRANSPARENT`] fully transparent, so rotated output can be
//! inspected in any image viewer. Reading accepts palette PNGs of any
//! bit depth whose indices fit the 16-entry palette.

use crate::{IoError, IoResult};
use pixspin_core::{Image, ImageMut, MAX_INDEX, PALETTE_SIZE, Palette, TRANSPARENT};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a palette PNG, returning the image and its palette.
///
/// Palette entries past the sixteenth are ignored.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for non-indexed PNGs and
/// [`IoError::Core`] if a pixel index exceeds [`MAX_INDEX`].
pub fn read_png_with_palette<R: BufRead + Seek>(reader: R) -> IoResult<(Image, Palette)> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if color_type != ColorType::Indexed {
        return Err(IoError::UnsupportedFormat(format!(
            "sprite PNGs must be indexed, got {:?}",
            color_type
        )));
    }
    let bits: u32 = match bit_depth {
        BitDepth::One => 1,
        BitDepth::Two => 2,
        BitDepth::Four => 4,
        BitDepth::Eight => 8,
        BitDepth::Sixteen => {
            return Err(IoError::UnsupportedFormat(
                "16-bit indexed PNG".to_string(),
            ));
        }
    };

    let palette = match info.palette.as_ref() {
        Some(bytes) => {
            let len = bytes.len().min(PALETTE_SIZE * 3);
            Palette::from_rgb_bytes(&bytes[..len])?
        }
        None => Palette::arcade(),
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let per_byte = 8 / bits;
    let mask = ((1u16 << bits) - 1) as u8;

    let mut image = ImageMut::new(width, height)?;
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let byte = data[row_start + (x / per_byte) as usize];
            let shift = 8 - bits * (x % per_byte + 1);
            let val = (byte >> shift) & mask;
            image.set_pixel(x, y, val)?;
        }
    }

    Ok((image.into(), palette))
}

/// Read a palette PNG, discarding its palette.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    read_png_with_palette(reader).map(|(image, _)| image)
}

/// Write an image as a 4-bit palette PNG.
pub fn write_png<W: Write>(image: &Image, palette: &Palette, writer: W) -> IoResult<()> {
    let (width, height) = image.dimensions();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Indexed);
    encoder.set_depth(BitDepth::Four);
    encoder.set_palette(palette.to_rgb_bytes());
    // Alpha for entry 0 only; later entries default to opaque.
    debug_assert_eq!(TRANSPARENT, 0);
    encoder.set_trns(vec![0u8]);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_row = width.div_ceil(2) as usize;
    let mut data = vec![0u8; bytes_per_row * height as usize];
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for (x, &val) in image.row(y).iter().enumerate() {
            let val = val & MAX_INDEX;
            let byte_idx = row_start + x / 2;
            if x % 2 == 0 {
                data[byte_idx] |= val << 4;
            } else {
                data[byte_idx] |= val;
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
