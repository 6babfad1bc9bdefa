//! Palette - Color table for indexed sprites
//!
//! Sprite images only store indices; a `Palette` maps each of the 16
//! indices to an RGB color when the image has to leave the engine (for
//! example when it is written to a PNG). Entry [`TRANSPARENT`] is never
//! drawn by the host, whatever color it holds.
//!
//! [`TRANSPARENT`]: crate::TRANSPARENT

use crate::error::{Error, Result};
use crate::image::MAX_INDEX;

/// Number of entries in a palette.
pub const PALETTE_SIZE: usize = MAX_INDEX as usize + 1;

/// RGB color entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Rgb {
    /// Create a new color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from a `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

const ARCADE: [u32; PALETTE_SIZE] = [
    0x000000, 0xffffff, 0xff2121, 0xff93c4, 0xff8135, 0xfff609, 0x249ca3, 0x78dc52, 0x003fad,
    0x87f2ff, 0x8e2ec4, 0xa4839f, 0x5c406c, 0xe5cdc4, 0x91463d, 0x000000,
];

/// 16-entry color table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::arcade()
    }
}

impl Palette {
    /// The default 16-color palette of the arcade host.
    pub fn arcade() -> Self {
        Self {
            colors: ARCADE.map(Rgb::from_hex),
        }
    }

    /// Palette with every entry black.
    pub fn black() -> Self {
        Self {
            colors: [Rgb::default(); PALETTE_SIZE],
        }
    }

    /// Build a palette from packed RGB triples.
    ///
    /// Missing trailing entries are left black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPaletteIndex`] if there are more than
    /// [`PALETTE_SIZE`] triples.
    pub fn from_rgb_bytes(bytes: &[u8]) -> Result<Self> {
        let count = bytes.len() / 3;
        if count > PALETTE_SIZE {
            return Err(Error::InvalidPaletteIndex(count as u32 - 1));
        }
        let mut palette = Self::black();
        for (slot, chunk) in palette.colors.iter_mut().zip(bytes.chunks_exact(3)) {
            *slot = Rgb::new(chunk[0], chunk[1], chunk[2]);
        }
        Ok(palette)
    }

    /// Get the color for `index`.
    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.colors.get(index as usize).copied()
    }

    /// Replace the color for `index`.
    pub fn set(&mut self, index: u8, color: Rgb) -> Result<()> {
        let slot = self
            .colors
            .get_mut(index as usize)
            .ok_or(Error::InvalidPaletteIndex(index as u32))?;
        *slot = color;
        Ok(())
    }

    /// All colors in index order.
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// Packed RGB triples in index order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors
            .iter()
            .flat_map(|c| [c.red, c.green, c.blue])
            .collect()
    }
}
