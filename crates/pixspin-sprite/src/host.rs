//! Sprite identity and the host boundary
//!
//! The rotation engine does not own sprites. It reads a sprite's current
//! image through [`SpriteHost::sprite_image`] once, when rotation tracking
//! starts, and hands every rendered frame back through
//! [`SpriteHost::install_image`].

use pixspin_core::Image;
use std::collections::HashMap;
use std::fmt;

/// Opaque sprite identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteId(u32);

impl SpriteId {
    /// Wrap a raw host id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw host id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SpriteId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sprite#{}", self.0)
    }
}

/// The capabilities the rotation engine needs from the sprite system
pub trait SpriteHost {
    /// The image a sprite currently displays, or `None` for an unknown id.
    fn sprite_image(&self, id: SpriteId) -> Option<Image>;

    /// Replace the image a sprite displays.
    ///
    /// Returns `false` if the host has no sprite with this id.
    fn install_image(&mut self, id: SpriteId, image: Image) -> bool;
}

/// A minimal in-memory sprite host
///
/// Ids are handed out in spawn order and never reused.
#[derive(Debug, Default)]
pub struct SpriteTable {
    sprites: HashMap<SpriteId, Image>,
    next_id: u32,
}

impl SpriteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sprite displaying `image` and return its id.
    pub fn spawn(&mut self, image: Image) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.sprites.insert(id, image);
        id
    }

    /// The image a sprite currently displays.
    pub fn image(&self, id: SpriteId) -> Option<&Image> {
        self.sprites.get(&id)
    }

    /// Remove a sprite, returning its last image.
    pub fn destroy(&mut self, id: SpriteId) -> Option<Image> {
        self.sprites.remove(&id)
    }

    /// Number of live sprites.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// True if no sprites are live.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl SpriteHost for SpriteTable {
    fn sprite_image(&self, id: SpriteId) -> Option<Image> {
        self.sprites.get(&id).cloned()
    }

    fn install_image(&mut self, id: SpriteId, image: Image) -> bool {
        match self.sprites.get_mut(&id) {
            Some(slot) => {
                *slot = image;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_id() {
        let id = SpriteId::new(7);
        assert_eq!(id.get(), 7);
        assert_eq!(SpriteId::from(7), id);
        assert_eq!(id.to_string(), "sprite#7");
    }

    #[test]
    fn test_table_spawn_and_destroy() {
        let mut table = SpriteTable::new();
        let a = table.spawn(Image::new(2, 2).unwrap());
        let b = table.spawn(Image::new(3, 1).unwrap());
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
        assert_eq!(table.image(b).unwrap().dimensions(), (3, 1));

        assert!(table.destroy(a).is_some());
        assert!(table.sprite_image(a).is_none());
        assert!(!table.install_image(a, Image::new(1, 1).unwrap()));

        // Ids are not reused after destroy
        let c = table.spawn(Image::new(1, 1).unwrap());
        assert_ne!(c, a);
    }

    #[test]
    fn test_table_install_image() {
        let mut table = SpriteTable::new();
        let id = table.spawn(Image::new(2, 2).unwrap());
        let replacement = Image::from_art("1 2 3").unwrap();
        assert!(table.install_image(id, replacement.clone()));
        assert!(table.image(id).unwrap().equals(&replacement));
    }
}
