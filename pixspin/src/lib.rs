//! pixspin - Pixel-art sprite rotation for Rust
//!
//! Rotates small indexed-color sprites to arbitrary angles while keeping
//! them crisp.
//!
//! # Overview
//!
//! - Indexed images with a 16-entry palette and a transparent index
//! - EPX (Scale2x/Scale3x) upscaling
//! - Exact quarter and half turns, and inverse polar sampling of a 2x
//!   upscaled copy for every other angle
//! - A per-sprite rotation registry that pushes rotated frames to a host
//! - Palette PNG input/output
//!
//! # Example
//!
//! ```
//! use pixspin::Image;
//! use pixspin::sprite::{RotationRegistry, SpriteTable};
//!
//! let mut sprites = SpriteTable::new();
//! let id = sprites.spawn(Image::from_art("
//!     . 7 .
//!     7 7 7
//! ").unwrap());
//!
//! let mut registry = RotationRegistry::new();
//! registry.change_rotation(&mut sprites, id, 45.0).unwrap();
//! assert_eq!(registry.get_rotation(id), 45.0);
//! assert_eq!(sprites.image(id).unwrap().dimensions(), (3, 2));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixspin_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixspin_io as io;
pub use pixspin_sprite as sprite;
pub use pixspin_transform as transform;
