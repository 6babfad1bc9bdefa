//! pixspin-sprite - Rotation state for host sprites
//!
//! Keeps, per sprite, the unrotated image, its 2x sample source and the
//! current angle, and pushes a freshly rotated image to the host whenever
//! the angle changes.
//!
//! # Example
//!
//! ```
//! use pixspin_core::Image;
//! use pixspin_sprite::{RotationRegistry, SpriteTable};
//!
//! let mut sprites = SpriteTable::new();
//! let id = sprites.spawn(Image::from_art("1 2\n3 4").unwrap());
//!
//! let mut registry = RotationRegistry::new();
//! registry.set_rotation(&mut sprites, id, 450.0).unwrap();
//! assert_eq!(registry.get_rotation(id), 450.0);
//! assert_eq!(sprites.image(id).unwrap().data(), &[3, 1, 4, 2]);
//! ```

mod config;
mod error;
mod host;
mod registry;
mod state;

pub use config::{RotationConfig, Upscaler};
pub use error::{SpriteError, SpriteResult};
pub use host::{SpriteHost, SpriteId, SpriteTable};
pub use registry::RotationRegistry;
pub use state::RotationState;
