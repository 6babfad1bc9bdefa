//! Rotation state of a single sprite

use crate::{RotationConfig, SpriteId, SpriteResult};
use pixspin_core::Image;
use pixspin_transform::{TransformError, rotate, select_rotate_path};
use tracing::trace;

/// Cached images and current angle of one rotating sprite
///
/// The original image is the sprite's image at the moment tracking began
/// and the sample source is built from it once. Neither follows later
/// changes to the sprite; every frame is rendered from this snapshot.
#[derive(Debug, Clone)]
pub struct RotationState {
    sprite_id: SpriteId,
    original: Image,
    scaled: Image,
    rotation: f64,
}

impl RotationState {
    /// Start tracking `image` at rotation 0.
    pub fn new(sprite_id: SpriteId, image: Image, config: &RotationConfig) -> SpriteResult<Self> {
        let scaled = config.upscaler.upscale(&image, config.edges)?;
        Ok(Self {
            sprite_id,
            original: image,
            scaled,
            rotation: 0.0,
        })
    }

    /// Id of the tracked sprite.
    pub fn sprite_id(&self) -> SpriteId {
        self.sprite_id
    }

    /// Snapshot of the sprite image at rotation 0.
    pub fn original(&self) -> &Image {
        &self.original
    }

    /// The 2x sample source built from [`original`](Self::original).
    pub fn scaled(&self) -> &Image {
        &self.scaled
    }

    /// Current angle in degrees, exactly as last set.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Store a new angle without rendering.
    ///
    /// The raw value is kept; normalization only happens in [`render`](Self::render).
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidAngle`] if `degrees` is not finite.
    pub fn set_rotation(&mut self, degrees: f64) -> SpriteResult<()> {
        if !degrees.is_finite() {
            return Err(TransformError::InvalidAngle(degrees).into());
        }
        self.rotation = degrees;
        Ok(())
    }

    /// Render the sprite at its current angle.
    pub fn render(&self) -> SpriteResult<Image> {
        self.render_at(self.rotation)
    }

    /// Render the sprite at `degrees` without storing the angle.
    pub fn render_at(&self, degrees: f64) -> SpriteResult<Image> {
        let path = select_rotate_path(degrees)?;
        trace!(
            "RotationState::render_at: {} at {} degrees via {:?}",
            self.sprite_id, degrees, path
        );
        Ok(rotate(&self.original, &self.scaled, degrees)?)
    }
}
