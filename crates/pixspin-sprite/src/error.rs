//! Error types for pixspin-sprite

use crate::SpriteId;
use pixspin_transform::TransformError;
use thiserror::Error;

/// Errors that can occur while tracking sprite rotation
#[derive(Debug, Error)]
pub enum SpriteError {
    /// Upscaling or rotation failed
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// The host has no sprite with this id
    #[error("unknown sprite: {0}")]
    UnknownSprite(SpriteId),
}

/// Result type for sprite operations
pub type SpriteResult<T> = Result<T, SpriteError>;
