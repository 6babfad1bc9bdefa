//! Error types for pixspin-transform

use thiserror::Error;

/// Errors that can occur during scaling and rotation
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixspin_core::Error),

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(u32),

    /// Angle is NaN or infinite
    #[error("invalid rotation angle: {0}")]
    InvalidAngle(f64),

    /// Sample source is not the expected upscaled size
    #[error("sample source must be {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ScaledSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
