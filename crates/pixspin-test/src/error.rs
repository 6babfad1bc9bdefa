//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Unknown built-in fixture
    #[error("unknown test image '{0}'")]
    UnknownImage(String),

    /// A built-in fixture failed to parse
    #[error("failed to build test image '{name}': {message}")]
    ImageBuild { name: String, message: String },

    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
