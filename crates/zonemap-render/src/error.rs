//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while preparing drawing resources.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to read or decode an image.
    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// Raw pixel data does not match the declared dimensions.
    #[error("invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Zero width or height.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
