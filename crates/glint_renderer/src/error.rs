//! Renderer errors.

use thiserror::Error;

/// Errors that can occur while setting up a render or writing its output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unknown tracer '{0}' (expected one of: simple, core, completion, challenge)")]
    UnknownTracer(String),

    #[error("Cannot render an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
