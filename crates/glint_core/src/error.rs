//! Errors raised while selecting or building scenes.

use thiserror::Error;

/// Errors that can occur when looking up a scene.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("Unknown scene '{0}' (expected simple, lights, materials, shapes or cornell-box)")]
    UnknownScene(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
