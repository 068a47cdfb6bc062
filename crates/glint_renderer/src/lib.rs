//! Glint Renderer - CPU ray tracing for Glint scenes.
//!
//! Whitted-style tracer with four interchangeable radiance estimators,
//! rendered bucket by bucket on the rayon thread pool.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::scenes;
//! use glint_renderer::{render, RenderConfig, TracerKind};
//!
//! let scene = scenes::cornell_box();
//! let config = RenderConfig { tracer: TracerKind::Completion, ..Default::default() };
//! let image = render(&scene, &config)?;
//! image.save_png("cornell.png")?;
//! ```

mod bucket;
mod error;
mod renderer;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use error::{RenderError, RenderResult};
pub use renderer::{
    color_to_rgba, linear_to_gamma, render, render_pixel, CameraConfig, ImageBuffer, RenderConfig,
};
pub use tracer::{
    ChallengePathTracer, CompletionPathTracer, CorePathTracer, PathTracer, SimplePathTracer,
    TracerKind, BACKGROUND,
};

/// Re-export common types used alongside the renderer
pub use glint_core::Color;
pub use glint_math::{Camera, Ray, Vec3};
