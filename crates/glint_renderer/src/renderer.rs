//! Frame rendering: configuration, per-pixel sampling and the image buffer.
//!
//! Tracing is done per bucket in parallel; each pixel averages one or more
//! camera rays through the selected `PathTracer`.

use std::path::Path;
use std::time::Instant;

use glint_core::Scene;
use glint_math::{Camera, Vec2, Vec3};
use rand::{Rng, RngCore};
use rayon::prelude::*;
use serde::Deserialize;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Color, PathTracer, RenderError, RenderResult, TracerKind};

/// Camera placement. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Rotation about world +Y
    pub yaw: f32,
    /// Rotation about world +X
    pub pitch: f32,
    /// Vertical field of view
    pub fov_y: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: 45.0,
        }
    }
}

impl CameraConfig {
    /// Build a camera for an image of the given size.
    pub fn build(&self, width: u32, height: u32) -> Camera {
        let image_size = Vec2::new(width as f32, height as f32);
        let mut camera = Camera::new(image_size, self.fov_y.to_radians());
        camera.set_position_orientation(
            self.position,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
        );
        camera
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel; more than one jitters inside the pixel
    pub samples_per_pixel: u32,
    /// Maximum recursion depth handed to the tracer
    pub max_depth: u32,
    /// Which radiance estimator to use
    pub tracer: TracerKind,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Seed for sub-pixel jitter
    pub seed: u64,
    pub camera: CameraConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            samples_per_pixel: 1,
            max_depth: 5,
            tracer: TracerKind::default(),
            bucket_size: DEFAULT_BUCKET_SIZE,
            seed: 0,
            camera: CameraConfig::default(),
        }
    }
}

/// Image-space position of a point inside pixel (x, y).
///
/// Image rows grow downward, camera pixel space grows upward, so rows are
/// flipped here. `offset` is in [0, 1)^2 with (0.5, 0.5) the pixel center.
fn pixel_position(camera: &Camera, x: u32, y: u32, offset: Vec2) -> Vec2 {
    let height = camera.image_size().y;
    Vec2::new(x as f32 + offset.x, height - (y as f32 + offset.y))
}

/// Render a single pixel.
///
/// One sample goes through the pixel center; more samples are jittered
/// uniformly over the pixel and averaged.
pub fn render_pixel(
    camera: &Camera,
    tracer: &dyn PathTracer,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if config.samples_per_pixel <= 1 {
        let ray = camera.generate_ray(pixel_position(camera, x, y, Vec2::splat(0.5)));
        return tracer.sample_ray(&ray, config.max_depth);
    }

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let offset = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>());
        let ray = camera.generate_ray(pixel_position(camera, x, y, offset));
        pixel_color += tracer.sample_ray(&ray, config.max_depth);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-encoded 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let encode = |c: f32| (255.0 * linear_to_gamma(c).clamp(0.0, 1.0)) as u8;
    [encode(color.x), encode(color.y), encode(color.z), 255]
}

/// Linear color image, row-major with row 0 at the top.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Convert to gamma-encoded RGBA pixels.
    pub fn to_rgba(&self) -> Vec<[u8; 4]> {
        self.pixels.iter().map(|&color| color_to_rgba(color)).collect()
    }

    /// Encode as PNG. The format follows the file extension.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let rgba = self.to_rgba();
        image::save_buffer(
            path,
            bytemuck::cast_slice(&rgba),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render the scene to an image buffer.
///
/// Buckets are traced in parallel on the rayon thread pool.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::EmptyImage {
            width: config.width,
            height: config.height,
        });
    }
    if config.samples_per_pixel == 0 {
        log::warn!("samples_per_pixel is 0, tracing one sample per pixel");
    }

    let camera = config.camera.build(config.width, config.height);
    let tracer = config.tracer.create(scene);
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);

    log::info!(
        "Rendering {}x{} with the {} tracer: {} buckets, {} spp, depth {}",
        config.width,
        config.height,
        config.tracer,
        buckets.len(),
        config.samples_per_pixel.max(1),
        config.max_depth
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, &camera, tracer.as_ref(), config);
            log::debug!(
                "Bucket {} done ({}x{} at {},{})",
                bucket.index,
                bucket.width,
                bucket.height,
                bucket.x,
                bucket.y
            );
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
