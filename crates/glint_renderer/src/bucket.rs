//! Image tiling for parallel rendering.
//!
//! Each bucket is traced as one unit of work with its own seeded RNG.

use glint_math::{Camera, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::renderer::render_pixel;
use crate::{Color, PathTracer, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Center of the bucket in image space.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 * 0.5,
            self.y as f32 + self.height as f32 * 0.5,
        )
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Split an image into buckets, ordered from the center outward.
///
/// Edge buckets are clipped to the image. `index` is the render order.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let step = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(step as usize)
        .flat_map(|y| {
            (0..width)
                .step_by(step as usize)
                .map(move |x| Bucket::new(x, y, step.min(width - x), step.min(height - y), 0))
        })
        .collect();

    let image_center = Vec2::new(width as f32, height as f32) * 0.5;
    // Stable sort keeps row-major order between equidistant buckets
    buckets.sort_by(|a, b| {
        a.center()
            .distance_squared(image_center)
            .total_cmp(&b.center().distance_squared(image_center))
    });

    for (index, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = index;
    }
    buckets
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket. The jitter RNG is
/// seeded from the config seed and the bucket index, so the result does
/// not depend on which thread renders the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    tracer: &dyn PathTracer,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(bucket.index as u64));
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            let color = render_pixel(camera, tracer, global_x, global_y, config, &mut rng);
            pixels.push(color);
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}
