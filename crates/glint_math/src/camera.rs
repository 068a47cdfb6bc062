use glam::{Mat3, Vec2, Vec3};

use crate::Ray;

/// Pinhole camera that turns pixel coordinates into world-space rays.
///
/// Orientation is given as yaw (about world +Y) and pitch (about world +X).
/// The rotation matrix is derived from them on every update and is never
/// set directly.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    rotation: Mat3,
    /// Vertical field of view in radians
    fov_y: f32,
    image_size: Vec2,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    pub fn new(image_size: Vec2, fov_y: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            rotation: Mat3::IDENTITY,
            fov_y,
            image_size,
        }
    }

    /// Move and orient the camera. Angles are in radians.
    pub fn set_position_orientation(&mut self, position: Vec3, yaw: f32, pitch: f32) {
        self.position = position;
        self.yaw = yaw;
        self.pitch = pitch;
        self.rotation = Mat3::from_rotation_y(yaw) * Mat3::from_rotation_x(pitch);
    }

    /// Update the image size (e.g., on output resize)
    pub fn set_image_size(&mut self, image_size: Vec2) {
        self.image_size = image_size;
    }

    /// Update the vertical field of view (radians)
    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn rotation(&self) -> Mat3 {
        self.rotation
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn image_size(&self) -> Vec2 {
        self.image_size
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.image_size.x / self.image_size.y
    }

    /// Generate the world-space ray through an image-space pixel.
    ///
    /// `pixel` is expected in `[0, image_size]` with y growing upward.
    /// Values outside that range extrapolate past the frustum edges.
    pub fn generate_ray(&self, pixel: Vec2) -> Ray {
        // Horizontal fov scales linearly with the aspect ratio
        let fov_x = self.aspect() * self.fov_y;
        let view_height = (self.fov_y / 2.0).tan();
        let view_width = (fov_x / 2.0).tan();

        let ndc = pixel * 2.0 / self.image_size - Vec2::ONE;
        let view_dir = Vec3::new(ndc.x * view_width, ndc.y * view_height, -1.0).normalize();

        Ray::new(self.position, self.rotation * view_dir)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::new(800.0, 600.0), 45.0_f32.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(Vec2::new(160.0, 90.0), 1.0);

        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.rotation(), Mat3::IDENTITY);
        assert_eq!(camera.aspect(), 160.0 / 90.0);
    }

    #[test]
    fn test_center_pixel_looks_forward() {
        let camera = Camera::new(Vec2::new(100.0, 100.0), FRAC_PI_2);

        let ray = camera.generate_ray(Vec2::new(50.0, 50.0));
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!(approx(ray.direction(), Vec3::NEG_Z));
    }

    #[test]
    fn test_corner_pixel_spans_fov() {
        // 90 degree fov on a square image: corners sit at 45 degrees on both axes
        let camera = Camera::new(Vec2::new(100.0, 100.0), FRAC_PI_2);

        let ray = camera.generate_ray(Vec2::new(100.0, 100.0));
        assert!(approx(ray.direction(), Vec3::new(1.0, 1.0, -1.0).normalize()));

        let ray = camera.generate_ray(Vec2::ZERO);
        assert!(approx(ray.direction(), Vec3::new(-1.0, -1.0, -1.0).normalize()));
    }

    #[test]
    fn test_pixel_outside_image_extrapolates() {
        let camera = Camera::new(Vec2::new(100.0, 100.0), FRAC_PI_2);

        let ray = camera.generate_ray(Vec2::new(150.0, 50.0));
        let dir = ray.direction();
        // Past the right edge: more than 45 degrees off-axis
        assert!(dir.x > -dir.z);
        assert!((dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_yaw_turns_about_up_axis() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0), FRAC_PI_2);
        camera.set_position_orientation(Vec3::new(1.0, 2.0, 3.0), FRAC_PI_2, 0.0);

        let ray = camera.generate_ray(Vec2::new(50.0, 50.0));
        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert!(approx(ray.direction(), Vec3::NEG_X));
    }

    #[test]
    fn test_pitch_tilts_up() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0), FRAC_PI_2);
        camera.set_position_orientation(Vec3::ZERO, 0.0, FRAC_PI_2);

        let ray = camera.generate_ray(Vec2::new(50.0, 50.0));
        assert!(approx(ray.direction(), Vec3::Y));
    }

    #[test]
    fn test_yaw_is_applied_outermost() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0), FRAC_PI_2);
        camera.set_position_orientation(Vec3::ZERO, FRAC_PI_2, FRAC_PI_4);

        // Pitch up first, then swing the tilted view around Y
        let expected = Vec3::new(-FRAC_PI_4.cos(), FRAC_PI_4.sin(), 0.0);
        let ray = camera.generate_ray(Vec2::new(50.0, 50.0));
        assert!(approx(ray.direction(), expected));
    }

    #[test]
    fn test_rotation_tracks_last_orientation() {
        let mut camera = Camera::default();
        camera.set_position_orientation(Vec3::ZERO, 1.0, 0.5);
        camera.set_position_orientation(Vec3::ZERO, -0.3, 0.2);

        let expected = Mat3::from_rotation_y(-0.3) * Mat3::from_rotation_x(0.2);
        assert!(camera.rotation().abs_diff_eq(expected, 1e-6));
        assert_eq!(camera.yaw(), -0.3);
        assert_eq!(camera.pitch(), 0.2);
    }
}
