//! Infinite plane and disk primitives.

use glint_math::{Ray, Vec3};

use crate::intersection::facing_against;
use crate::{RayIntersection, Shape};

/// Below this |n·d| the hit distance is not computed.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Infinite plane through `position` facing `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    position: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. The normal does not need to be unit length.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Shape for Plane {
    fn intersect<'a>(&self, ray: &Ray) -> RayIntersection<'a> {
        let denominator = self.normal.dot(ray.direction());
        if denominator == 0.0 {
            return RayIntersection::default();
        }

        // Near-grazing rays keep the sentinel and fail the t >= 0 check
        let mut t = -1.0;
        if denominator.abs() > PARALLEL_EPSILON {
            t = (self.position - ray.origin()).dot(self.normal) / denominator;
        }
        if t.is_nan() || t < 0.0 {
            return RayIntersection::default();
        }

        let normal = facing_against(self.normal.normalize(), ray.direction());
        RayIntersection::hit(t, ray.at(t), normal)
    }
}

/// Flat disk: a plane clipped to `radius` around `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    plane: Plane,
    radius: f32,
}

impl Disk {
    /// Create a new disk. The normal does not need to be unit length.
    pub fn new(position: Vec3, normal: Vec3, radius: f32) -> Self {
        Self {
            plane: Plane::new(position, normal),
            radius,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.plane.position
    }

    pub fn normal(&self) -> Vec3 {
        self.plane.normal
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Disk {
    fn intersect<'a>(&self, ray: &Ray) -> RayIntersection<'a> {
        let hit = self.plane.intersect(ray);
        if !hit.valid || hit.position.distance(self.plane.position) >= self.radius {
            return RayIntersection::default();
        }
        hit
    }
}
