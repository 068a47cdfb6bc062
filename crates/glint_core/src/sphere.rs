//! Sphere primitive.

use std::f32::consts::PI;

use glint_math::{Ray, Vec2, Vec3};

use crate::{RayIntersection, Shape};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn sphere_uv(p: Vec3) -> Vec2 {
        // theta: angle down from +Y
        // phi: angle around Y axis from +X
        let theta = (-p.y).clamp(-1.0, 1.0).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        Vec2::new(phi / (2.0 * PI), theta / PI)
    }

    /// Both roots of `a t^2 + b t + c = 0`, smallest first.
    ///
    /// Uses the `q` form of the quadratic formula so the subtraction of two
    /// nearly equal values never happens.
    fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        if discriminant == 0.0 {
            let t = -0.5 * b / a;
            return Some((t, t));
        }

        let sqrtd = discriminant.sqrt();
        let q = if b > 0.0 {
            -0.5 * (b + sqrtd)
        } else {
            -0.5 * (b - sqrtd)
        };
        let (t0, t1) = (q / a, c / q);
        Some(if t0 > t1 { (t1, t0) } else { (t0, t1) })
    }
}

impl Shape for Sphere {
    fn intersect<'a>(&self, ray: &Ray) -> RayIntersection<'a> {
        let l = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(l);
        let c = l.dot(l) - self.radius * self.radius;

        if a.is_nan() || b.is_nan() || c.is_nan() {
            return RayIntersection::default();
        }

        let Some((t0, t1)) = Self::solve_quadratic(a, b, c) else {
            return RayIntersection::default();
        };

        // Inside the sphere the near root is behind us
        let t = if t0 < 0.0 { t1 } else { t0 };
        if t < 0.0 {
            return RayIntersection::default();
        }

        let position = ray.at(t);
        let normal = (position - self.center).normalize();
        RayIntersection::hit(t, position, normal).with_uv(Self::sphere_uv(normal))
    }
}
