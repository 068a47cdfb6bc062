//! Axis-aligned box primitive.

use glint_math::{Interval, Ray, Vec2, Vec3};

use crate::{RayIntersection, Shape};

/// Axis-aligned box given by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    center: Vec3,
    half_size: Vec3,
}

impl Aabb {
    /// Create a new box.
    pub fn new(center: Vec3, half_size: Vec3) -> Self {
        Self { center, half_size }
    }

    /// Create a cube with the same half extent on every axis.
    pub fn cube(center: Vec3, half_size: f32) -> Self {
        Self::new(center, Vec3::splat(half_size))
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn half_size(&self) -> Vec3 {
        self.half_size
    }

    /// Outward normal of the face containing `position`.
    ///
    /// Picks the axis where the hit is furthest out relative to the half
    /// extent. On edges and corners several axes tie and the normal is
    /// their normalized sum.
    fn face_normal(&self, position: Vec3) -> Vec3 {
        let offset = position - self.center;
        let scaled = (offset / self.half_size).abs();
        let dominant = scaled.max_element();
        let off_axis = scaled.cmplt(Vec3::splat(dominant));
        Vec3::select(off_axis, Vec3::ZERO, offset).normalize()
    }
}

impl Shape for Aabb {
    /// Slab test.
    ///
    /// Axis-parallel rays divide by zero; the resulting infinities exclude
    /// or include the whole axis as needed.
    fn intersect<'a>(&self, ray: &Ray) -> RayIntersection<'a> {
        let rel_origin = ray.origin() - self.center;
        let inv_dir = ray.direction().recip();

        let t_near = (-self.half_size - rel_origin) * inv_dir;
        let t_far = (self.half_size - rel_origin) * inv_dir;

        let slab = (0..3)
            .map(|axis| Interval::ordered(t_near[axis], t_far[axis]))
            .fold(Interval::UNIVERSE, |acc, axis| acc.intersect(&axis));

        if slab.is_empty() || slab.max < 0.0 {
            return RayIntersection::default();
        }

        // Starting inside the box reports the exit point
        let distance = if slab.min < 0.0 { slab.max } else { slab.min };
        let position = ray.at(distance);
        let normal = self.face_normal(position);

        let uv = if normal.x.abs() > 0.0 {
            Vec2::new(position.y, position.z)
        } else {
            Vec2::new(position.x, position.y + position.z)
        };

        RayIntersection::hit(distance, position, normal).with_uv(uv)
    }
}
