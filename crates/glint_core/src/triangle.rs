//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then keeps the hit only if it lies
//! on the inner side of all three edges.

use glint_math::{Ray, Vec2, Vec3};

use crate::intersection::facing_against;
use crate::{RayIntersection, Shape};

/// Below this |d·N| the ray counts as parallel to the triangle.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Winding only affects the sign of the stored face normal; hits are
    /// reported from both sides.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Unnormalized face normal, (v1 - v0) x (v2 - v0).
    pub fn face_normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(self.v2 - self.v0)
    }

    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }
}

impl Shape for Triangle {
    fn intersect<'a>(&self, ray: &Ray) -> RayIntersection<'a> {
        let n = self.face_normal();

        let denominator = ray.direction().dot(n);
        if denominator.abs() < PARALLEL_EPSILON {
            return RayIntersection::default();
        }

        let t = (self.v0 - ray.origin()).dot(n) / denominator;
        if t < 0.0 {
            return RayIntersection::default();
        }

        let p = ray.at(t);

        // Signed doubled areas of the sub-triangles opposite each vertex
        let edge0 = n.dot((self.v1 - self.v0).cross(p - self.v0));
        let edge1 = n.dot((self.v2 - self.v1).cross(p - self.v1));
        let edge2 = n.dot((self.v0 - self.v2).cross(p - self.v2));
        if edge0 < 0.0 || edge1 < 0.0 || edge2 < 0.0 {
            return RayIntersection::default();
        }

        // Barycentric weights of v1 and v2
        let area = n.dot(n);
        let uv = Vec2::new(edge2 / area, edge0 / area);

        let normal = facing_against(n.normalize(), ray.direction());
        RayIntersection::hit(t, p, normal).with_uv(uv)
    }
}
