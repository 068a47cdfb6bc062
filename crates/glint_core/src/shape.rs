//! Shape trait for ray-primitive intersection.

use std::fmt;

use glint_math::Ray;

use crate::RayIntersection;

/// Trait for geometric primitives that can be hit by rays.
///
/// Implementations only describe geometry. The returned record never
/// carries a material; `SceneObject` attaches one.
pub trait Shape: Send + Sync + fmt::Debug {
    /// Intersect the ray with this shape.
    ///
    /// Returns an invalid record when there is no hit at `t >= 0`.
    fn intersect<'a>(&self, ray: &Ray) -> RayIntersection<'a>;
}
