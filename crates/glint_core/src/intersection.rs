//! Result of a ray-shape intersection test.

use glint_math::{Vec2, Vec3};

use crate::Material;

/// Record of a ray-shape intersection.
///
/// A default record is invalid and sits at infinite distance, so it loses
/// every "closest hit" comparison until a real hit replaces it.
#[derive(Debug, Clone, Copy)]
pub struct RayIntersection<'a> {
    /// Whether the ray actually hit something in front of its origin
    pub valid: bool,
    /// Parameter t along the ray where the intersection occurs
    pub distance: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Surface parametrization, shape dependent
    pub uv: Vec2,
    /// Material of the object that was hit, filled in by the scene
    pub material: Option<&'a Material>,
}

impl<'a> Default for RayIntersection<'a> {
    fn default() -> Self {
        Self {
            valid: false,
            distance: f32::INFINITY,
            position: Vec3::ZERO,
            normal: Vec3::ZERO,
            uv: Vec2::ZERO,
            material: None,
        }
    }
}

impl<'a> RayIntersection<'a> {
    /// A valid hit without material or uv.
    pub fn hit(distance: f32, position: Vec3, normal: Vec3) -> Self {
        Self {
            valid: true,
            distance,
            position,
            normal,
            ..Default::default()
        }
    }

    /// Set the surface parametrization.
    pub fn with_uv(mut self, uv: Vec2) -> Self {
        self.uv = uv;
        self
    }

    /// True if this record is a valid hit closer than `other`.
    #[inline]
    pub fn is_closer_than(&self, other: &RayIntersection) -> bool {
        self.valid && self.distance < other.distance
    }
}

/// Flip `normal` so it points against `direction`.
#[inline]
pub(crate) fn facing_against(normal: Vec3, direction: Vec3) -> Vec3 {
    if normal.dot(direction) > 0.0 {
        -normal
    } else {
        normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid_at_infinity() {
        let rec = RayIntersection::default();
        assert!(!rec.valid);
        assert_eq!(rec.distance, f32::INFINITY);
        assert!(rec.material.is_none());
    }

    #[test]
    fn test_closest_comparison() {
        let miss = RayIntersection::default();
        let near = RayIntersection::hit(1.0, Vec3::ZERO, Vec3::Y);
        let far = RayIntersection::hit(5.0, Vec3::ZERO, Vec3::Y);

        assert!(near.is_closer_than(&miss));
        assert!(near.is_closer_than(&far));
        assert!(!far.is_closer_than(&near));
        assert!(!miss.is_closer_than(&far));
    }

    #[test]
    fn test_facing_against() {
        assert_eq!(facing_against(Vec3::Y, Vec3::NEG_Y), Vec3::Y);
        assert_eq!(facing_against(Vec3::Y, Vec3::Y), Vec3::NEG_Y);
    }
}
