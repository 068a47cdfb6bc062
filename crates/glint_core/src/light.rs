//! Light sources for direct illumination.

use std::f32::consts::PI;
use std::fmt;

use glint_math::{Ray, Vec3};

use crate::{Color, Scene};

/// Trait for lights that can illuminate a surface point.
pub trait Light: Send + Sync + fmt::Debug {
    /// Unit direction the light travels in when it arrives at `point`
    /// (from the light toward the point).
    fn incident_direction(&self, point: Vec3) -> Vec3;

    /// Irradiance delivered at `point`, ignoring occlusion.
    fn irradiance(&self, point: Vec3) -> Color;

    /// Whether scene geometry blocks the light from reaching `point`.
    fn occluded(&self, scene: &Scene, point: Vec3) -> bool;

    /// Constant ambient contribution, added even when occluded.
    fn ambience(&self) -> Color;
}

/// Light arriving along one direction everywhere, as from a distant sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
    irradiance: Color,
    ambience: Color,
}

impl DirectionalLight {
    /// Create a new directional light. `direction` is normalized here.
    pub fn new(direction: Vec3, irradiance: Color, ambience: Color) -> Self {
        Self {
            direction: direction.normalize(),
            irradiance,
            ambience,
        }
    }
}

impl Light for DirectionalLight {
    fn incident_direction(&self, _point: Vec3) -> Vec3 {
        self.direction
    }

    fn irradiance(&self, _point: Vec3) -> Color {
        self.irradiance
    }

    /// The light is infinitely far away, so any hit toward it blocks it.
    fn occluded(&self, scene: &Scene, point: Vec3) -> bool {
        let shadow_ray = Ray::new(point, -self.direction);
        scene.intersect(&shadow_ray).valid
    }

    fn ambience(&self) -> Color {
        self.ambience
    }
}

/// Isotropic point light with inverse-square falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Vec3,
    flux: Color,
    ambience: Color,
}

impl PointLight {
    /// Create a new point light emitting `flux` in total.
    pub fn new(position: Vec3, flux: Color, ambience: Color) -> Self {
        Self {
            position,
            flux,
            ambience,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Light for PointLight {
    fn incident_direction(&self, point: Vec3) -> Vec3 {
        (point - self.position).normalize()
    }

    /// Flux spread over a sphere of radius |point - position|.
    fn irradiance(&self, point: Vec3) -> Color {
        let distance = self.position.distance(point);
        self.flux / (4.0 * PI * distance * distance)
    }

    /// Only geometry between the point and the light counts.
    fn occluded(&self, scene: &Scene, point: Vec3) -> bool {
        let to_light = -self.incident_direction(point);
        let hit = scene.intersect(&Ray::new(point, to_light));
        hit.valid && to_light.dot(self.position - hit.position) >= 0.0
    }

    fn ambience(&self) -> Color {
        self.ambience
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Aabb, Material, Sphere};
    use std::sync::Arc;

    fn blocker_scene() -> Scene {
        // Unit box at the origin
        let mut scene = Scene::new();
        scene.add_object(Aabb::cube(Vec3::ZERO, 1.0), Arc::new(Material::default()));
        scene
    }

    #[test]
    fn test_directional_incident_is_constant() {
        let light =
            DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0), Color::splat(0.5), Color::ZERO);
        let expected = Vec3::new(-1.0, -1.0, -1.0).normalize();

        for point in [Vec3::ZERO, Vec3::new(10.0, -3.0, 7.0), Vec3::splat(-100.0)] {
            assert!((light.incident_direction(point) - expected).length() < 1e-6);
            assert_eq!(light.irradiance(point), Color::splat(0.5));
        }
    }

    #[test]
    fn test_directional_any_hit_occludes() {
        let scene = blocker_scene();
        let light = DirectionalLight::new(Vec3::NEG_Y, Color::ONE, Color::ZERO);

        // Box sits above the point, toward the light
        assert!(light.occluded(&scene, Vec3::new(0.0, -10.0, 0.0)));
        // Nothing above this one
        assert!(!light.occluded(&scene, Vec3::new(5.0, -10.0, 0.0)));
    }

    #[test]
    fn test_point_light_inverse_square() {
        let light = PointLight::new(Vec3::ZERO, Color::splat(50.0), Color::ZERO);

        let near = light.irradiance(Vec3::new(0.0, 0.0, 2.0));
        let far = light.irradiance(Vec3::new(0.0, 0.0, 4.0));
        assert!((near.x / far.x - 4.0).abs() < 1e-4);

        let expected = 50.0 / (4.0 * PI * 4.0);
        assert!((near.x - expected).abs() < 1e-5);
    }

    #[test]
    fn test_point_light_incident_direction() {
        let light = PointLight::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE, Color::ZERO);
        let dir = light.incident_direction(Vec3::ZERO);
        assert!((dir - Vec3::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn test_point_light_occluded_between() {
        let scene = blocker_scene();
        let light = PointLight::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE, Color::ZERO);

        assert!(light.occluded(&scene, Vec3::new(0.0, -5.0, 0.0)));
    }

    #[test]
    fn test_point_light_blocker_beyond_light() {
        let scene = blocker_scene();
        // Light sits between the point and the box
        let light = PointLight::new(Vec3::new(0.0, -3.0, 0.0), Color::ONE, Color::ZERO);

        assert!(!light.occluded(&scene, Vec3::new(0.0, -5.0, 0.0)));
    }

    #[test]
    fn test_point_light_empty_scene() {
        let scene = Scene::new();
        let light = PointLight::new(Vec3::Y, Color::ONE, Color::ZERO);
        assert!(!light.occluded(&scene, Vec3::ZERO));
    }

    #[test]
    fn test_ambience_ignores_occlusion() {
        let mut scene = Scene::new();
        scene.add_object(Sphere::new(Vec3::new(0.0, 2.0, 0.0), 1.0), Arc::new(Material::default()));
        let light = PointLight::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE, Color::splat(0.05));

        assert!(light.occluded(&scene, Vec3::ZERO));
        assert_eq!(light.ambience(), Color::splat(0.05));
    }
}
