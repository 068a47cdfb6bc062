//! Radiance estimators.
//!
//! Four tracers of increasing completeness share the same interface:
//! - `SimplePathTracer`: grey facing-ratio shading, for checking geometry
//! - `CorePathTracer`: ambient + Lambert + Phong with shadow rays
//! - `CompletionPathTracer`: Core plus recursive mirror reflection
//! - `ChallengePathTracer`: placeholder, background only

use std::fmt;
use std::str::FromStr;

use glint_core::{Color, Material, RayIntersection, Scene};
use glint_math::{Ray, Vec3};
use serde::Deserialize;

use crate::RenderError;

/// Color returned for rays that escape the scene.
pub const BACKGROUND: Color = Color::new(0.3, 0.3, 0.4);

/// Offset along the normal for shadow ray origins.
const SHADOW_BIAS: f32 = 1e-3;

/// Offset along the mirror direction for reflected ray origins.
const REFLECTION_BIAS: f32 = 1e-4;

/// Trait for estimating the radiance arriving along a ray.
pub trait PathTracer: Send + Sync {
    /// Color seen along `ray`. `depth` bounds the number of recursive
    /// bounces; tracers that do not recurse ignore it.
    fn sample_ray(&self, ray: &Ray, depth: u32) -> Color;
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Per-term sums of the direct lighting at one hit.
#[derive(Debug, Clone, Copy, Default)]
struct DirectLighting {
    ambient: Color,
    diffuse: Color,
    specular: Color,
}

impl DirectLighting {
    /// Accumulate every light's contribution at `hit`.
    ///
    /// A light whose direction is NaN (degenerate geometry) is skipped
    /// entirely. Ambience is added even for shadowed lights.
    fn gather(scene: &Scene, ray: &Ray, hit: &RayIntersection, material: &Material) -> Self {
        let mut sums = Self::default();
        let view = (-ray.direction()).normalize();

        for light in scene.lights() {
            let to_light = (-light.incident_direction(hit.position)).normalize();
            let irradiance = light.irradiance(hit.position);

            let n_dot_l = hit.normal.dot(to_light);
            if n_dot_l.is_nan() {
                continue;
            }

            sums.ambient += light.ambience();

            // Lights behind the surface are never tested for shadows
            if n_dot_l >= 0.0 && light.occluded(scene, hit.position + hit.normal * SHADOW_BIAS) {
                continue;
            }

            // Lambert
            sums.diffuse += irradiance * material.diffuse() * n_dot_l.max(0.0);

            // Phong
            let reflection = 2.0 * n_dot_l * hit.normal - to_light;
            let r_dot_v = reflection.dot(view);
            if r_dot_v.is_nan() {
                continue;
            }
            let highlight = r_dot_v.max(0.0).powf(material.shininess());
            sums.specular += irradiance * material.specular() * highlight;
        }

        sums
    }

    fn shade(&self, material: &Material) -> Color {
        self.ambient * material.diffuse() + self.diffuse + self.specular
    }
}

/// Debug view: grey shaded by the angle between ray and normal.
pub struct SimplePathTracer<'a> {
    scene: &'a Scene,
}

impl<'a> SimplePathTracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

impl PathTracer for SimplePathTracer<'_> {
    fn sample_ray(&self, ray: &Ray, _depth: u32) -> Color {
        let hit = self.scene.intersect(ray);
        if !hit.valid {
            return BACKGROUND;
        }

        let facing = (-ray.direction()).dot(hit.normal).abs();
        let grey = Color::splat(0.5);
        (grey / 2.0).lerp(grey, facing)
    }
}

/// Direct lighting only: ambient, Lambertian diffuse and Phong specular.
pub struct CorePathTracer<'a> {
    scene: &'a Scene,
}

impl<'a> CorePathTracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

impl PathTracer for CorePathTracer<'_> {
    fn sample_ray(&self, ray: &Ray, _depth: u32) -> Color {
        let hit = self.scene.intersect(ray);
        // Scene hits carry a material exactly when they are valid
        let Some(material) = hit.material else {
            return BACKGROUND;
        };

        DirectLighting::gather(self.scene, ray, &hit, material).shade(material)
    }
}

/// Direct lighting plus recursive perfect mirror reflection.
pub struct CompletionPathTracer<'a> {
    scene: &'a Scene,
}

impl<'a> CompletionPathTracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

impl PathTracer for CompletionPathTracer<'_> {
    fn sample_ray(&self, ray: &Ray, depth: u32) -> Color {
        let hit = self.scene.intersect(ray);
        // Scene hits carry a material exactly when they are valid
        let Some(material) = hit.material else {
            return BACKGROUND;
        };

        let mut lighting = DirectLighting::gather(self.scene, ray, &hit, material);

        if depth > 0 {
            let mirror = reflect(ray.direction().normalize(), hit.normal);
            let reflected = Ray::new(hit.position + mirror * REFLECTION_BIAS, mirror);
            // shininess 1 gives no reflection, very shiny approaches a mirror
            let weight = 1.0 - 1.0 / material.shininess();
            let incoming = self.sample_ray(&reflected, depth - 1);
            lighting.specular += weight * incoming * material.specular();
        }

        lighting.shade(material)
    }
}

/// Placeholder for a full global illumination tracer.
pub struct ChallengePathTracer<'a> {
    #[allow(dead_code)]
    scene: &'a Scene,
}

impl<'a> ChallengePathTracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

impl PathTracer for ChallengePathTracer<'_> {
    fn sample_ray(&self, _ray: &Ray, _depth: u32) -> Color {
        BACKGROUND
    }
}

/// Selects which tracer a render uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracerKind {
    Simple,
    Core,
    #[default]
    Completion,
    Challenge,
}

impl TracerKind {
    pub const ALL: [TracerKind; 4] = [
        TracerKind::Simple,
        TracerKind::Core,
        TracerKind::Completion,
        TracerKind::Challenge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TracerKind::Simple => "simple",
            TracerKind::Core => "core",
            TracerKind::Completion => "completion",
            TracerKind::Challenge => "challenge",
        }
    }

    /// Create the tracer over `scene`.
    pub fn create<'a>(&self, scene: &'a Scene) -> Box<dyn PathTracer + 'a> {
        match self {
            TracerKind::Simple => Box::new(SimplePathTracer::new(scene)),
            TracerKind::Core => Box::new(CorePathTracer::new(scene)),
            TracerKind::Completion => Box::new(CompletionPathTracer::new(scene)),
            TracerKind::Challenge => Box::new(ChallengePathTracer::new(scene)),
        }
    }
}

impl fmt::Display for TracerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TracerKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TracerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| RenderError::UnknownTracer(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Aabb, DirectionalLight, Plane, PointLight, Sphere};
    use std::sync::Arc;

    fn approx(a: Color, b: Color) -> bool {
        (a - b).length() < 1e-5
    }

    /// Red sphere in front of the origin, optionally lit from the camera side.
    fn sphere_scene(lit: bool) -> Scene {
        let mut scene = Scene::new();
        scene.add_object(
            Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0),
            Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 10.0, 0.5, 0.0)),
        );
        if lit {
            let sun = DirectionalLight::new(Vec3::NEG_Z, Color::splat(0.5), Color::splat(0.05));
            scene.add_light(sun);
        }
        scene
    }

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::NEG_Z)
    }

    fn away() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::Z)
    }

    #[test]
    fn test_miss_returns_background_for_every_tracer() {
        let scene = sphere_scene(true);
        for kind in TracerKind::ALL {
            let tracer = kind.create(&scene);
            assert_eq!(tracer.sample_ray(&away(), 4), BACKGROUND, "{kind}");
        }
    }

    #[test]
    fn test_challenge_always_background() {
        let scene = sphere_scene(true);
        let tracer = ChallengePathTracer::new(&scene);
        assert_eq!(tracer.sample_ray(&forward(), 4), BACKGROUND);
    }

    #[test]
    fn test_simple_head_on_is_full_grey() {
        let scene = sphere_scene(false);
        let tracer = SimplePathTracer::new(&scene);
        assert!(approx(tracer.sample_ray(&forward(), 0), Color::splat(0.5)));
    }

    #[test]
    fn test_simple_grazing_is_darker() {
        let scene = sphere_scene(false);
        let tracer = SimplePathTracer::new(&scene);
        let ray = Ray::new(Vec3::new(0.0, 0.95, 0.0), Vec3::NEG_Z);
        let color = tracer.sample_ray(&ray, 0);

        assert!(color.x < 0.5 && color.x >= 0.25);
    }

    #[test]
    fn test_core_without_lights_is_black() {
        let scene = sphere_scene(false);
        let tracer = CorePathTracer::new(&scene);
        assert_eq!(tracer.sample_ray(&forward(), 4), Color::ZERO);
    }

    #[test]
    fn test_core_head_on_light() {
        let scene = sphere_scene(true);
        let tracer = CorePathTracer::new(&scene);
        let color = tracer.sample_ray(&forward(), 0);

        // ambient * diffuse + E * diffuse * 1 + E * specular * 1
        let expected = Color::new(0.05 + 0.5 + 0.25, 0.25, 0.25);
        assert!(approx(color, expected), "{color:?}");
    }

    #[test]
    fn test_core_shadowed_keeps_ambient() {
        let mut scene = Scene::new();
        let white = Arc::new(Material::new(Color::ONE, 1.05, 0.0, 0.0));
        // Floor with a box hovering over the hit point
        let floor = Aabb::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(5.0, 0.5, 5.0));
        scene.add_object(floor, white.clone());
        scene.add_object(Aabb::cube(Vec3::new(0.0, 2.0, 0.0), 1.0), white);
        scene.add_light(DirectionalLight::new(Vec3::NEG_Y, Color::ONE, Color::splat(0.1)));

        let tracer = CorePathTracer::new(&scene);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, -0.5, -3.0));
        let color = tracer.sample_ray(&ray, 0);

        assert!(approx(color, Color::splat(0.1)), "{color:?}");
    }

    #[test]
    fn test_core_light_behind_surface_gets_no_direct_term() {
        let scene = sphere_scene(false);
        let mut scene = scene;
        // Behind the sphere, shining away from the camera
        let behind = PointLight::new(Vec3::new(0.0, 0.0, -10.0), Color::splat(50.0), Color::ZERO);
        scene.add_light(behind);

        let tracer = CorePathTracer::new(&scene);
        assert_eq!(tracer.sample_ray(&forward(), 0), Color::ZERO);
    }

    #[test]
    fn test_completion_depth_zero_matches_core() {
        for scene in [sphere_scene(true), glint_core::scenes::cornell_box()] {
            let core = CorePathTracer::new(&scene);
            let completion = CompletionPathTracer::new(&scene);

            for dir in [Vec3::NEG_Z, Vec3::new(0.3, -0.2, -1.0), Vec3::new(-0.4, -0.3, -1.0)] {
                let ray = Ray::new(Vec3::ZERO, dir);
                assert_eq!(core.sample_ray(&ray, 0), completion.sample_ray(&ray, 0));
            }
        }
    }

    #[test]
    fn test_completion_reflection_adds_light() {
        let scene = glint_core::scenes::cornell_box();
        let core = CorePathTracer::new(&scene);
        let completion = CompletionPathTracer::new(&scene);

        // Straight at the silver sphere
        let target = Vec3::new(-1.25, -2.25, -7.0);
        let ray = Ray::new(Vec3::ZERO, target.normalize());

        let direct = core.sample_ray(&ray, 0);
        let mirrored = completion.sample_ray(&ray, 3);
        assert!(mirrored.x > direct.x);
    }

    #[test]
    fn test_completion_matte_material_ignores_reflection() {
        // shininess 1 gives a zero mirror weight
        let mut scene = Scene::new();
        scene.add_object(
            Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0),
            Arc::new(Material::new(Color::ONE, 1.0, 0.5, 0.0)),
        );
        scene.add_light(DirectionalLight::new(Vec3::NEG_Z, Color::splat(0.5), Color::splat(0.05)));

        let core = CorePathTracer::new(&scene);
        let completion = CompletionPathTracer::new(&scene);
        assert!(approx(core.sample_ray(&forward(), 0), completion.sample_ray(&forward(), 5)));
    }

    /// Wall at z = -5 facing the camera, lit 60 degrees off its normal.
    fn oblique_wall_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_object(
            Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z),
            Arc::new(Material::new(Color::new(0.8, 0.4, 0.2), 4.0, 0.5, 0.0)),
        );
        let to_light = Vec3::new(60f32.to_radians().sin(), 0.0, 60f32.to_radians().cos());
        scene.add_light(DirectionalLight::new(-to_light, Color::ONE, Color::splat(0.1)));
        scene
    }

    /// ambient * diffuse + E * diffuse * cos(60) + E * specular * cos(60)^4
    fn oblique_wall_direct() -> Color {
        let diffuse = Color::new(0.8, 0.4, 0.2);
        0.1 * diffuse + diffuse * 0.5 + Color::splat(0.5 * 0.5_f32.powi(4))
    }

    #[test]
    fn test_core_oblique_light_lambert_and_phong() {
        let scene = oblique_wall_scene();
        let tracer = CorePathTracer::new(&scene);
        let color = tracer.sample_ray(&forward(), 0);

        assert!(approx(color, oblique_wall_direct()), "{color:?}");
    }

    #[test]
    fn test_completion_mirror_weight() {
        // The mirror ray leaves the wall and escapes to the background
        let scene = oblique_wall_scene();
        let tracer = CompletionPathTracer::new(&scene);
        let color = tracer.sample_ray(&forward(), 1);

        // (1 - 1/shininess) * incoming * specular
        let expected = oblique_wall_direct() + 0.75 * BACKGROUND * 0.5;
        assert!(approx(color, expected), "{color:?}");
    }

    #[test]
    fn test_tracer_kind_parse() {
        assert_eq!("Completion".parse::<TracerKind>().unwrap(), TracerKind::Completion);
        assert!(matches!("whitted".parse::<TracerKind>(), Err(RenderError::UnknownTracer(_))));
        assert_eq!(TracerKind::default(), TracerKind::Completion);
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }
}
