//! Hand-authored demo scenes.
//!
//! Each fixture exercises a different part of the tracer: shadows from a
//! directional light, point light falloff, a shininess/specular grid, every
//! primitive type, and a mirror-sphere Cornell box.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use glint_math::Vec3;

use crate::{
    Aabb, Color, DirectionalLight, Disk, Material, Plane, PointLight, Scene, SceneError,
    SceneResult, Sphere, Triangle,
};

/// Names of the built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Simple,
    Lights,
    Materials,
    Shapes,
    CornellBox,
}

impl SceneKind {
    /// All built-in scenes, in menu order.
    pub const ALL: [SceneKind; 5] = [
        SceneKind::Simple,
        SceneKind::Lights,
        SceneKind::Materials,
        SceneKind::Shapes,
        SceneKind::CornellBox,
    ];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SceneKind::Simple => "simple",
            SceneKind::Lights => "lights",
            SceneKind::Materials => "materials",
            SceneKind::Shapes => "shapes",
            SceneKind::CornellBox => "cornell-box",
        }
    }

    /// Build the scene.
    pub fn build(&self) -> Scene {
        let scene = match self {
            SceneKind::Simple => simple(),
            SceneKind::Lights => lights(),
            SceneKind::Materials => materials(),
            SceneKind::Shapes => shapes(),
            SceneKind::CornellBox => cornell_box(),
        };
        log::debug!(
            "Built '{}' scene: {} objects, {} lights",
            self.name(),
            scene.object_count(),
            scene.light_count()
        );
        scene
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SceneKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name() == wanted || (wanted == "cornell" && *kind == SceneKind::CornellBox)
            })
            .ok_or_else(|| SceneError::UnknownScene(s.to_string()))
    }
}

/// Look up a built-in scene by name and build it.
pub fn by_name(name: &str) -> SceneResult<Scene> {
    Ok(name.parse::<SceneKind>()?.build())
}

fn shiny_red() -> Arc<Material> {
    Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 10.0, 0.5, 0.0))
}

fn green() -> Arc<Material> {
    Arc::new(Material::new(Color::new(0.0, 0.8, 0.0), 1.05, 0.1, 0.0))
}

/// Point light with the flux shared by the fixtures.
fn bulb(position: Vec3) -> PointLight {
    PointLight::new(position, Color::splat(50.0), Color::splat(0.05))
}

fn sun() -> DirectionalLight {
    DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0), Color::splat(0.5), Color::splat(0.05))
}

/// A sphere resting on a box, lit by one directional light.
pub fn simple() -> Scene {
    let mut scene = Scene::new();

    scene.add_object(Sphere::new(Vec3::new(0.0, -2.0, -10.0), 1.0), shiny_red());
    scene.add_object(
        Aabb::new(Vec3::new(0.0, -3.5, -10.0), Vec3::new(3.0, 0.5, 3.0)),
        green(),
    );

    scene.add_light(sun());
    scene
}

/// The simple scene plus two point lights, one of them behind a wall.
pub fn lights() -> Scene {
    let mut scene = Scene::new();
    let green = green();

    scene.add_object(Sphere::new(Vec3::new(0.0, -2.0, -10.0), 1.0), shiny_red());
    scene.add_object(
        Aabb::new(Vec3::new(0.0, -3.5, -10.0), Vec3::new(3.0, 0.5, 3.0)),
        green.clone(),
    );
    // Wall blocking one of the point lights
    scene.add_object(
        Aabb::new(Vec3::new(3.5, 0.0, -10.0), Vec3::new(0.5, 3.0, 3.0)),
        green,
    );

    scene.add_light(sun());
    scene.add_light(bulb(Vec3::new(-5.0, 0.0, -10.0)));
    scene.add_light(bulb(Vec3::new(5.0, 0.0, -10.0)));
    scene
}

/// An 11x11 grid of red spheres sweeping shininess (e^0 to e^10) across
/// one axis and specular ratio (0 to 1) across the other.
pub fn materials() -> Scene {
    let mut scene = Scene::new();

    for shin in 0..=10 {
        for spec in 0..=10 {
            let shininess = (shin as f32).exp();
            let specular_ratio = spec as f32 / 10.0;
            let red = Color::new(1.0, 0.0, 0.0);
            let material = Arc::new(Material::new(red, shininess, specular_ratio, 0.0));

            scene.add_object(
                Sphere::new(Vec3::new(5.5 - shin as f32, -2.0, -5.5 - spec as f32), 0.4),
                material,
            );
        }
    }

    scene.add_object(
        Aabb::new(Vec3::new(0.0, -3.0, -10.0), Vec3::new(6.0, 0.5, 6.0)),
        green(),
    );

    scene.add_light(sun());
    scene
}

/// One of every primitive over a ground plane.
pub fn shapes() -> Scene {
    let mut scene = Scene::new();
    let white = Arc::new(Material::new(Color::ONE, 1.05, 0.1, 0.0));

    scene.add_object(Aabb::cube(Vec3::new(-3.0, 0.0, -5.0), 0.5), white.clone());
    scene.add_object(Sphere::new(Vec3::new(-1.0, 0.0, -5.0), 0.5), white.clone());
    scene.add_object(Plane::new(Vec3::new(-2.0, -4.0, -2.0), Vec3::Y), white.clone());
    scene.add_object(Disk::new(Vec3::new(1.0, 0.0, -5.0), Vec3::Z, 1.0), white.clone());
    scene.add_object(
        Triangle::new(
            Vec3::new(2.0, -1.0, -5.0),
            Vec3::new(2.5, -0.5, -5.0),
            Vec3::new(3.0, -1.0, -5.0),
        ),
        white,
    );

    scene.add_light(sun());
    scene
}

/// Closed box with colored side walls, two mirror spheres and a matte one,
/// lit by three point lights along the ceiling.
pub fn cornell_box() -> Scene {
    let mut scene = Scene::new();

    let white = Arc::new(Material::new(Color::ONE, 1.05, 0.1, 0.0));
    let green = Arc::new(Material::new(Color::new(0.0, 1.0, 0.0), 1.05, 0.1, 0.0));
    let red = Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 1.05, 0.1, 0.0));

    let gold = Arc::new(Material::new(Color::new(1.0, 1.0, 0.0), 50.0, 0.8, 1.0));
    let silver = Arc::new(Material::new(Color::ONE, 1000.0, 0.8, 1.0));
    let blue = Arc::new(Material::new(Color::new(0.5, 0.5, 1.0), 1.1, 0.1, 0.0));

    // Walls: bottom, top, back, front, right, left
    scene.add_object(
        Aabb::new(Vec3::new(0.0, -3.2, 0.0), Vec3::new(3.0, 0.2, 13.0)),
        white.clone(),
    );
    scene.add_object(Aabb::new(Vec3::new(0.0, 3.2, 0.0), Vec3::new(3.0, 0.2, 13.0)), white.clone());
    scene.add_object(
        Aabb::new(Vec3::new(0.0, 0.0, -13.2), Vec3::new(3.0, 3.0, 0.2)),
        white.clone(),
    );
    scene.add_object(Aabb::new(Vec3::new(0.0, 0.0, 13.2), Vec3::new(3.0, 3.0, 0.2)), white);
    scene.add_object(Aabb::new(Vec3::new(3.2, 0.0, 0.0), Vec3::new(0.2, 3.0, 13.0)), green);
    scene.add_object(Aabb::new(Vec3::new(-3.2, 0.0, 0.0), Vec3::new(0.2, 3.0, 13.0)), red);

    scene.add_object(Sphere::new(Vec3::new(1.0, -2.0, -7.0), 1.0), gold);
    scene.add_object(Sphere::new(Vec3::new(-1.25, -2.25, -7.0), 0.75), silver);
    scene.add_object(Sphere::new(Vec3::new(0.0, -1.5, -10.0), 1.5), blue);

    for z in [-10.0, 0.0, 10.0] {
        scene.add_light(bulb(Vec3::new(0.0, 2.5, z)));
    }
    scene
}
