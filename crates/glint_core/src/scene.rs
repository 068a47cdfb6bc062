//! Scene container: objects, materials and lights.
//!
//! A scene is filled in once and then only read while tracing, so it can
//! be shared by reference across render threads.

use std::sync::Arc;

use glint_math::Ray;

use crate::{Light, Material, RayIntersection, Shape};

/// One shape paired with the material it is drawn with.
#[derive(Debug)]
pub struct SceneObject {
    shape: Box<dyn Shape>,
    material: Arc<Material>,
}

impl SceneObject {
    /// Create a new scene object.
    pub fn new(shape: Box<dyn Shape>, material: Arc<Material>) -> Self {
        Self { shape, material }
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect the shape and tag a hit with this object's material.
    pub fn intersect(&self, ray: &Ray) -> RayIntersection<'_> {
        let mut hit = self.shape.intersect(ray);
        if hit.valid {
            hit.material = Some(self.material.as_ref());
        }
        hit
    }
}

/// A complete scene for rendering.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<Box<dyn Light>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from already built objects and lights.
    pub fn from_parts(objects: Vec<SceneObject>, lights: Vec<Box<dyn Light>>) -> Self {
        Self { objects, lights }
    }

    /// Add a shape drawn with `material`.
    pub fn add_object(&mut self, shape: impl Shape + 'static, material: Arc<Material>) {
        self.objects.push(SceneObject::new(Box::new(shape), material));
    }

    /// Add a light.
    pub fn add_light(&mut self, light: impl Light + 'static) {
        self.lights.push(Box::new(light));
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Closest valid intersection over all objects.
    ///
    /// Linear scan; ties keep the earlier object. A valid hit always
    /// carries the material of the object it hit, a miss never does.
    pub fn intersect(&self, ray: &Ray) -> RayIntersection<'_> {
        let mut closest = RayIntersection::default();

        for object in &self.objects {
            let hit = object.intersect(ray);
            if hit.is_closer_than(&closest) {
                closest = hit;
            }
        }

        closest
    }
}
