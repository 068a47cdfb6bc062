//! Surface material for the Phong shading model.

use glint_math::Vec3;

/// Color type alias (linear RGB, unbounded)
pub type Color = Vec3;

/// Phong material shared by any number of scene objects.
///
/// Materials are plain data and never change once a scene is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Diffuse/albedo color (RGB, 0-1)
    pub diffuse: Color,

    /// Phong exponent, must be > 0. Also weights mirror reflection
    /// by `1 - 1/shininess`.
    pub shininess: f32,

    /// Strength of the white specular highlight (0-1)
    pub specular_ratio: f32,

    /// Reflectivity coefficient (0 = matte, 1 = mirror)
    pub reflectivity: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(diffuse: Color, shininess: f32, specular_ratio: f32, reflectivity: f32) -> Self {
        debug_assert!(shininess > 0.0, "shininess must be positive, got {shininess}");
        Self {
            diffuse,
            shininess,
            specular_ratio,
            reflectivity,
        }
    }

    /// Diffuse color.
    #[inline]
    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    /// Specular color (white scaled by the specular ratio).
    #[inline]
    pub fn specular(&self) -> Color {
        Color::splat(self.specular_ratio)
    }

    #[inline]
    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    #[inline]
    pub fn reflectivity(&self) -> f32 {
        self.reflectivity
    }
}

impl Default for Material {
    fn default() -> Self {
        // Grey, nearly matte
        Self::new(Color::splat(0.5), 1.05, 0.1, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specular_is_grey_ratio() {
        let m = Material::new(Color::new(1.0, 0.0, 0.0), 10.0, 0.5, 0.0);
        assert_eq!(m.specular(), Color::splat(0.5));
        assert_eq!(m.diffuse(), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.diffuse(), Color::splat(0.5));
        assert!(m.shininess() > 0.0);
        assert_eq!(m.reflectivity(), 0.0);
    }
}
