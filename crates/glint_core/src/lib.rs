//! Glint Core - geometry, lights and scenes for the Glint path tracer.
//!
//! This crate provides:
//!
//! - **Shapes**: `Aabb`, `Sphere`, `Plane`, `Disk`, `Triangle` behind the `Shape` trait
//! - **Lights**: `DirectionalLight`, `PointLight` behind the `Light` trait
//! - **Scenes**: `Scene` with closest-hit queries, plus built-in demo fixtures
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneKind;
//! use glint_math::{Ray, Vec3};
//!
//! let scene: SceneKind = "cornell-box".parse()?;
//! let scene = scene.build();
//! let hit = scene.intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));
//! println!("hit at t = {}", hit.distance);
//! ```

mod aabb;
mod error;
mod intersection;
mod light;
mod material;
mod plane;
mod scene;
pub mod scenes;
mod shape;
mod sphere;
mod triangle;

// Re-export commonly used types
pub use aabb::Aabb;
pub use error::{SceneError, SceneResult};
pub use intersection::RayIntersection;
pub use light::{DirectionalLight, Light, PointLight};
pub use material::{Color, Material};
pub use plane::{Disk, Plane};
pub use scene::{Scene, SceneObject};
pub use scenes::SceneKind;
pub use shape::Shape;
pub use sphere::Sphere;
pub use triangle::Triangle;
