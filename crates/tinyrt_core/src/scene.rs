//! Scene types for tinyrt.
//!
//! A scene is an immutable bundle of spheres, point lights and one bounded
//! checkerboard plane. It is built once, then shared by reference with every
//! render worker.

use serde::{Deserialize, Serialize};
use tinyrt_math::{Color, Vec3};

use crate::loader::{SceneError, SceneResult};
use crate::material::Material;

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    /// Must be strictly positive
    pub radius: f32,
    #[serde(default)]
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    /// Scales the light's contribution, must be non-negative
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// The horizontal checkerboard plane.
///
/// The plane lies at `y = height` and is only visible strictly inside the
/// rectangle `|x| < half_width`, `z_far < z < z_near`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkerboard {
    pub height: f32,
    pub half_width: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Tile colors: `[odd, even]` parity
    pub colors: [Color; 2],
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            half_width: 10.0,
            z_near: -10.0,
            z_far: -30.0,
            colors: [Color::new(0.3, 0.3, 0.3), Color::new(0.3, 0.2, 0.1)],
        }
    }
}

impl Checkerboard {
    /// Returns true if (x, z) lies strictly inside the visible rectangle.
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x.abs() < self.half_width && z < self.z_near && z > self.z_far
    }

    /// Tile parity at (x, z); tiles are 2 units on a side.
    pub fn parity(x: f32, z: f32) -> i64 {
        let sum = (0.5 * x).floor() as i64 + (0.5 * z).floor() as i64;
        sum.rem_euclid(2)
    }

    /// Tile color at (x, z).
    pub fn color_at(&self, x: f32, z: f32) -> Color {
        if Self::parity(x, z) == 1 {
            self.colors[0]
        } else {
            self.colors[1]
        }
    }

    /// Material at a point on the plane: default material tinted by the tile.
    pub fn material_at(&self, point: Vec3) -> Material {
        Material::diffuse(self.color_at(point.x, point.z))
    }
}

/// A complete scene: spheres, lights and the checkerboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub spheres: Vec<Sphere>,

    #[serde(default)]
    pub lights: Vec<Light>,

    #[serde(default)]
    pub checkerboard: Checkerboard,
}

impl Scene {
    /// Create a scene with the default checkerboard.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self {
            spheres,
            lights,
            checkerboard: Checkerboard::default(),
        }
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check the invariants the renderer relies on.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if !(sphere.material.refractive_index >= 1.0) {
                return Err(SceneError::InvalidRefractiveIndex {
                    index,
                    value: sphere.material.refractive_index,
                });
            }
            if sphere.material.specular_exponent < 0.0 {
                return Err(SceneError::InvalidSpecularExponent {
                    index,
                    value: sphere.material.specular_exponent,
                });
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !(light.intensity >= 0.0) {
                return Err(SceneError::InvalidIntensity {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        Ok(())
    }
}
