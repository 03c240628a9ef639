//! Surface materials for Whitted shading.

use serde::{Deserialize, Serialize};
use tinyrt_math::{Color, Vec4};

/// A Whitted-style surface description.
///
/// `albedo` holds four independent mixing weights applied to the diffuse,
/// specular, reflected and refracted terms respectively. They are not
/// normalized and need not sum to one (the mirror preset uses a specular
/// weight of 10).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Index of refraction (1.0 = vacuum, 1.5 = glass)
    pub refractive_index: f32,

    /// Weights for {diffuse, specular, reflection, refraction}
    pub albedo: Vec4,

    /// Base diffuse color (RGB)
    pub diffuse_color: Color,

    /// Phong exponent, larger means a tighter highlight
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Default material with the given diffuse color.
    pub fn diffuse(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }

    pub fn ivory() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.6, 0.3, 0.1, 0.0),
            Color::new(0.4, 0.4, 0.3),
            50.0,
        )
    }

    pub fn glass() -> Self {
        Self::new(
            1.5,
            Vec4::new(0.0, 0.5, 0.1, 0.8),
            Color::new(0.6, 0.7, 0.8),
            125.0,
        )
    }

    pub fn red_rubber() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.9, 0.1, 0.0, 0.0),
            Color::new(0.3, 0.1, 0.1),
            10.0,
        )
    }

    pub fn mirror() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.0, 10.0, 0.8, 0.0),
            Color::new(1.0, 1.0, 1.0),
            1425.0,
        )
    }

    /// Weight of the diffuse term.
    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.albedo.x
    }

    /// Weight of the specular highlight term.
    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.albedo.y
    }

    /// Weight of the reflected color.
    #[inline]
    pub fn reflection_weight(&self) -> f32 {
        self.albedo.z
    }

    /// Weight of the refracted color.
    #[inline]
    pub fn refraction_weight(&self) -> f32 {
        self.albedo.w
    }
}
