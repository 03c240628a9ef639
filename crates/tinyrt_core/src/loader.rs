//! JSON scene loading.
//!
//! A scene file mirrors the `Scene` type:
//!
//! ```json
//! {
//!   "spheres": [
//!     { "center": [-3, 0, -16], "radius": 2,
//!       "material": { "refractive_index": 1.0, "albedo": [0.6, 0.3, 0.1, 0.0],
//!                     "diffuse_color": [0.4, 0.4, 0.3], "specular_exponent": 50 } }
//!   ],
//!   "lights": [ { "position": [-20, 20, 20], "intensity": 1.5 } ]
//! }
//! ```
//!
//! `checkerboard` is optional and defaults to the standard board.

use std::path::Path;

use thiserror::Error;

use crate::scene::Scene;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sphere {index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index} has refractive index {value} (must be >= 1)")]
    InvalidRefractiveIndex { index: usize, value: f32 },

    #[error("Sphere {index} has negative specular exponent {value}")]
    InvalidSpecularExponent { index: usize, value: f32 },

    #[error("Light {index} has negative intensity {intensity}")]
    InvalidIntensity { index: usize, intensity: f32 },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a JSON scene file.
pub fn load_scene_json<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let scene = load_scene_json_from_string(&contents)?;

    log::info!(
        "Loaded {} spheres and {} lights from {}",
        scene.sphere_count(),
        scene.light_count(),
        path.display()
    );

    Ok(scene)
}

/// Parse and validate a JSON scene from a string.
pub fn load_scene_json_from_string(contents: &str) -> SceneResult<Scene> {
    let scene: Scene = serde_json::from_str(contents)?;
    scene.validate()?;

    if scene.lights.is_empty() {
        log::warn!("Scene has no lights; only reflections and background will be visible");
    }

    Ok(scene)
}
