//! tinyrt Core - Scene model for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Checkerboard`, `Material`
//! - **Scene files**: JSON scene parsing and validation
//! - **Demo scene**: the built-in four-sphere, three-light scene
//!
//! # Example
//!
//! ```ignore
//! use tinyrt_core::load_scene_json;
//!
//! let scene = load_scene_json("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod demo;
pub mod loader;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use demo::demo_scene;
pub use loader::{load_scene_json, load_scene_json_from_string, SceneError, SceneResult};
pub use material::Material;
pub use scene::{Checkerboard, Light, Scene, Sphere};
