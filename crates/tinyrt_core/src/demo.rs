//! The built-in demo scene.

use tinyrt_math::Vec3;

use crate::material::Material;
use crate::scene::{Light, Scene, Sphere};

/// Four spheres (ivory, glass, red rubber, mirror) over the checkerboard,
/// lit by three point lights.
pub fn demo_scene() -> Scene {
    let spheres = vec![
        Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()),
        Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::glass()),
        Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()),
        Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()),
    ];

    let lights = vec![
        Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
        Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
        Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
    ];

    Scene::new(spheres, lights)
}
