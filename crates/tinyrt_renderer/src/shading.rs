//! Whitted shading: local illumination, shadows, reflection and refraction.

use crate::hittable::{intersect, HitRecord};
use tinyrt_core::{Light, Scene};
use tinyrt_math::{Color, Ray, Vec3};

/// Returned by [`refract`] under total internal reflection.
///
/// It has no physical meaning; it is kept so renders stay stable.
pub const TOTAL_INTERNAL_REFLECTION_DIR: Vec3 = Vec3::X;

/// Reflect incident direction `i` about normal `n`.
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - n * 2.0 * i.dot(n)
}

/// Refract incident direction `i` through a surface with outward normal `n`
/// (Snell's law).
///
/// `eta_t` is the index of the medium on the far side of the outward normal,
/// `eta_i` the one the ray travels in when entering. A ray leaving the medium
/// (`i·n > 0`) flips the normal and swaps the indices, once.
pub fn refract(i: Vec3, n: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cosi = -i.dot(n).clamp(-1.0, 1.0);
    if cosi < 0.0 {
        return refract(i, -n, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        TOTAL_INTERNAL_REFLECTION_DIR
    } else {
        i * eta + n * (eta * cosi - k.sqrt())
    }
}

/// Scalar light sums accumulated over every unshadowed light.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Illumination {
    pub diffuse: f32,
    pub specular: f32,
}

/// Whether `light` is blocked from `point` by any scene geometry.
///
/// Shadows are binary: an occluder strictly closer than the light blocks it
/// completely, whatever its material.
pub fn is_shadowed(point: Vec3, light: &Light, scene: &Scene) -> bool {
    let to_light = light.position - point;
    let light_distance = to_light.length();
    let shadow_ray = Ray::new(point, to_light);

    let rec = intersect(&shadow_ray, scene);
    rec.found && (rec.p - point).length() < light_distance
}

/// Diffuse and specular sums at a surface point seen along `view_dir`.
pub fn illuminate(
    point: Vec3,
    normal: Vec3,
    specular_exponent: f32,
    view_dir: Vec3,
    scene: &Scene,
) -> Illumination {
    let mut sums = Illumination::default();

    for light in &scene.lights {
        if is_shadowed(point, light, scene) {
            continue;
        }

        let light_dir = (light.position - point).normalize();
        sums.diffuse += light.intensity * light_dir.dot(normal).max(0.0);
        sums.specular += light.intensity
            * (-reflect(-light_dir, normal))
                .dot(view_dir)
                .max(0.0)
                .powf(specular_exponent);
    }

    sums
}

/// Compose the final color at a hit from local lighting and the already
/// traced reflected and refracted colors. No clamping happens here.
pub fn shade(
    hit: &HitRecord,
    view_dir: Vec3,
    scene: &Scene,
    reflect_color: Color,
    refract_color: Color,
) -> Color {
    let material = &hit.material;
    let light = illuminate(
        hit.p,
        hit.normal,
        material.specular_exponent,
        view_dir,
        scene,
    );

    material.diffuse_color * light.diffuse * material.diffuse_weight()
        + Color::ONE * light.specular * material.specular_weight()
        + reflect_color * material.reflection_weight()
        + refract_color * material.refraction_weight()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyrt_core::{Material, Sphere};
    use tinyrt_math::Vec4;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_reflect_head_on() {
        // Straight down onto the checkerboard
        let i = Vec3::NEG_Y;
        assert_vec_eq(reflect(i, Vec3::Y), -i);
    }

    #[test]
    fn test_reflect_oblique() {
        let i = Vec3::new(1.0, -1.0, 0.0).normalize();
        assert_vec_eq(reflect(i, Vec3::Y), Vec3::new(1.0, 1.0, 0.0).normalize());
    }

    #[test]
    fn test_refract_normal_incidence() {
        let n = Vec3::new(0.0, 0.0, 1.0);
        let i = -n;

        for ior in [1.0, 1.33, 1.5, 2.4] {
            let r = refract(i, n, ior, 1.0);
            assert_ne!(r, TOTAL_INTERNAL_REFLECTION_DIR);
            // Parallel to, and pointing the same way as, the incident ray
            assert!(r.cross(i).length() < 1e-5);
            assert!(r.dot(i) > 0.0);
        }
    }

    #[test]
    fn test_refract_exit_flips_normal() {
        // Leaving the medium along the outward normal
        let n = Vec3::Y;
        let r = refract(n, n, 1.5, 1.0);
        assert_vec_eq(r, n);
    }

    #[test]
    fn test_refract_bends_toward_normal_on_entry() {
        let n = Vec3::Y;
        let i = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = refract(i, n, 1.5, 1.0).normalize();

        // Transmitted ray is closer to -N than the incident ray
        assert!(r.dot(-n) > i.dot(-n));
        assert!(r.y < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection_fallback() {
        // Grazing exit from glass into vacuum
        let n = Vec3::Y;
        let i = Vec3::new(1.0, 0.2, 0.0).normalize();
        assert_eq!(refract(i, n, 1.5, 1.0), TOTAL_INTERNAL_REFLECTION_DIR);
    }

    #[test]
    fn test_unobstructed_light() {
        let scene = Scene::new(vec![], vec![Light::new(Vec3::new(0.0, 10.0, 0.0), 2.0)]);
        let light = illuminate(Vec3::ZERO, Vec3::Y, 10.0, Vec3::NEG_Y, &scene);

        // Light straight above: full diffuse, and the highlight reflects back at the viewer
        assert!((light.diffuse - 2.0).abs() < 1e-5);
        assert!((light.specular - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let scene = Scene::new(vec![], vec![Light::new(Vec3::new(0.0, -10.0, 0.0), 1.0)]);
        let light = illuminate(Vec3::ZERO, Vec3::Y, 10.0, Vec3::NEG_Y, &scene);
        assert_eq!(light.diffuse, 0.0);
        assert_eq!(light.specular, 0.0);
    }

    #[test]
    fn test_occluded_light_is_fully_shadowed() {
        // Point on top of a lower sphere; a blocker sphere sits between it and the light
        let lower = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::ivory());
        let blocker = Sphere::new(Vec3::new(0.0, 4.0, -10.0), 1.0, Material::glass());
        let light = Light::new(Vec3::new(0.0, 10.0, -10.0), 1.5);
        let scene = Scene::new(vec![lower, blocker], vec![light]);

        let point = Vec3::new(0.0, 1.0, -10.0);
        assert!(is_shadowed(point, &light, &scene));

        let sums = illuminate(point, Vec3::Y, 50.0, Vec3::NEG_Y, &scene);
        assert_eq!(sums, Illumination::default());
    }

    #[test]
    fn test_occluder_beyond_light_does_not_shadow() {
        let beyond = Sphere::new(Vec3::new(0.0, 20.0, -10.0), 1.0, Material::ivory());
        let light = Light::new(Vec3::new(0.0, 10.0, -10.0), 1.0);
        let scene = Scene::new(vec![beyond], vec![light]);

        assert!(!is_shadowed(Vec3::new(0.0, 1.0, -10.0), &light, &scene));
    }

    #[test]
    fn test_shade_mixes_weights() {
        let scene = Scene::new(vec![], vec![Light::new(Vec3::new(0.0, 10.0, 0.0), 1.0)]);
        let hit = HitRecord {
            found: true,
            t: 1.0,
            p: Vec3::ZERO,
            normal: Vec3::Y,
            material: Material::new(
                1.0,
                Vec4::new(0.5, 0.0, 0.25, 0.25),
                Color::new(1.0, 0.0, 0.0),
                10.0,
            ),
        };

        let c = shade(
            &hit,
            Vec3::NEG_Y,
            &scene,
            Color::new(0.0, 1.0, 0.0),
            Color::new(0.0, 0.0, 1.0),
        );
        assert_vec_eq(c, Color::new(0.5, 0.25, 0.25));
    }

    #[test]
    fn test_shade_is_unclamped() {
        let scene = Scene::new(vec![], vec![Light::new(Vec3::new(0.0, 10.0, 0.0), 1.0)]);
        let hit = HitRecord {
            found: true,
            t: 1.0,
            p: Vec3::ZERO,
            normal: Vec3::Y,
            material: Material::mirror(),
        };

        let c = shade(&hit, Vec3::NEG_Y, &scene, Color::ONE, Color::ZERO);
        assert!(c.x > 1.0);
    }
}
