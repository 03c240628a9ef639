//! Hittable trait, HitRecord and the scene-wide nearest-hit query.

use tinyrt_core::{Material, Scene};
use tinyrt_math::{Interval, Ray, Vec3};

/// Minimum valid hit distance; keeps secondary rays off their own surface.
pub const EPSILON: f32 = 1e-3;

/// Hits at or beyond this distance count as background.
pub const MAX_DISTANCE: f32 = 1000.0;

/// Valid hit distances for any scene query: the open interval (EPSILON, MAX_DISTANCE).
pub const RAY_RANGE: Interval = Interval {
    min: EPSILON,
    max: MAX_DISTANCE,
};

/// Record of a ray-object intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRecord {
    /// Whether anything was hit
    pub found: bool,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing away from the surface (not flipped toward the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

impl HitRecord {
    /// A record for "nothing hit".
    pub fn miss() -> Self {
        Self {
            found: false,
            t: f32::INFINITY,
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: Material::default(),
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::miss()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly within `ray_t`.
    ///
    /// Returns true if hit, and fills in the hit record.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;
}

/// Find the nearest surface hit by `ray` among all scene primitives.
///
/// Spheres are scanned linearly, then the checkerboard; each successful hit
/// narrows the accepted range so the last writer is always the closest.
pub fn intersect(ray: &Ray, scene: &Scene) -> HitRecord {
    let mut rec = HitRecord::miss();
    let mut closest_so_far = RAY_RANGE.max;

    for sphere in &scene.spheres {
        if sphere.hit(ray, RAY_RANGE.with_max(closest_so_far), &mut rec) {
            closest_so_far = rec.t;
        }
    }

    scene
        .checkerboard
        .hit(ray, RAY_RANGE.with_max(closest_so_far), &mut rec);

    rec
}
