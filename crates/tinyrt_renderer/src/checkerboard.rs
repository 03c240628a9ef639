//! Ray/checkerboard intersection.

use crate::hittable::{HitRecord, Hittable, EPSILON};
use tinyrt_core::Checkerboard;
use tinyrt_math::{Interval, Ray, Vec3};

impl Hittable for Checkerboard {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let dir = ray.direction();

        // Nearly parallel to the plane
        if dir.y.abs() <= EPSILON {
            return false;
        }

        let t = -(ray.origin().y - self.height) / dir.y;
        if !ray_t.surrounds(t) {
            return false;
        }

        let p = ray.at(t);
        if !self.contains(p.x, p.z) {
            return false;
        }

        rec.found = true;
        rec.t = t;
        rec.p = p;
        rec.normal = Vec3::Y;
        rec.material = self.material_at(p);

        true
    }
}
