//! Ray/sphere intersection.

use crate::hittable::{HitRecord, Hittable, EPSILON};
use tinyrt_core::Sphere;
use tinyrt_math::{Interval, Ray};

/// Distance along `ray` to the nearest sphere surface beyond `EPSILON`.
///
/// Projects the origin-to-center vector onto the (unit) ray direction and
/// compares the squared perpendicular distance against the squared radius.
/// The near root is preferred; if it lies behind the origin (ray starts
/// inside the sphere) the far root is used.
pub fn ray_sphere_intersect(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    let l = sphere.center - ray.origin();
    let tca = l.dot(ray.direction());
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;

    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;

    if t0 > EPSILON {
        Some(t0)
    } else if t1 > EPSILON {
        Some(t1)
    } else {
        None
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let Some(t) = ray_sphere_intersect(self, ray) else {
            return false;
        };
        if !ray_t.surrounds(t) {
            return false;
        }

        rec.found = true;
        rec.t = t;
        rec.p = ray.at(t);
        rec.normal = (rec.p - self.center).normalize();
        rec.material = self.material;

        true
    }
}
