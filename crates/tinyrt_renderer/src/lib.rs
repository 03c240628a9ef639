//! tinyrt Renderer - CPU Whitted ray tracing
//!
//! A recursive ray tracer with reflection, refraction, binary shadows and
//! Phong highlights over spheres and a checkerboard plane.

mod bucket;
mod camera;
mod checkerboard;
mod hittable;
mod output;
mod renderer;
mod shading;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use hittable::{intersect, HitRecord, Hittable, EPSILON, MAX_DISTANCE, RAY_RANGE};
pub use output::{save_image, write_ppm, OutputError, OutputResult};
pub use renderer::{
    cast_ray, color_to_rgb, finish_frame, hit_distance, normalize_depth, render, render_pixel,
    tone_map, trace, ImageBuffer, RayStats, RenderConfig, RenderMode,
};
pub use shading::{
    illuminate, is_shadowed, reflect, refract, shade, Illumination,
    TOTAL_INTERNAL_REFLECTION_DIR,
};
pub use sphere::ray_sphere_intersect;

/// Re-export common math types from tinyrt_math
pub use tinyrt_math::{Color, Interval, Ray, Vec3};
