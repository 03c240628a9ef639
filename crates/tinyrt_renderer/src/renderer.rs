//! Core Whitted ray tracer.
//!
//! Implements:
//! - Recursive ray casting with a hard depth limit
//! - Unconditional reflection and refraction recursion at every hit
//! - Per-pixel max tone mapping
//! - A depth-map mode that outputs normalized hit distance

use crate::hittable::intersect;
use crate::shading::{reflect, refract, shade};
use crate::Camera;
use tinyrt_core::Scene;
use tinyrt_math::{Color, Interval, Ray};

/// What a render produces per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Full Whitted shading
    #[default]
    Shaded,
    /// Normalized distance to the nearest surface (white = near)
    Depth,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Deepest recursion level that is still shaded
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Shaded or depth output
    pub mode: RenderMode,
    /// Far plane for depth mode
    pub far: f32,
    /// Tile size for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            background: Color::new(0.2, 0.7, 0.8),
            mode: RenderMode::Shaded,
            far: 23.0,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Counters gathered while casting rays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayStats {
    /// Primary and secondary rays cast (shadow rays excluded)
    pub rays: u64,
    /// Rays that hit a surface and were shaded
    pub shaded: u64,
    /// Deepest recursion level at which a hit was shaded
    pub max_shaded_depth: u32,
}

impl RayStats {
    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &RayStats) {
        self.rays += other.rays;
        self.shaded += other.shaded;
        self.max_shaded_depth = self.max_shaded_depth.max(other.max_shaded_depth);
    }
}

/// Compute the color seen along `ray`.
///
/// Past `config.max_depth`, or when nothing is hit, the background color is
/// returned. Otherwise both the reflected and the refracted rays are traced
/// one level deeper, whatever the material weights, and combined with local
/// lighting by [`shade`].
pub fn cast_ray(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    stats: &mut RayStats,
) -> Color {
    stats.rays += 1;

    if depth > config.max_depth {
        return config.background;
    }

    let hit = intersect(ray, scene);
    if !hit.found {
        return config.background;
    }

    stats.shaded += 1;
    stats.max_shaded_depth = stats.max_shaded_depth.max(depth);

    let dir = ray.direction();
    let reflect_dir = reflect(dir, hit.normal);
    let refract_dir = refract(dir, hit.normal, hit.material.refractive_index, 1.0);

    let reflect_color = cast_ray(
        &Ray::new(hit.p, reflect_dir),
        scene,
        depth + 1,
        config,
        stats,
    );
    let refract_color = cast_ray(
        &Ray::new(hit.p, refract_dir),
        scene,
        depth + 1,
        config,
        stats,
    );

    shade(&hit, dir, scene, reflect_color, refract_color)
}

/// Trace a primary ray from recursion depth 0.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    let mut stats = RayStats::default();
    cast_ray(ray, scene, 0, config, &mut stats)
}

/// Distance to the nearest surface, or infinity.
pub fn hit_distance(ray: &Ray, scene: &Scene) -> f32 {
    let hit = intersect(ray, scene);
    if hit.found {
        hit.t
    } else {
        f32::INFINITY
    }
}

/// Scale a color down by its largest channel if that exceeds 1.
///
/// Unlike per-channel clipping this keeps the hue of over-bright pixels.
#[inline]
pub fn tone_map(color: Color) -> Color {
    let m = color.max_element().max(1.0);
    color / m
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = tone_map(color);
    let to_byte = |x: f32| (255.0 * Interval::UNIT.clamp(x)).round() as u8;
    [to_byte(c.x), to_byte(c.y), to_byte(c.z)]
}

/// Render a single pixel.
///
/// In depth mode the raw hit distance is stored in every channel; it is
/// normalized over the whole frame by [`finish_frame`].
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    stats: &mut RayStats,
) -> Color {
    let ray = camera.get_ray(x, y);
    match config.mode {
        RenderMode::Shaded => cast_ray(&ray, scene, 0, config, stats),
        RenderMode::Depth => {
            stats.rays += 1;
            Color::splat(hit_distance(&ray, scene))
        }
    }
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_offset(self.width, x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[pixel_offset(self.width, x, y)] = color;
    }

    /// Convert to tone-mapped RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Row-major offset of (x, y), computed in `usize` so large frames don't overflow.
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Turn raw hit distances into gray levels in [0, 1], near = bright.
///
/// Distances are clamped to `far`. If every pixel ends up at the same
/// distance (or nothing finite was hit) the whole image is black.
pub fn normalize_depth(image: &mut ImageBuffer, far: f32) {
    let mut min_depth = f32::INFINITY;
    let mut max_depth = f32::NEG_INFINITY;
    for color in &image.pixels {
        min_depth = min_depth.min(color.x);
        max_depth = max_depth.max(color.x.min(far));
    }

    let range = max_depth - min_depth;
    if !range.is_finite() || range <= 0.0 {
        log::warn!("Depth range is empty, writing a black depth map");
        image.pixels.fill(Color::ZERO);
        return;
    }

    for color in &mut image.pixels {
        let z = 1.0 - (color.x.min(far) - min_depth) / range;
        *color = Color::splat(z);
    }
}

/// Post-process an assembled frame according to the render mode.
pub fn finish_frame(image: &mut ImageBuffer, config: &RenderConfig) {
    if config.mode == RenderMode::Depth {
        normalize_depth(image, config.far);
    }
}

/// Render the entire scene to an image buffer.
///
/// This is a simple single-threaded renderer; see
/// [`render_parallel`](crate::render_parallel) for the bucketed version.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> (ImageBuffer, RayStats) {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let mut stats = RayStats::default();

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config, &mut stats);
            image.set(x, y, color);
        }
    }

    finish_frame(&mut image, config);
    (image, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyrt_core::{Light, Material, Sphere};
    use tinyrt_math::Vec3;

    #[test]
    fn test_tone_map_in_range_is_identity() {
        let c = Color::new(0.2, 0.5, 1.0);
        assert_eq!(tone_map(c), c);
        assert_eq!(color_to_rgb(c), [51, 128, 255]);
    }

    #[test]
    fn test_tone_map_keeps_hue() {
        // Red is twice the max, so everything is halved instead of clipped
        let rgb = color_to_rgb(Color::new(2.0, 1.0, 0.5));
        assert_eq!(rgb, [255, 128, 64]);
    }

    #[test]
    fn test_color_to_rgb_clamps_negative() {
        assert_eq!(color_to_rgb(Color::new(-0.5, 0.0, 0.0)), [0, 0, 0]);
    }

    #[test]
    fn test_max_depth_returns_background() {
        let config = RenderConfig::default();
        let scene = Scene::new(
            vec![Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::ivory())],
            vec![],
        );
        let mut stats = RayStats::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let c = cast_ray(&ray, &scene, config.max_depth + 1, &config, &mut stats);
        assert_eq!(c, config.background);
        assert_eq!(stats.shaded, 0);
    }

    #[test]
    fn test_miss_returns_background() {
        let config = RenderConfig::default();
        let c = trace(&Ray::new(Vec3::ZERO, Vec3::Y), &Scene::default(), &config);
        assert_eq!(c, config.background);
    }

    #[test]
    fn test_both_branches_always_recurse() {
        // The checkerboard material is opaque and non-reflective, yet a hit
        // still spawns a reflected and a refracted child ray
        let scene = Scene::default();
        let config = RenderConfig::default();
        let mut stats = RayStats::default();

        let ray = Ray::new(Vec3::new(0.0, 0.0, -20.0), Vec3::NEG_Y);
        cast_ray(&ray, &scene, 0, &config, &mut stats);

        // One primary ray plus two children that both miss
        assert_eq!(stats.shaded, 1);
        assert_eq!(stats.rays, 3);
    }

    #[test]
    fn test_recursion_depth_bounded_inside_glass() {
        let scene = Scene::new(
            vec![
                Sphere::new(Vec3::new(0.0, 0.0, -6.0), 2.0, Material::glass()),
                Sphere::new(Vec3::new(3.0, 1.0, -9.0), 2.0, Material::mirror()),
            ],
            vec![Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5)],
        );
        let config = RenderConfig::default();
        let mut stats = RayStats::default();

        cast_ray(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &scene, 0, &config, &mut stats);

        // Light trapped inside the glass keeps hitting it until the limit
        assert_eq!(stats.max_shaded_depth, config.max_depth);
        // Full binary tree of depth 5 plus its leaves at most
        assert!(stats.rays <= (1 << (config.max_depth + 2)) - 1);
    }

    #[test]
    fn test_normalize_depth() {
        let mut image = ImageBuffer::new(3, 1);
        image.set(0, 0, Color::splat(5.0));
        image.set(1, 0, Color::splat(10.0));
        image.set(2, 0, Color::splat(f32::INFINITY));

        normalize_depth(&mut image, 15.0);

        assert_eq!(image.get(0, 0), Color::ONE);
        assert!((image.get(1, 0).x - 0.5).abs() < 1e-6);
        assert_eq!(image.get(2, 0), Color::ZERO);
    }

    #[test]
    fn test_normalize_depth_degenerate_range() {
        let mut image = ImageBuffer::new(2, 1);
        image.pixels.fill(Color::splat(f32::INFINITY));
        normalize_depth(&mut image, 23.0);
        assert!(image.pixels.iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_image_buffer_rgb8() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(1, 0, Color::new(1.0, 0.0, 0.0));
        assert_eq!(image.to_rgb8(), vec![0, 0, 0, 255, 0, 0]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pixel_offset_large_frame() {
        // 65536 * 65535 does not fit in u32
        assert_eq!(pixel_offset(65536, 3, 65535), 65536 * 65535 + 3);
        assert_eq!(pixel_offset(4, 1, 2), 9);
    }
}
