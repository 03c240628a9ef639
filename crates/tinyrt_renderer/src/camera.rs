//! Pinhole camera for primary ray generation.

use tinyrt_math::{Ray, Vec3};

/// Camera looking down -Z from `position`, +Y up.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    position: Vec3,

    // Lens settings
    fov: f32, // Field of view in degrees, spanning the image height

    // Cached computed values (set by initialize())
    half_width: f32,
    half_height: f32,
    image_plane_z: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 1024,
            image_height: 768,
            position: Vec3::ZERO,
            fov: 60.0,
            half_width: 0.0,
            half_height: 0.0,
            image_plane_z: 0.0,
        };
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.initialize();
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self.initialize();
        self
    }

    /// Camera position (origin of every primary ray).
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Recompute the cached image-plane values.
    fn initialize(&mut self) {
        self.half_width = self.image_width as f32 / 2.0;
        self.half_height = self.image_height as f32 / 2.0;
        let half_angle = self.fov.to_radians() / 2.0;
        self.image_plane_z = -(self.image_height as f32) / (2.0 * half_angle.tan());
    }

    /// Unnormalized direction through the center of pixel (i, j).
    ///
    /// Row 0 is the top of the image, so y is flipped.
    pub fn pixel_direction(&self, i: u32, j: u32) -> Vec3 {
        let x = (i as f32 + 0.5) - self.half_width;
        let y = -(j as f32 + 0.5) + self.half_height;
        Vec3::new(x, y, self.image_plane_z)
    }

    /// Generate the primary ray for pixel (i, j).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(self.position, self.pixel_direction(i, j))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::new();
        assert_eq!(camera.image_width, 1024);
        assert_eq!(camera.image_height, 768);
        assert_eq!(camera.fov(), 60.0);
        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn test_pixel_direction_matches_pinhole_formula() {
        let camera = Camera::new().with_resolution(4, 2).with_fov(90.0);

        // tan(45 deg) = 1 so the image plane sits at z = -H/2
        let d = camera.pixel_direction(0, 0);
        assert!((d - Vec3::new(-1.5, 0.5, -1.0)).length() < 1e-5);

        let d = camera.pixel_direction(3, 1);
        assert!((d - Vec3::new(1.5, -0.5, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_center_ray_points_forward() {
        let camera = Camera::new().with_resolution(101, 101);
        let ray = camera.get_ray(50, 50);

        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_top_row_points_up() {
        let camera = Camera::new().with_resolution(64, 48);
        assert!(camera.get_ray(32, 0).direction().y > 0.0);
        assert!(camera.get_ray(32, 47).direction().y < 0.0);
        assert!(camera.get_ray(0, 24).direction().x < 0.0);
    }

    #[test]
    fn test_camera_position() {
        let origin = Vec3::new(0.0, 1.0, 2.0);
        let camera = Camera::new().with_position(origin);
        assert_eq!(camera.get_ray(10, 10).origin(), origin);
    }
}
