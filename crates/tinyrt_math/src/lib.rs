// Re-export glam for convenience
pub use glam::*;

// tinyrt math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Color type alias (linear RGB, nominally 0-1 but unclamped)
pub type Color = Vec3;
