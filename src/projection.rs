//! Orthographic projection parameters.
//!
//! The [`Orthographic`] struct is the single source of truth for the view
//! volume bounds. It can generate the projection matrix mapping the volume
//! onto the canonical [-1, 1]^3 clip cube.

use crate::math::mat4::Mat4;

/// Orthographic view volume.
///
/// `near` and `far` are view-space z coordinates; with a right-handed camera
/// the scene lies along negative z, so `near` is usually the larger value.
#[derive(Debug, Clone, Copy)]
pub struct Orthographic {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    near: f32,
    far: f32,
}

impl Orthographic {
    /// Creates a view volume from its bounds.
    ///
    /// # Panics
    ///
    /// Panics if any axis of the volume has zero extent (the extents are
    /// denominators in the projection matrix).
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32, near: f32, far: f32) -> Self {
        assert!(x_max != x_min, "orthographic volume has zero width");
        assert!(y_max != y_min, "orthographic volume has zero height");
        assert!(near != far, "orthographic volume has zero depth");
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            near,
            far,
        }
    }

    /// A volume centered on the view axis: x and y span `[-half_extent,
    /// half_extent]`, matching the square volumes of the cube demos.
    pub fn symmetric(half_extent: f32, near: f32, far: f32) -> Self {
        Self::new(-half_extent, half_extent, -half_extent, half_extent, near, far)
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Generates the projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic(
            self.x_min, self.x_max, self.y_min, self.y_max, self.near, self.far,
        )
    }
}
