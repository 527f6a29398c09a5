//! Synthetic camera
//!
//! # Coordinate System
//!
//! Uses a **right-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive out of the screen (the camera looks along -Z in view space)
//!
//! A camera is defined entirely by three world-space vectors: the eye
//! position, the point it looks at, and an up hint. The view matrix is
//! derived on demand; there is no cached basis to keep in sync.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Look-at camera defined by eye position, target point and up hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Creates a camera at `eye` looking toward `target` with world +Y up.
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::UP,
        }
    }

    /// Creates a camera with an explicit up hint.
    pub fn with_up(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    /// Computes the world-to-camera view matrix.
    ///
    /// # Panics
    ///
    /// Panics if the up hint is parallel to the viewing direction; see
    /// [`Mat4::look_at`].
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target, self.up)
    }
}

/// Camera circling a target at fixed radius and height.
///
/// The eye position is a pure function of the orbit angle, so per-frame
/// animation is a single [`OrbitCamera::advance`] call.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    height: f32,
    angle: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3, radius: f32, height: f32) -> Self {
        Self {
            target,
            radius,
            height,
            angle: 0.0,
        }
    }

    /// Advances the orbit angle (radians), wrapping at a full turn.
    pub fn advance(&mut self, delta: f32) {
        self.angle = (self.angle + delta).rem_euclid(std::f32::consts::TAU);
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current eye position on the orbit circle.
    pub fn eye(&self) -> Vec3 {
        self.target
            + Vec3::new(
                self.radius * self.angle.cos(),
                self.height,
                self.radius * self.angle.sin(),
            )
    }

    /// The look-at camera for the current orbit position.
    pub fn camera(&self) -> Camera {
        Camera::new(self.eye(), self.target)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera().view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let camera = Camera::new(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO);
        let view = camera.view_matrix();
        let eye_cam = view * camera.eye;
        assert_relative_eq!(eye_cam.magnitude(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn target_lies_straight_ahead() {
        let camera = Camera::new(Vec3::new(0.0, 2.0, 4.0), Vec3::ZERO);
        let target_cam = camera.view_matrix() * camera.target;
        let distance = (camera.eye - camera.target).magnitude();

        assert_relative_eq!(target_cam.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_cam.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_cam.z, -distance, epsilon = 1e-4);
    }

    #[test]
    fn explicit_up_hint_rescues_a_vertical_eye() {
        // Looking straight down is degenerate with the default +Y up hint,
        // but fine with an explicit one.
        let camera = Camera::with_up(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let eye_cam = camera.view_matrix() * camera.eye;
        assert_relative_eq!(eye_cam.magnitude(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn orbit_keeps_constant_distance_from_target() {
        let mut orbit = OrbitCamera::new(Vec3::ZERO, 3.0, 1.5);
        let expected = orbit.eye().magnitude();

        for _ in 0..10 {
            orbit.advance(0.7);
            assert_relative_eq!(orbit.eye().magnitude(), expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn orbit_angle_wraps_at_full_turn() {
        let mut orbit = OrbitCamera::new(Vec3::ZERO, 3.0, 0.0);
        orbit.advance(std::f32::consts::TAU + 0.25);
        assert_relative_eq!(orbit.angle(), 0.25, epsilon = 1e-5);
    }
}
