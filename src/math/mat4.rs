//! 4x4 transformation matrix using column-vector convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! The viewing pipeline always composes `projection * view * model`, so the
//! model transform is applied first and the projection last.
//!
//! # Example
//! ```ignore
//! let transform = rotation * scale;  // scale applied first, then rotation
//! let result = transform * vertex;   // transform the vertex
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]` with column-vector convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation lands in the last column (column-vector convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a right-handed rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a right-handed rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a right-handed rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds the world-to-camera view matrix for a synthetic camera.
    ///
    /// The camera basis is derived from the eye position, a look-at target
    /// and an up hint:
    /// - `n = normalize(eye - target)` points backward, away from the scene
    /// - `u = normalize(up × n)` points right
    /// - `v = n × u` is the true camera up
    ///
    /// The result is `R * T`: the world is translated so the eye sits at the
    /// origin, then rotated into the `{u, v, n}` basis. The camera looks
    /// along `-n`, so visible geometry has negative view-space z.
    ///
    /// # Panics
    ///
    /// Panics if `up` is parallel to the viewing direction; the basis is
    /// undefined in that case and the caller must supply a different up
    /// vector.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let n = (eye - target).normalize();
        let u_raw = up.cross(n);
        assert!(
            u_raw.magnitude() > 1e-6,
            "look_at: up vector is parallel to the viewing direction"
        );
        let u = u_raw.normalize();
        let v = n.cross(u);

        // Rows are the basis vectors, last column is the rotated -eye.
        Mat4::new([
            [u.x, u.y, u.z, -u.dot(eye)],
            [v.x, v.y, v.z, -v.dot(eye)],
            [n.x, n.y, n.z, -n.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds an orthographic projection mapping the rectangular view volume
    /// onto the canonical cube [-1, 1]^3.
    ///
    /// `near` and `far` are view-space z coordinates of the volume bounds;
    /// for a camera built with [`Mat4::look_at`] the scene lies along
    /// negative z, so a typical volume is `near = 0.0, far = -10.0`.
    ///
    /// # Panics
    ///
    /// Panics if any axis of the volume has zero extent.
    pub fn orthographic(
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
        near: f32,
        far: f32,
    ) -> Self {
        assert!(x_max != x_min, "orthographic: zero-width view volume");
        assert!(y_max != y_min, "orthographic: zero-height view volume");
        assert!(near != far, "orthographic: zero-depth view volume");

        Mat4::new([
            [
                2.0 / (x_max - x_min),
                0.0,
                0.0,
                -(x_max + x_min) / (x_max - x_min),
            ],
            [
                0.0,
                2.0 / (y_max - y_min),
                0.0,
                -(y_max + y_min) / (y_max - y_min),
            ],
            [0.0, 0.0, -2.0 / (near - far), (near + far) / (near - far)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-vector convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        Vec4::new(
            self.data[0][0] * v.x
                + self.data[0][1] * v.y
                + self.data[0][2] * v.z
                + self.data[0][3] * v.w,
            self.data[1][0] * v.x
                + self.data[1][1] * v.y
                + self.data[1][2] * v.z
                + self.data[1][3] * v.w,
            self.data[2][0] * v.x
                + self.data[2][1] * v.y
                + self.data[2][2] * v.z
                + self.data[2][3] * v.w,
            self.data[3][0] * v.x
                + self.data[3][1] * v.y
                + self.data[3][2] * v.z
                + self.data[3][3] * v.w,
        )
    }
}

/// Transform a point: Mat4 * Vec3 (treats Vec3 as column vector with w=1).
///
/// Applies the homogeneous divide if w != 1.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        (self * Vec4::from_point(v)).to_cartesian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(a.get(row, col), b.get(row, col), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let m = Mat4::translation(3.0, -2.0, 7.5)
            * Mat4::rotation_y(0.3)
            * Mat4::scaling(2.0, 1.0, 0.5);

        assert_mat_eq(Mat4::identity() * m, m);
        assert_mat_eq(m * Mat4::identity(), m);
    }

    #[test]
    fn translation_moves_a_point() {
        let p = Mat4::translation(1.0, 2.0, 3.0) * Vec3::new(10.0, 20.0, 30.0);
        assert_eq!(p, Vec3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn rotation_z_quarter_turn_sends_x_to_y() {
        let p = Mat4::rotation_z(FRAC_PI_2) * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn composition_applies_rightmost_first() {
        // Scale then translate: the scaled point ends up offset, not the offset scaled.
        let m = Mat4::translation(10.0, 0.0, 0.0) * Mat4::scaling(2.0, 2.0, 2.0);
        let p = m * Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(p, Vec3::new(12.0, 2.0, 2.0));
    }

    #[test]
    fn look_at_sends_eye_to_origin_and_target_down_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);

        let eye_cam = view * eye;
        assert_relative_eq!(eye_cam.magnitude(), 0.0, epsilon = 1e-5);

        let target_cam = view * Vec3::ZERO;
        assert_relative_eq!(target_cam.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_cam.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_cam.z, -5.0, epsilon = 1e-5);
    }

    #[test]
    fn look_at_basis_is_orthonormal() {
        let view = Mat4::look_at(Vec3::new(3.0, 1.5, 3.0), Vec3::ZERO, Vec3::UP);
        for row in 0..3 {
            let r = Vec3::new(view.get(row, 0), view.get(row, 1), view.get(row, 2));
            assert_relative_eq!(r.magnitude(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    #[should_panic(expected = "parallel")]
    fn look_at_rejects_degenerate_up() {
        let _ = Mat4::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::UP);
    }

    #[test]
    fn orthographic_maps_volume_corners_to_unit_cube() {
        let m = Mat4::orthographic(-2.0, 2.0, -1.0, 1.0, 0.0, -10.0);

        let near_corner = m * Vec3::new(-2.0, -1.0, 0.0);
        assert_relative_eq!(near_corner.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(near_corner.y, -1.0, epsilon = 1e-6);
        assert_relative_eq!(near_corner.z, -1.0, epsilon = 1e-6);

        let far_corner = m * Vec3::new(2.0, 1.0, -10.0);
        assert_relative_eq!(far_corner.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(far_corner.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(far_corner.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "zero-depth")]
    fn orthographic_rejects_zero_depth_volume() {
        let _ = Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, 2.0, 2.0);
    }

    #[test]
    fn view_projection_places_eye_outside_and_target_near_center() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let target = Vec3::ZERO;
        let view = Mat4::look_at(eye, target, Vec3::UP);
        let proj = Mat4::orthographic(-2.0, 2.0, -2.0, 2.0, -0.1, -10.0);
        let view_proj = proj * view;

        // The eye itself sits behind the near plane.
        let eye_clip = view_proj * eye;
        assert!(eye_clip.z <= -1.0);

        // The target lands on the view axis, centered in x/y.
        let target_clip = view_proj * target;
        assert_relative_eq!(target_clip.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_clip.y, 0.0, epsilon = 1e-5);
        assert!(target_clip.z.abs() < 0.1);
    }
}
