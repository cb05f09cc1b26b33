//! Camera pose and its camera-to-world transform.

use lumen_math::{Affine3A, EulerRot, Quat, Vec3};
use std::f32::consts::TAU;

/// A pinhole camera.
///
/// Holds position, field of view, and an orthonormal basis; the packed
/// 3x4 `camera_to_world` transform maps camera-space ray directions
/// (x right, y up, z forward) into world space. The basis and
/// transform are rebuilt by [`Camera::calculate_camera_to_world`],
/// which every pose setter calls.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    /// Field-of-view angle in degrees
    pub fov_angle: f32,

    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,

    pub total_pitch: f32,
    pub total_yaw: f32,

    pub camera_to_world: Affine3A,
}

impl Camera {
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        let mut camera = Self {
            origin,
            fov_angle,
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            total_pitch: 0.0,
            total_yaw: 0.0,
            camera_to_world: Affine3A::IDENTITY,
        };
        camera.calculate_camera_to_world();
        camera
    }

    /// Half-FOV scale factor applied to screen-space coordinates.
    pub fn fov_scale(&self) -> f32 {
        (self.fov_angle.to_radians() / 2.0).tan()
    }

    /// Re-derive the orthonormal basis from `forward` against world up
    /// and pack origin + basis into the camera-to-world transform.
    pub fn calculate_camera_to_world(&mut self) -> Affine3A {
        self.right = Vec3::Y.cross(self.forward).normalize();
        self.up = self.forward.cross(self.right).normalize();

        self.camera_to_world = Affine3A::from_cols(
            self.right.into(),
            self.up.into(),
            self.forward.into(),
            self.origin.into(),
        );
        self.camera_to_world
    }

    /// Move the camera to a new position.
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
        self.calculate_camera_to_world();
    }

    /// Accumulate pitch/yaw and rebuild the forward vector.
    pub fn rotate(&mut self, pitch_delta: f32, yaw_delta: f32) {
        self.total_pitch = (self.total_pitch + pitch_delta).rem_euclid(TAU);
        self.total_yaw = (self.total_yaw + yaw_delta).rem_euclid(TAU);

        let rotation = Quat::from_euler(EulerRot::YXZ, self.total_yaw, self.total_pitch, 0.0);
        self.forward = (rotation * Vec3::Z).normalize();
        self.calculate_camera_to_world();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_basis_is_axis_aligned() {
        let camera = Camera::new(Vec3::ZERO, 90.0);
        assert!((camera.right - Vec3::X).length() < 0.001);
        assert!((camera.up - Vec3::Y).length() < 0.001);
        assert!((camera.forward - Vec3::Z).length() < 0.001);
    }

    #[test]
    fn test_fov_scale() {
        let camera = Camera::new(Vec3::ZERO, 90.0);
        assert!((camera.fov_scale() - 1.0).abs() < 0.001);

        let narrow = Camera::new(Vec3::ZERO, 45.0);
        assert!(narrow.fov_scale() < 1.0);
    }

    #[test]
    fn test_transform_is_rotation_only_for_directions() {
        let camera = Camera::new(Vec3::new(3.0, -2.0, 7.0), 45.0);
        let dir = camera.camera_to_world.transform_vector3(Vec3::Z);
        // Direction transform ignores the origin
        assert!((dir - Vec3::Z).length() < 0.001);

        let point = camera.camera_to_world.transform_point3(Vec3::ZERO);
        assert!((point - camera.origin).length() < 0.001);
    }

    #[test]
    fn test_rotate_yaw_quarter_turn() {
        let mut camera = Camera::new(Vec3::ZERO, 90.0);
        camera.rotate(0.0, std::f32::consts::FRAC_PI_2);

        // Quarter turn around +Y swings forward from +Z to +X
        assert!((camera.forward - Vec3::X).length() < 0.001);

        // Basis stays orthonormal
        assert!(camera.right.dot(camera.up).abs() < 0.001);
        assert!(camera.right.dot(camera.forward).abs() < 0.001);
        assert!((camera.up.length() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_rotation_accumulates_and_wraps() {
        let mut camera = Camera::new(Vec3::ZERO, 90.0);
        camera.rotate(0.0, TAU + 0.5);
        assert!((camera.total_yaw - 0.5).abs() < 0.001);
    }
}
