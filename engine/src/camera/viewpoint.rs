//! Viewpoint State
//!
//! Orientation, position and scale of the single flying viewpoint, plus
//! the transforms derived from them.
//!
//! Orientation is stored as Euler angles in degrees. The forward transform
//! applies pitch (X), then yaw (Y), then roll (Z):
//! `model_view = S(scale) * Rz(roll) * Ry(yaw) * Rx(pitch) * T(-position)`.
//! The camera looks down local -Z.

use glam::{Mat4, Vec3, Vec4};

/// Mutable state of the flying viewpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewpointState {
    /// Rotation about X (degrees)
    pub pitch: f32,
    /// Rotation about Y (degrees)
    pub yaw: f32,
    /// Rotation about Z (degrees)
    pub roll: f32,
    /// Eye position in terrain model space
    pub position: Vec3,
    /// Uniform scale of the whole scene
    pub scale: f32,
}

impl Default for ViewpointState {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            position: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl ViewpointState {
    /// `Rz(roll) * Ry(yaw) * Rx(pitch)`
    pub fn orientation(&self) -> Mat4 {
        Mat4::from_rotation_z(self.roll.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians())
            * Mat4::from_rotation_x(self.pitch.to_radians())
    }

    /// `Rz(-roll) * Ry(-yaw) * Rx(-pitch)`: takes view-local directions into
    /// model space.
    pub fn inverse_orientation(&self) -> Mat4 {
        Mat4::from_rotation_z(-self.roll.to_radians())
            * Mat4::from_rotation_y(-self.yaw.to_radians())
            * Mat4::from_rotation_x(-self.pitch.to_radians())
    }

    /// Model-space vector for a displacement of `delta` along local Z.
    pub fn local_z_to_model(&self, delta: f32) -> Vec3 {
        (self.inverse_orientation() * Vec4::new(0.0, 0.0, delta, 0.0)).truncate()
    }

    /// Transform from terrain model space into view space.
    pub fn model_view(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale))
            * self.orientation()
            * Mat4::from_translation(-self.position)
    }
}
