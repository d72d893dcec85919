//! View orientation of the body.
//!
//! Yaw is cyclic and wraps into `[-180, 180)`; pitch is clamped to `[-90, 90]`.
//! Both are stored in degrees.

use crate::{
    collision::Vec3,
    constants::{DEFAULT_PITCH, DEFAULT_YAW, MAX_PITCH},
    utils::wrap_degrees,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    yaw: f32,
    pitch: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Orientation {
    /// Build from arbitrary angles, wrapping yaw and clamping pitch.
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw: wrap_yaw(yaw),
            pitch: clamp_pitch(pitch),
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a look delta in degrees.
    pub fn turn(&mut self, dx: f32, dy: f32) {
        self.yaw = wrap_yaw(self.yaw + dx);
        self.pitch = clamp_pitch(self.pitch + dy);
    }

    /// Unit view direction.
    ///
    /// The sign convention matches the paired camera: yaw 0 with level pitch looks down -Z,
    /// yaw 90 looks down +X, pitch 90 looks straight down.
    pub fn look_vector(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = (-self.yaw).to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = (-self.pitch).to_radians().sin_cos();
        Vec3::new(sin_yaw * -cos_pitch, sin_pitch, cos_yaw * -cos_pitch)
    }
}

#[inline]
fn wrap_yaw(yaw: f32) -> f32 {
    wrap_degrees(yaw, -180.0, 180.0)
}

#[inline]
fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-MAX_PITCH, MAX_PITCH)
}
