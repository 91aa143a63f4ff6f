//! Automatic camera orbit with user offsets layered on top.

use glam::Vec3;

use crate::engine::Camera;
use crate::types::{CameraOffset, MIN_CAMERA_DISTANCE};

/// Circular camera path around the scene origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrbit {
    pub radius: f32,
    pub height: f32,
    /// Radians per second.
    pub speed: f32,
}

impl CameraOrbit {
    pub fn new(radius: f32, height: f32, speed: f32) -> Self {
        Self {
            radius,
            height,
            speed,
        }
    }

    /// Eye and look-at target at `time`.
    ///
    /// Panning moves eye and target together; zoom shortens the orbit radius
    /// down to [`MIN_CAMERA_DISTANCE`]; yaw shifts the orbit angle.
    pub fn eye_and_target(&self, time: f32, offset: &CameraOffset) -> (Vec3, Vec3) {
        let angle = time * self.speed + offset.yaw;
        let distance = (self.radius - offset.z).max(MIN_CAMERA_DISTANCE);
        let target = Vec3::new(offset.x, offset.y, 0.0);
        let eye = target + Vec3::new(distance * angle.sin(), self.height, distance * angle.cos());
        (eye, target)
    }

    pub fn place(&self, camera: &mut Camera, time: f32, offset: &CameraOffset) {
        let (eye, target) = self.eye_and_target(time, offset);
        camera.look_at(eye, target);
    }
}
