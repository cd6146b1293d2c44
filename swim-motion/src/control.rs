use bevy_math::Vec3;

use crate::angle::{heading, shortest_signed_angle_delta};
use crate::targets::{BoxedTarget, TargetFunction};
use crate::types::{FrameTime, Gains, Orientation, Rotation};

/// PD feedback on one rotational axis.
///
/// Each update asks the target function for the desired rotation, then
/// integrates the angular velocity by the gain-weighted angle and velocity
/// errors. The angle error always takes the short way around.
pub struct RotationController {
    state: Rotation,
    target: Rotation,
    get_target: BoxedTarget,
    gains: Gains,
}

impl RotationController {
    pub fn new(initial: Rotation, get_target: impl TargetFunction + 'static, gains: Gains) -> Self {
        Self::from_boxed(initial, Box::new(get_target), gains)
    }

    pub fn from_boxed(initial: Rotation, get_target: BoxedTarget, gains: Gains) -> Self {
        Self {
            state: initial,
            target: initial,
            get_target,
            gains,
        }
    }

    pub fn update(&mut self, time: &FrameTime, position: Vec3) -> Rotation {
        self.target = self
            .get_target
            .target(time, position, &self.state, self.target);

        let error_rotation = shortest_signed_angle_delta(self.target.rotation, self.state.rotation);
        let error_rotation_velocity = self.target.rotation_velocity - self.state.rotation_velocity;

        let input = self.gains.rotation * error_rotation
            + self.gains.rotation_velocity * error_rotation_velocity;

        self.state.rotation_velocity += time.delta * input;
        self.state.rotation += time.delta * self.state.rotation_velocity;

        self.state
    }

    pub fn state(&self) -> Rotation {
        self.state
    }

    /// Target computed by the most recent update.
    pub fn target(&self) -> Rotation {
        self.target
    }

    pub fn gains(&self) -> Gains {
        self.gains
    }

    pub fn set_gains(&mut self, gains: Gains) {
        self.gains = gains;
    }
}

/// Yaw and pitch controllers advanced against the same frame snapshot.
pub struct OrientationController {
    yaw: RotationController,
    pitch: RotationController,
}

impl OrientationController {
    pub fn new(yaw: RotationController, pitch: RotationController) -> Self {
        Self { yaw, pitch }
    }

    /// Yaw first, then pitch, both reading the same `time` and `position`.
    pub fn update(&mut self, time: &FrameTime, position: Vec3) -> Orientation<Rotation> {
        let yaw = self.yaw.update(time, position);
        let pitch = self.pitch.update(time, position);
        Orientation::new(yaw, pitch)
    }

    pub fn state(&self) -> Orientation<Rotation> {
        Orientation::new(self.yaw.state(), self.pitch.state())
    }

    pub fn set_gains(&mut self, gains: Orientation<Gains>) {
        self.yaw.set_gains(gains.yaw);
        self.pitch.set_gains(gains.pitch);
    }
}

/// Moves a position along the current heading at a fixed speed.
#[derive(Debug, Clone)]
pub struct PositionController {
    position: Vec3,
    speed: f32,
}

impl PositionController {
    pub fn new(initial: Vec3, speed: f32) -> Self {
        Self {
            position: initial,
            speed,
        }
    }

    pub fn update(&mut self, time: &FrameTime, yaw: &Rotation, pitch: &Rotation) -> Vec3 {
        let direction = heading(yaw.rotation, pitch.rotation);
        self.position += direction * (self.speed * time.delta);
        self.position
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}
