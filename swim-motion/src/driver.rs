use bevy_log::debug;
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::chain::{Chain, Motion};
use crate::control::{OrientationController, PositionController, RotationController};
use crate::targets::ClampRotation;
use crate::types::{FrameTime, Gains, Orientation, Rotation};

/// Live-tunable parameters read at the start of every driver update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionTuning {
    pub gains: Orientation<Gains>,
    pub speed: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            gains: Orientation::splat(Gains::default()),
            speed: 1.0,
        }
    }
}

/// Result of one frame: where the swimmer is and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    pub position: Vec3,
    pub yaw: Rotation,
    pub pitch: Rotation,
}

/// Owns a swimmer's controllers and advances them once per frame.
///
/// Pitch targets are always clamped to `[-PI/2, PI/2]` after the swimmer's
/// own pitch behaviour, so the heading never flips over the vertical.
pub struct MotionDriver {
    orientation: OrientationController,
    position: PositionController,
    tuning: MotionTuning,
}

impl MotionDriver {
    pub fn new(
        initial_position: Vec3,
        initial: Orientation<Rotation>,
        motion: Motion,
        tuning: MotionTuning,
    ) -> Self {
        let Motion { yaw, pitch } = motion;
        let clamped_pitch =
            Chain::new(vec![pitch]).then(ClampRotation::new(-FRAC_PI_2, FRAC_PI_2));

        let orientation = OrientationController::new(
            RotationController::from_boxed(initial.yaw, yaw, tuning.gains.yaw),
            RotationController::new(initial.pitch, clamped_pitch, tuning.gains.pitch),
        );
        debug!(
            "motion driver created at {} (yaw {:.3}, pitch {:.3})",
            initial_position, initial.yaw.rotation, initial.pitch.rotation
        );

        Self {
            orientation,
            position: PositionController::new(initial_position, tuning.speed),
            tuning,
        }
    }

    /// Advance one frame with the driver's own tuning.
    pub fn update(&mut self, time: FrameTime) -> MotionState {
        let orientation = self.orientation.update(&time, self.position.position());
        let position = self
            .position
            .update(&time, &orientation.yaw, &orientation.pitch);
        MotionState {
            position,
            yaw: orientation.yaw,
            pitch: orientation.pitch,
        }
    }

    /// Adopt `tuning` (if it changed) and advance one frame.
    pub fn update_with(&mut self, time: FrameTime, tuning: &MotionTuning) -> MotionState {
        self.set_tuning(*tuning);
        self.update(time)
    }

    pub fn set_tuning(&mut self, tuning: MotionTuning) {
        if tuning == self.tuning {
            return;
        }
        self.orientation.set_gains(tuning.gains);
        self.position.set_speed(tuning.speed);
        self.tuning = tuning;
    }

    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    /// Current state without advancing.
    pub fn state(&self) -> MotionState {
        let orientation = self.orientation.state();
        MotionState {
            position: self.position.position(),
            yaw: orientation.yaw,
            pitch: orientation.pitch,
        }
    }

    /// Single-closure form for hosts that only want a per-frame callback.
    pub fn into_callback(mut self) -> impl FnMut(FrameTime) -> MotionState + Send + Sync {
        move |time| self.update(time)
    }
}

impl std::fmt::Debug for MotionDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionDriver")
            .field("state", &self.state())
            .field("tuning", &self.tuning)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::TargetFunction;

    fn steer_to(value: f32) -> impl TargetFunction {
        move |_: &FrameTime, _: Vec3, _: &Rotation, previous: Rotation| -> Rotation {
            previous.with_rotation(value)
        }
    }

    #[test]
    fn test_straight_swim_advances_along_z() {
        let mut driver = MotionDriver::new(
            Vec3::ZERO,
            Orientation::default(),
            Motion::identity(),
            MotionTuning::default(),
        );
        let mut time = FrameTime::default();
        for _ in 0..100 {
            time = time.step(0.01);
            driver.update(time);
        }
        let state = driver.state();
        assert!(state.position.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-4));
        assert_eq!(state.yaw, Rotation::default());
    }

    #[test]
    fn test_pitch_target_is_clamped() {
        let motion = Motion::new(steer_to(0.0), steer_to(3.0));
        let mut driver = MotionDriver::new(
            Vec3::ZERO,
            Orientation::default(),
            motion,
            MotionTuning {
                gains: Orientation::splat(Gains::new(4.0, 4.0)),
                speed: 0.0,
            },
        );
        let mut time = FrameTime::default();
        for _ in 0..2000 {
            time = time.step(0.01);
            driver.update(time);
        }
        let pitch = driver.state().pitch.rotation;
        assert!((pitch - FRAC_PI_2).abs() < 1e-2, "pitch settled at {pitch}");
    }

    #[test]
    fn test_update_with_applies_new_speed() {
        let mut driver = MotionDriver::new(
            Vec3::ZERO,
            Orientation::default(),
            Motion::identity(),
            MotionTuning::default(),
        );
        let fast = MotionTuning {
            speed: 3.0,
            ..MotionTuning::default()
        };
        let state = driver.update_with(FrameTime::new(1.0, 1.0), &fast);
        assert!((state.position.z - 3.0).abs() < 1e-5);
        assert_eq!(driver.tuning().speed, 3.0);
    }

    #[test]
    fn test_callback_matches_driver() {
        let build = || {
            MotionDriver::new(
                Vec3::new(1.0, 2.0, 3.0),
                Orientation::new(Rotation::new(0.2, 0.1), Rotation::at(-0.3)),
                Motion::new(steer_to(1.0), steer_to(0.2)),
                MotionTuning::default(),
            )
        };
        let mut driver = build();
        let mut callback = build().into_callback();
        let mut time = FrameTime::default();
        for _ in 0..50 {
            time = time.step(0.016);
            assert_eq!(driver.update(time), callback(time));
        }
    }
}
