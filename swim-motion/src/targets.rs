use bevy_log::{debug, trace};
use bevy_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::boundary::BoundaryBox;
use crate::types::{FrameTime, Rotation};

/// Computes the desired rotation of one axis for the current frame.
///
/// `previous` is the target produced before this function: the last frame's
/// final target when called by a controller, or the preceding step's output
/// inside a [`crate::Chain`].
pub trait TargetFunction: Send + Sync {
    fn target(
        &mut self,
        time: &FrameTime,
        position: Vec3,
        state: &Rotation,
        previous: Rotation,
    ) -> Rotation;
}

pub type BoxedTarget = Box<dyn TargetFunction>;

impl<F> TargetFunction for F
where
    F: FnMut(&FrameTime, Vec3, &Rotation, Rotation) -> Rotation + Send + Sync,
{
    fn target(
        &mut self,
        time: &FrameTime,
        position: Vec3,
        state: &Rotation,
        previous: Rotation,
    ) -> Rotation {
        self(time, position, state, previous)
    }
}

/// Hold the current heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl TargetFunction for Identity {
    fn target(&mut self, _: &FrameTime, _: Vec3, state: &Rotation, _: Rotation) -> Rotation {
        *state
    }
}

/// Stop rotating: keep the current angle with zero angular velocity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroVelocityTarget;

impl TargetFunction for ZeroVelocityTarget {
    fn target(&mut self, _: &FrameTime, _: Vec3, state: &Rotation, _: Rotation) -> Rotation {
        Rotation::at(state.rotation)
    }
}

/// Clamp the target angle into `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct ClampRotation {
    pub min: f32,
    pub max: f32,
}

impl ClampRotation {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl TargetFunction for ClampRotation {
    fn target(&mut self, _: &FrameTime, _: Vec3, _: &Rotation, previous: Rotation) -> Rotation {
        previous.with_rotation(previous.rotation.clamp(self.min, self.max))
    }
}

/// Point the yaw at the tank centre while outside its horizontal footprint.
#[derive(Debug, Clone)]
pub struct StayWithinBoxYaw {
    boundary: Arc<BoundaryBox>,
}

impl StayWithinBoxYaw {
    pub fn new(boundary: Arc<BoundaryBox>) -> Self {
        Self { boundary }
    }
}

impl TargetFunction for StayWithinBoxYaw {
    fn target(
        &mut self,
        _: &FrameTime,
        position: Vec3,
        _: &Rotation,
        previous: Rotation,
    ) -> Rotation {
        if !self.boundary.is_outside_xz(position) {
            return previous;
        }
        let center = self.boundary.center();
        let yaw = (center.x - position.x).atan2(center.z - position.z);
        trace!("outside tank footprint at {}, steering yaw to {:.3}", position, yaw);
        previous.with_rotation(yaw)
    }
}

/// Nudge the pitch back toward the tank while above or below it.
#[derive(Debug, Clone)]
pub struct StayWithinBoxPitch {
    boundary: Arc<BoundaryBox>,
}

impl StayWithinBoxPitch {
    pub fn new(boundary: Arc<BoundaryBox>) -> Self {
        Self { boundary }
    }
}

impl TargetFunction for StayWithinBoxPitch {
    fn target(
        &mut self,
        _: &FrameTime,
        position: Vec3,
        _: &Rotation,
        previous: Rotation,
    ) -> Rotation {
        let distance = self.boundary.signed_distance_outside_y(position);
        if distance == 0.0 {
            return previous;
        }
        let limit = std::f32::consts::FRAC_PI_2;
        previous.with_rotation((2.0 * distance).clamp(-limit, limit))
    }
}

/// Random heading offset applied once every `interval` seconds.
///
/// Owns its timer and random source, so two swimmers never share a schedule.
/// An `interval` of zero or less perturbs every frame.
#[derive(Debug, Clone)]
pub struct Perturbation {
    max_angle: f32,
    interval: f32,
    last_update: Option<f32>,
    rng: StdRng,
}

impl Perturbation {
    pub fn new(max_angle: f32, interval: f32) -> Self {
        Self::from_rng(max_angle, interval, StdRng::from_entropy())
    }

    pub fn seeded(max_angle: f32, interval: f32, seed: u64) -> Self {
        Self::from_rng(max_angle, interval, StdRng::seed_from_u64(seed))
    }

    fn from_rng(max_angle: f32, interval: f32, rng: StdRng) -> Self {
        Self {
            max_angle: max_angle.abs(),
            interval,
            last_update: None,
            rng,
        }
    }

    pub fn last_update(&self) -> Option<f32> {
        self.last_update
    }

    fn is_due(&self, elapsed: f32) -> bool {
        match self.last_update {
            None => true,
            Some(_) if self.interval <= 0.0 => true,
            Some(last) => elapsed - last > self.interval,
        }
    }

    fn sample_offset(&mut self) -> f32 {
        if self.max_angle == 0.0 {
            0.0
        } else {
            self.rng.gen_range(-self.max_angle..=self.max_angle)
        }
    }
}

impl TargetFunction for Perturbation {
    fn target(
        &mut self,
        time: &FrameTime,
        _: Vec3,
        _: &Rotation,
        previous: Rotation,
    ) -> Rotation {
        if !self.is_due(time.elapsed) {
            return previous;
        }
        self.last_update = Some(time.elapsed);
        let offset = self.sample_offset();
        debug!("perturbing target by {:.3} rad at t={:.2}s", offset, time.elapsed);
        previous.with_rotation(previous.rotation + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn tank() -> Arc<BoundaryBox> {
        Arc::new(BoundaryBox::cube(Vec3::ZERO, 5.0).unwrap())
    }

    /// Evaluate `function` with a resting state at `elapsed` seconds.
    fn call(
        function: &mut impl TargetFunction,
        elapsed: f32,
        position: Vec3,
        previous: Rotation,
    ) -> Rotation {
        let time = FrameTime::new(elapsed, 0.016);
        function.target(&time, position, &Rotation::default(), previous)
    }

    #[test]
    fn test_identity_returns_state() {
        let state = Rotation::new(0.3, 1.2);
        let time = FrameTime::new(0.0, 0.016);
        let target = Identity.target(&time, Vec3::ZERO, &state, Rotation::at(2.0));
        assert_eq!(target, state);
    }

    #[test]
    fn test_zero_velocity_keeps_angle() {
        let state = Rotation::new(0.3, 1.2);
        let time = FrameTime::new(0.0, 0.016);
        let target = ZeroVelocityTarget.target(&time, Vec3::ZERO, &state, Rotation::at(2.0));
        assert_eq!(target, Rotation::new(0.3, 0.0));
    }

    #[test]
    fn test_clamp_passes_velocity_through() {
        let mut clamp = ClampRotation::new(-FRAC_PI_2, FRAC_PI_2);
        let target = call(&mut clamp, 0.0, Vec3::ZERO, Rotation::new(3.0, 0.7));
        assert_eq!(target, Rotation::new(FRAC_PI_2, 0.7));
    }

    #[test]
    fn test_yaw_inside_passes_previous_through() {
        let mut yaw = StayWithinBoxYaw::new(tank());
        let previous = Rotation::new(1.0, 0.5);
        let target = call(&mut yaw, 0.0, Vec3::new(4.0, 0.0, 4.0), previous);
        assert_eq!(target, previous);
    }

    #[test]
    fn test_yaw_outside_points_to_center() {
        let mut yaw = StayWithinBoxYaw::new(tank());
        let target = call(&mut yaw, 0.0, Vec3::new(0.0, 0.0, 6.0), Rotation::new(0.0, 0.25));
        assert!((target.rotation.abs() - PI).abs() < 1e-6, "got {}", target.rotation);
        assert_eq!(target.rotation_velocity, 0.25);
    }

    #[test]
    fn test_pitch_nudge_saturates() {
        let mut pitch = StayWithinBoxPitch::new(tank());
        let slightly_above = call(&mut pitch, 0.0, Vec3::new(0.0, 5.1, 0.0), Rotation::default());
        assert!((slightly_above.rotation - 0.2).abs() < 1e-4);
        let far_below = call(&mut pitch, 0.0, Vec3::new(0.0, -20.0, 0.0), Rotation::default());
        assert_eq!(far_below.rotation, -FRAC_PI_2);
    }

    #[test]
    fn test_pitch_inside_passes_previous_through() {
        let mut pitch = StayWithinBoxPitch::new(tank());
        let previous = Rotation::new(-0.3, 0.1);
        assert_eq!(call(&mut pitch, 0.0, Vec3::new(0.0, 4.9, 0.0), previous), previous);
    }

    #[test]
    fn test_perturbation_respects_interval() {
        let mut perturbation = Perturbation::seeded(0.5, 1.0, 7);
        let start = call(&mut perturbation, 0.1, Vec3::ZERO, Rotation::default());
        assert!(start.rotation.abs() <= 0.5);
        assert_eq!(perturbation.last_update(), Some(0.1));

        let held = call(&mut perturbation, 0.9, Vec3::ZERO, Rotation::at(1.0));
        assert_eq!(held.rotation, 1.0);

        call(&mut perturbation, 1.2, Vec3::ZERO, Rotation::at(1.0));
        assert_eq!(perturbation.last_update(), Some(1.2));
    }

    #[test]
    fn test_perturbation_waits_strictly_longer_than_interval() {
        let mut perturbation = Perturbation::seeded(0.5, 1.0, 7);
        call(&mut perturbation, 0.25, Vec3::ZERO, Rotation::default());
        assert_eq!(perturbation.last_update(), Some(0.25));

        // Exactly one interval later is not yet due.
        let held = call(&mut perturbation, 1.25, Vec3::ZERO, Rotation::at(1.0));
        assert_eq!(held, Rotation::at(1.0));
        assert_eq!(perturbation.last_update(), Some(0.25));

        call(&mut perturbation, 1.375, Vec3::ZERO, Rotation::at(1.0));
        assert_eq!(perturbation.last_update(), Some(1.375));
    }

    #[test]
    fn test_non_positive_interval_fires_every_frame() {
        let mut perturbation = Perturbation::seeded(0.5, 0.0, 7);
        for step in 0..5 {
            let elapsed = step as f32 * 0.016;
            call(&mut perturbation, elapsed, Vec3::ZERO, Rotation::default());
            assert_eq!(perturbation.last_update(), Some(elapsed));
        }
    }

    #[test]
    fn test_zero_amplitude_is_deterministic() {
        let mut perturbation = Perturbation::new(0.0, 1.0);
        let target = call(&mut perturbation, 0.0, Vec3::ZERO, Rotation::new(0.4, 0.1));
        assert_eq!(target, Rotation::new(0.4, 0.1));
    }

    #[test]
    fn test_seeded_perturbations_repeat() {
        let mut first = Perturbation::seeded(1.0, 1.0, 99);
        let mut second = Perturbation::seeded(1.0, 1.0, 99);
        let a = call(&mut first, 0.0, Vec3::ZERO, Rotation::default());
        let b = call(&mut second, 0.0, Vec3::ZERO, Rotation::default());
        assert_eq!(a, b);
    }
}
