use bevy_math::Vec3;
use std::sync::Arc;

use crate::boundary::BoundaryBox;
use crate::targets::{
    BoxedTarget, Identity, Perturbation, StayWithinBoxPitch, StayWithinBoxYaw, TargetFunction,
    ZeroVelocityTarget,
};
use crate::types::{FrameTime, Orientation, Rotation};

/// Left fold over target functions: each step refines the previous step's output.
///
/// Later steps win, so containment placed after perturbation overrides it near the walls.
#[derive(Default)]
pub struct Chain {
    steps: Vec<BoxedTarget>,
}

impl Chain {
    pub fn new(steps: Vec<BoxedTarget>) -> Self {
        Self { steps }
    }

    pub fn then(mut self, step: impl TargetFunction + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl TargetFunction for Chain {
    fn target(
        &mut self,
        time: &FrameTime,
        position: Vec3,
        state: &Rotation,
        previous: Rotation,
    ) -> Rotation {
        self.steps.iter_mut().fold(previous, |reduced, step| {
            step.target(time, position, state, reduced)
        })
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain").field("steps", &self.steps.len()).finish()
    }
}

/// Steering behaviour for both axes of a swimmer.
pub struct Motion {
    pub yaw: BoxedTarget,
    pub pitch: BoxedTarget,
}

impl Motion {
    pub fn new(yaw: impl TargetFunction + 'static, pitch: impl TargetFunction + 'static) -> Self {
        Self {
            yaw: Box::new(yaw),
            pitch: Box::new(pitch),
        }
    }

    pub fn identity() -> Self {
        Self::new(Identity, Identity)
    }

    pub fn zero_velocity() -> Self {
        Self::new(ZeroVelocityTarget, ZeroVelocityTarget)
    }

    /// Keep the swimmer inside `boundary`: XZ drives yaw, Y drives pitch.
    pub fn stay_within_box(boundary: Arc<BoundaryBox>) -> Self {
        Self::new(
            StayWithinBoxYaw::new(Arc::clone(&boundary)),
            StayWithinBoxPitch::new(boundary),
        )
    }

    pub fn perturbation(max_angle: Orientation<f32>, interval: f32) -> Self {
        Self::new(
            Perturbation::new(max_angle.yaw, interval),
            Perturbation::new(max_angle.pitch, interval),
        )
    }

    /// Reproducible perturbation; the pitch stream is derived from `seed + 1`.
    pub fn perturbation_seeded(max_angle: Orientation<f32>, interval: f32, seed: u64) -> Self {
        Self::new(
            Perturbation::seeded(max_angle.yaw, interval, seed),
            Perturbation::seeded(max_angle.pitch, interval, seed.wrapping_add(1)),
        )
    }

    /// Chain yaw and pitch functions independently, keeping list order.
    pub fn chain(motions: Vec<Motion>) -> Self {
        let (yaw, pitch): (Vec<BoxedTarget>, Vec<BoxedTarget>) =
            motions.into_iter().map(|m| (m.yaw, m.pitch)).unzip();
        Self::new(Chain::new(yaw), Chain::new(pitch))
    }
}

impl std::fmt::Debug for Motion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Motion").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_rotation(value: f32) -> impl TargetFunction {
        move |_: &FrameTime, _: Vec3, _: &Rotation, previous: Rotation| -> Rotation {
            previous.with_rotation(value)
        }
    }

    fn add_rotation(value: f32) -> impl TargetFunction {
        move |_: &FrameTime, _: Vec3, _: &Rotation, previous: Rotation| -> Rotation {
            previous.with_rotation(previous.rotation + value)
        }
    }

    fn evaluate(function: &mut dyn TargetFunction, previous: Rotation) -> Rotation {
        function.target(&FrameTime::default(), Vec3::ZERO, &Rotation::default(), previous)
    }

    #[test]
    fn test_empty_chain_passes_previous_through() {
        let mut chain = Chain::default();
        assert!(chain.is_empty());
        let previous = Rotation::new(0.7, -0.2);
        assert_eq!(evaluate(&mut chain, previous), previous);
    }

    #[test]
    fn test_later_steps_see_earlier_output() {
        let mut chain = Chain::default().then(set_rotation(1.0)).then(add_rotation(0.5));
        assert_eq!(chain.len(), 2);
        assert_eq!(evaluate(&mut chain, Rotation::default()).rotation, 1.5);

        let mut reversed = Chain::default().then(add_rotation(0.5)).then(set_rotation(1.0));
        assert_eq!(evaluate(&mut reversed, Rotation::default()).rotation, 1.0);
    }

    #[test]
    fn test_motion_chain_keeps_axes_apart() {
        let mut motion = Motion::chain(vec![
            Motion::new(set_rotation(1.0), set_rotation(-1.0)),
            Motion::new(add_rotation(0.25), Identity),
        ]);
        let yaw = evaluate(motion.yaw.as_mut(), Rotation::default());
        let pitch = evaluate(motion.pitch.as_mut(), Rotation::new(9.0, 0.0));
        assert_eq!(yaw.rotation, 1.25);
        // Identity returns the controller state, discarding the first step.
        assert_eq!(pitch, Rotation::default());
    }
}
