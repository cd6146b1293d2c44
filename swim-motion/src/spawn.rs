use bevy_math::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::boundary::BoundaryBox;
use crate::types::{Orientation, Rotation};

/// Starting position and resting orientation for a new swimmer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPose {
    pub position: Vec3,
    pub orientation: Orientation<Rotation>,
}

impl SpawnPose {
    /// Random pose inside `extent_fraction` of the tank's half extents.
    ///
    /// Yaw is uniform over a full turn, pitch uniform in `[-max_pitch, max_pitch]`.
    pub fn random(
        rng: &mut impl Rng,
        boundary: &BoundaryBox,
        extent_fraction: f32,
        max_pitch: f32,
    ) -> Self {
        let reach = boundary.half_extents() * extent_fraction.clamp(0.0, 1.0);
        let offset = Vec3::new(
            symmetric(rng, reach.x),
            symmetric(rng, reach.y),
            symmetric(rng, reach.z),
        );
        let yaw = rng.gen_range(0.0..TAU);
        let pitch = symmetric(rng, max_pitch.abs());

        Self {
            position: boundary.center() + offset,
            orientation: Orientation::new(Rotation::at(yaw), Rotation::at(pitch)),
        }
    }
}

fn symmetric(rng: &mut impl Rng, limit: f32) -> f32 {
    if limit == 0.0 {
        0.0
    } else {
        rng.gen_range(-limit..=limit)
    }
}
