use bevy::prelude::*;
use swim_motion::{FrameTime, MotionDriver, MotionState};

use crate::engine::systems::motion_tuning::LiveTuning;

/// A turtle steered by its own motion driver.
#[derive(Component, Debug)]
pub struct Swimmer {
    driver: MotionDriver,
}

impl Swimmer {
    pub fn new(driver: MotionDriver) -> Self {
        Self { driver }
    }
}

/// Model rotation for a motion state: yaw about Y, then pitch, then a roll
/// that banks the turtle into its turn.
pub fn swimmer_rotation(state: &MotionState) -> Quat {
    Quat::from_rotation_y(state.yaw.rotation)
        * Quat::from_rotation_x(state.pitch.rotation)
        * Quat::from_rotation_z(-state.yaw.rotation_velocity)
}

pub fn swim_system(
    time: Res<Time>,
    tuning: Res<LiveTuning>,
    mut swimmers: Query<(&mut Swimmer, &mut Transform)>,
) {
    let frame = FrameTime::new(time.elapsed_secs(), time.delta_secs());
    for (mut swimmer, mut transform) in &mut swimmers {
        let state = swimmer.driver.update_with(frame, &tuning.0);
        transform.translation = state.position;
        transform.rotation = swimmer_rotation(&state);
    }
}
