use bevy::prelude::*;
use swim_motion::{Gains, MotionTuning};

use constants::tuning::{GAIN_STEP, MAX_SPEED, SPEED_STEP};

/// Tuning read by every swimmer at the start of its update.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct LiveTuning(pub MotionTuning);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GainAxis {
    Yaw,
    Pitch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GainTerm {
    Proportional,
    Derivative,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuningAction {
    Gain(GainAxis, GainTerm, f32),
    Speed(f32),
}

/// Key bindings, lower/raise pairs: 1/2 yaw P, 3/4 yaw D, 5/6 pitch P, 7/8 pitch D, -/= speed.
const BINDINGS: [(KeyCode, TuningAction); 10] = [
    (KeyCode::Digit1, TuningAction::Gain(GainAxis::Yaw, GainTerm::Proportional, -GAIN_STEP)),
    (KeyCode::Digit2, TuningAction::Gain(GainAxis::Yaw, GainTerm::Proportional, GAIN_STEP)),
    (KeyCode::Digit3, TuningAction::Gain(GainAxis::Yaw, GainTerm::Derivative, -GAIN_STEP)),
    (KeyCode::Digit4, TuningAction::Gain(GainAxis::Yaw, GainTerm::Derivative, GAIN_STEP)),
    (KeyCode::Digit5, TuningAction::Gain(GainAxis::Pitch, GainTerm::Proportional, -GAIN_STEP)),
    (KeyCode::Digit6, TuningAction::Gain(GainAxis::Pitch, GainTerm::Proportional, GAIN_STEP)),
    (KeyCode::Digit7, TuningAction::Gain(GainAxis::Pitch, GainTerm::Derivative, -GAIN_STEP)),
    (KeyCode::Digit8, TuningAction::Gain(GainAxis::Pitch, GainTerm::Derivative, GAIN_STEP)),
    (KeyCode::Minus, TuningAction::Speed(-SPEED_STEP)),
    (KeyCode::Equal, TuningAction::Speed(SPEED_STEP)),
];

fn apply(tuning: &mut MotionTuning, action: TuningAction) {
    match action {
        TuningAction::Gain(axis, term, step) => {
            let gains: &mut Gains = match axis {
                GainAxis::Yaw => &mut tuning.gains.yaw,
                GainAxis::Pitch => &mut tuning.gains.pitch,
            };
            let value = match term {
                GainTerm::Proportional => &mut gains.rotation,
                GainTerm::Derivative => &mut gains.rotation_velocity,
            };
            *value = (*value + step).max(0.0);
        }
        TuningAction::Speed(step) => {
            tuning.speed = (tuning.speed + step).clamp(0.0, MAX_SPEED);
        }
    }
}

/// Apply every binding whose key was just pressed; true if anything changed.
fn apply_pressed(tuning: &mut MotionTuning, just_pressed: impl Fn(KeyCode) -> bool) -> bool {
    let before = *tuning;
    for (key, action) in BINDINGS {
        if just_pressed(key) {
            apply(tuning, action);
        }
    }
    *tuning != before
}

pub fn motion_tuning_system(keyboard: Res<ButtonInput<KeyCode>>, mut tuning: ResMut<LiveTuning>) {
    let mut updated = tuning.0;
    if apply_pressed(&mut updated, |key| keyboard.just_pressed(key)) {
        let gains = updated.gains;
        info!(
            "Tuning: yaw P {:.2} D {:.2} | pitch P {:.2} D {:.2} | speed {:.2}",
            gains.yaw.rotation,
            gains.yaw.rotation_velocity,
            gains.pitch.rotation,
            gains.pitch.rotation_velocity,
            updated.speed
        );
        tuning.0 = updated;
    }
}
