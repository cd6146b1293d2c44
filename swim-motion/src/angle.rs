use bevy_math::Vec3;
use std::f32::consts::{PI, TAU};

use crate::types::{Orientation, Rotation};

/// Signed difference `target - current` wrapped into `(-PI, PI]`.
///
/// Feeding this to a controller makes it turn the short way around.
pub fn shortest_signed_angle_delta(target: f32, current: f32) -> f32 {
    let error = (target - current).rem_euclid(TAU);
    if error > PI { error - TAU } else { error }
}

/// Unit heading for a yaw about world up followed by a pitch about local X.
///
/// Positive pitch points the nose down.
pub fn heading(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(cos_pitch * sin_yaw, -sin_pitch, cos_pitch * cos_yaw)
}

impl Orientation<Rotation> {
    /// Resting yaw/pitch that face along `direction`.
    pub fn from_direction(direction: Vec3) -> Self {
        let length = direction.length();
        if length <= f32::EPSILON {
            return Self::default();
        }
        let yaw = direction.x.atan2(direction.z);
        let pitch = (-direction.y / length).clamp(-1.0, 1.0).asin();
        Self::new(Rotation::at(yaw), Rotation::at(pitch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_delta_takes_short_way_across_zero() {
        let error = shortest_signed_angle_delta(0.1, TAU - 0.1);
        assert!((error - 0.2).abs() < 1e-5, "got {error}");
    }

    #[test]
    fn test_delta_half_turn_is_positive_pi() {
        let error = shortest_signed_angle_delta(PI, 0.0);
        assert!((error - PI).abs() < 1e-6);
        let error = shortest_signed_angle_delta(0.0, PI);
        assert!((error - PI).abs() < 1e-6, "-PI must wrap to PI, got {error}");
    }

    #[test]
    fn test_heading_axes() {
        assert!(heading(0.0, 0.0).abs_diff_eq(Vec3::Z, 1e-6));
        assert!(heading(FRAC_PI_2, 0.0).abs_diff_eq(Vec3::X, 1e-6));
        assert!(heading(0.0, FRAC_PI_2).abs_diff_eq(Vec3::NEG_Y, 1e-6));
    }

    #[test]
    fn test_from_direction_inverts_heading() {
        let direction = heading(1.2, -0.4);
        let orientation = Orientation::from_direction(direction * 3.0);
        assert!((orientation.yaw.rotation - 1.2).abs() < 1e-5);
        assert!((orientation.pitch.rotation + 0.4).abs() < 1e-5);
        assert_eq!(orientation.yaw.rotation_velocity, 0.0);
    }

    #[test]
    fn test_from_zero_direction_is_neutral() {
        let orientation = Orientation::from_direction(Vec3::ZERO);
        assert_eq!(orientation, Orientation::default());
    }
}
