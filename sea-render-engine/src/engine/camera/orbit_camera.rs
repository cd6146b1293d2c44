use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use swim_motion::BoundaryBox;

use crate::engine::loading::config_loader::SceneSettings;

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            distance: 25.0,
            yaw: 0.6,
            pitch: -0.5,
        }
    }
}

impl OrbitCamera {
    /// Frame the whole tank from a three-quarter view.
    pub fn with_boundary(boundary: &BoundaryBox) -> Self {
        let size = boundary.half_extents() * 2.0;
        Self {
            focus_point: boundary.center(),
            distance: size.length() * 1.1,
            ..default()
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera position: `distance` behind the focus point along the view direction.
    pub fn eye(&self) -> Vec3 {
        self.focus_point + self.rotation() * Vec3::Z * self.distance
    }
}

pub fn focus_camera_on_tank(mut commands: Commands, settings: Res<SceneSettings>) {
    commands.insert_resource(OrbitCamera::with_boundary(&settings.boundary));
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Mouse motion with right click (orbit)
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        orbit.yaw += -mouse_delta.x * yaw_sens;
        orbit.pitch += -mouse_delta.y * pitch_sens;
        orbit.pitch = orbit.pitch.clamp(-1.55, 1.55);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0_f32;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        let zoom = 1.0 - scroll_accum * 0.1;
        orbit.distance = (orbit.distance * zoom).clamp(2.0, 200.0);
    }

    let target_rot = orbit.rotation();
    let target_pos = orbit.eye();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_looks_at_focus_point() {
        let orbit = OrbitCamera {
            focus_point: Vec3::new(1.0, -4.0, 2.0),
            distance: 10.0,
            yaw: 0.8,
            pitch: -0.4,
        };
        let eye = orbit.eye();
        assert!((eye.distance(orbit.focus_point) - 10.0).abs() < 1e-4);
        // Bevy cameras look down their local -Z.
        let forward = orbit.rotation() * Vec3::NEG_Z;
        let to_focus = (orbit.focus_point - eye).normalize();
        assert!(forward.abs_diff_eq(to_focus, 1e-5));
        assert!(eye.y > orbit.focus_point.y, "negative pitch looks down from above");
    }
}
