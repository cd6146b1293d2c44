use bevy::prelude::*;

use crate::engine::loading::config_loader::SceneSettings;
use constants::render_settings::TANK_GIZMO_COLOUR;

#[derive(Resource, Debug, Clone, Copy)]
pub struct TankDisplay {
    pub visible: bool,
}

impl Default for TankDisplay {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub fn draw_tank_boundary(
    mut gizmos: Gizmos,
    settings: Res<SceneSettings>,
    display: Res<TankDisplay>,
) {
    if !display.visible {
        return;
    }
    let sides = settings.boundary.sides();
    let transform = Transform::from_translation(settings.boundary.center())
        .with_scale(Vec3::new(sides.width, sides.height, sides.depth));
    gizmos.cuboid(transform, TANK_GIZMO_COLOUR);
}

pub fn toggle_tank_boundary(keyboard: Res<ButtonInput<KeyCode>>, mut display: ResMut<TankDisplay>) {
    if keyboard.just_pressed(KeyCode::KeyB) {
        display.visible = !display.visible;
        let state = if display.visible { "shown" } else { "hidden" };
        info!("Tank boundary {}", state);
    }
}
