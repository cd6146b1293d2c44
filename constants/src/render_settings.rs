use bevy::prelude::*;

/// Clear colour and lighting for one time of day.
#[derive(Debug, Clone, Copy)]
pub struct LightingPreset {
    pub clear_colour: Color,
    pub illuminance: f32,
    pub ambient_brightness: f32,
}

pub const DAY: LightingPreset = LightingPreset {
    clear_colour: Color::srgb(0.463, 0.588, 1.0),
    illuminance: 10_000.0,
    ambient_brightness: 400.0,
};

pub const NIGHT: LightingPreset = LightingPreset {
    clear_colour: Color::srgb(0.02, 0.04, 0.12),
    illuminance: 800.0,
    ambient_brightness: 60.0,
};

pub const TURTLE_COLOUR: Color = Color::srgb(0.302, 0.275, 0.812);
pub const TURTLE_HEAD_COLOUR: Color = Color::srgb(0.22, 0.2, 0.6);
pub const TANK_GIZMO_COLOUR: Color = Color::BLACK;
pub const GRID_COLOUR: Color = Color::srgba(1.0, 1.0, 1.0, 0.5);

/// Sea floor sits this far below the bottom face of the tank.
pub const SEA_FLOOR_GAP: f32 = 1.0;
/// Sea floor grid spans the tank footprint plus this margin on each side.
pub const SEA_FLOOR_MARGIN: f32 = 10.0;
pub const GRID_CELL_SIZE: f32 = 1.0;

pub const FPS_FONT_SIZE: f32 = 16.0;
