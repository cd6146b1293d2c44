use bevy::prelude::*;

use constants::render_settings::{DAY, LightingPreset, NIGHT};

#[derive(Resource, Debug, Clone, Copy)]
pub struct DayNightCycle {
    pub is_day: bool,
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self { is_day: true }
    }
}

impl DayNightCycle {
    pub fn preset(&self) -> LightingPreset {
        if self.is_day { DAY } else { NIGHT }
    }

    pub fn toggle(&mut self) -> LightingPreset {
        self.is_day = !self.is_day;
        self.preset()
    }
}

pub fn apply_lighting_preset(
    preset: &LightingPreset,
    clear_colour: &mut ClearColor,
    ambient: &mut AmbientLight,
) {
    clear_colour.0 = preset.clear_colour;
    ambient.brightness = preset.ambient_brightness;
}

pub fn day_night_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cycle: ResMut<DayNightCycle>,
    mut clear_colour: ResMut<ClearColor>,
    mut ambient: ResMut<AmbientLight>,
    mut lights: Query<&mut DirectionalLight>,
) {
    if !keyboard.just_pressed(KeyCode::KeyN) {
        return;
    }

    let preset = cycle.toggle();
    apply_lighting_preset(&preset, &mut clear_colour, &mut ambient);
    for mut light in &mut lights {
        light.illuminance = preset.illuminance;
    }
    info!("Switched to {}", if cycle.is_day { "day" } else { "night" });
}
