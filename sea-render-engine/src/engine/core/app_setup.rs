use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller, focus_camera_on_tank};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{
    ConfigLoader, SceneConfigAsset, SceneSettings, load_config_system, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::grid::create_sea_floor_grid;
use crate::engine::scene::tank::{TankDisplay, draw_tank_boundary, toggle_tank_boundary};
use crate::engine::scene::turtle::{respawn_turtles_system, setup_turtles};
use crate::engine::systems::day_night::{
    DayNightCycle, apply_lighting_preset, day_night_toggle_system,
};
use crate::engine::systems::fps_tracking::fps_text_update_system;
use crate::engine::systems::motion_tuning::{LiveTuning, motion_tuning_system};
use crate::engine::systems::swim::swim_system;
use constants::render_settings::FPS_FONT_SIZE;

pub fn create_app() -> App {
    let mut app = App::new();

    let cycle = DayNightCycle::default();
    let mut clear_colour = ClearColor::default();
    let mut ambient = AmbientLight::default();
    apply_lighting_preset(&cycle.preset(), &mut clear_colour, &mut ambient);

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the scene config as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneConfigAsset>::new(&["json"]))
        .insert_resource(clear_colour)
        .insert_resource(ambient)
        .insert_resource(cycle);

    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<OrbitCamera>()
        .init_resource::<TankDisplay>()
        .init_resource::<LiveTuning>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_config_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (setup_turtles, setup_sea_floor, focus_camera_on_tank),
        );

    let runtime_systems = (
        motion_tuning_system,
        swim_system,
        respawn_turtles_system,
        toggle_tank_boundary,
        draw_tank_boundary,
        day_night_toggle_system,
    )
        .chain();

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)))
        .add_systems(Update, camera_controller);

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn spawn_lighting(commands: &mut Commands, illuminance: f32) {
    commands.spawn((
        DirectionalLight {
            illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(orbit.eye()).with_rotation(orbit.rotation()),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, cycle: Res<DayNightCycle>, orbit: Res<OrbitCamera>) {
    spawn_lighting(&mut commands, cycle.preset().illuminance);
    spawn_camera(&mut commands, &orbit);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn setup_sea_floor(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    create_sea_floor_grid(&mut commands, &settings.boundary, &mut meshes, &mut materials);
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: FPS_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("1-8 gains  -/= speed  R respawn  B tank  N day/night"),
                TextFont {
                    font_size: FPS_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
