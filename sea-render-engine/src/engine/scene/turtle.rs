use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use swim_motion::{MotionDriver, SpawnPose};

use crate::engine::loading::config_loader::SceneSettings;
use crate::engine::systems::motion_tuning::LiveTuning;
use crate::engine::systems::swim::{Swimmer, swimmer_rotation};
use constants::render_settings::{TURTLE_COLOUR, TURTLE_HEAD_COLOUR};
use constants::simulation::{RENDER_SPAWN_MAX_PITCH, SPAWN_EXTENT_FRACTION};

/// Shared mesh and material handles for every turtle part.
#[derive(Resource, Clone)]
pub struct TurtleAssets {
    shell: Handle<Mesh>,
    head: Handle<Mesh>,
    flipper: Handle<Mesh>,
    shell_material: Handle<StandardMaterial>,
    head_material: Handle<StandardMaterial>,
}

impl TurtleAssets {
    pub fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            shell: meshes.add(Sphere::new(0.5)),
            head: meshes.add(Sphere::new(0.14)),
            flipper: meshes.add(Cuboid::new(0.45, 0.04, 0.18)),
            shell_material: materials.add(StandardMaterial {
                base_color: TURTLE_COLOUR,
                perceptual_roughness: 0.8,
                ..default()
            }),
            head_material: materials.add(StandardMaterial {
                base_color: TURTLE_HEAD_COLOUR,
                ..default()
            }),
        }
    }
}

/// Spawn `config.agents` turtles at random poses inside the tank.
///
/// Seeded scenes place and steer every turtle the same way on each run.
pub fn spawn_turtles(
    commands: &mut Commands,
    settings: &SceneSettings,
    tuning: &LiveTuning,
    turtle_assets: &TurtleAssets,
) {
    let config = &settings.config;
    for index in 0..config.agents {
        let seed = config.agent_seed(index);
        let mut rng = match config.spawn_seed(index) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let pose = SpawnPose::random(
            &mut rng,
            &settings.boundary,
            SPAWN_EXTENT_FRACTION,
            RENDER_SPAWN_MAX_PITCH,
        );
        let motion = config.build_motion(&settings.boundary, seed);
        let driver = MotionDriver::new(pose.position, pose.orientation, motion, tuning.0);
        let transform = Transform::from_translation(pose.position)
            .with_rotation(swimmer_rotation(&driver.state()));

        spawn_turtle(commands, turtle_assets, Swimmer::new(driver), transform);
        debug!("Spawned turtle {index} at {}", pose.position);
    }
    info!("Spawned {} turtle(s)", config.agents);
}

fn spawn_turtle(
    commands: &mut Commands,
    turtle_assets: &TurtleAssets,
    swimmer: Swimmer,
    transform: Transform,
) {
    commands
        .spawn((Name::new("Turtle"), swimmer, transform, Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(turtle_assets.shell.clone()),
                MeshMaterial3d(turtle_assets.shell_material.clone()),
                Transform::from_scale(Vec3::new(1.0, 0.35, 1.3)),
            ));
            parent.spawn((
                Mesh3d(turtle_assets.head.clone()),
                MeshMaterial3d(turtle_assets.head_material.clone()),
                Transform::from_xyz(0.0, 0.03, 0.75),
            ));
            // Front flippers swept back, rear ones smaller
            for (x, z, yaw, scale) in [
                (0.5, 0.3, -0.4, 1.0),
                (-0.5, 0.3, 0.4, 1.0),
                (0.3, -0.5, 0.6, 0.6),
                (-0.3, -0.5, -0.6, 0.6),
            ] {
                parent.spawn((
                    Mesh3d(turtle_assets.flipper.clone()),
                    MeshMaterial3d(turtle_assets.head_material.clone()),
                    Transform::from_xyz(x, -0.05, z)
                        .with_rotation(Quat::from_rotation_y(yaw))
                        .with_scale(Vec3::splat(scale)),
                ));
            }
        });
}

pub fn setup_turtles(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    tuning: Res<LiveTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let turtle_assets = TurtleAssets::new(&mut meshes, &mut materials);
    spawn_turtles(&mut commands, &settings, &tuning, &turtle_assets);
    commands.insert_resource(turtle_assets);
}

/// `R` replaces every turtle with a freshly placed one and a rebuilt behaviour chain.
pub fn respawn_turtles_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    swimmers: Query<Entity, With<Swimmer>>,
    settings: Res<SceneSettings>,
    tuning: Res<LiveTuning>,
    turtle_assets: Res<TurtleAssets>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    for entity in &swimmers {
        commands.entity(entity).despawn();
    }
    info!("Respawning turtles");
    spawn_turtles(&mut commands, &settings, &tuning, &turtle_assets);
}
