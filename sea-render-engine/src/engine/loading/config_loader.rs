use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use swim_motion::{BoundaryBox, BoundaryError, SceneConfig};

use crate::engine::loading::progress::LoadingProgress;
use crate::engine::systems::motion_tuning::LiveTuning;
use constants::path::SCENE_CONFIG_PATH;

/// JSON scene file as a loadable asset.
#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct SceneConfigAsset(pub SceneConfig);

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<SceneConfigAsset>>,
}

/// Resolved scene: the config plus the tank every swimmer shares.
#[derive(Resource, Debug, Clone)]
pub struct SceneSettings {
    pub config: SceneConfig,
    pub boundary: Arc<BoundaryBox>,
}

impl SceneSettings {
    pub fn new(config: SceneConfig) -> Result<Self, BoundaryError> {
        let boundary = Arc::new(config.boundary()?);
        Ok(Self { config, boundary })
    }
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene config from: {}", SCENE_CONFIG_PATH);
    config_loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
}

/// Insert [`SceneSettings`] and [`LiveTuning`] once the scene file resolves.
///
/// A missing or unreadable file, or a degenerate tank, falls back to the
/// built-in scene so the app always reaches `Running`.
pub fn load_config_system(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<SceneConfigAsset>>,
) {
    if loading_progress.config_loaded {
        return;
    }
    let Some(ref handle) = config_loader.handle else {
        return;
    };

    let config = if let Some(asset) = configs.get(handle) {
        info!("✓ Scene config loaded successfully");
        asset.0.clone()
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        warn!("Scene config failed to load ({err}), using built-in scene");
        SceneConfig::default()
    } else {
        return;
    };

    let settings = SceneSettings::new(config).or_else(|err| {
        warn!("Invalid tank in scene config ({err}), using built-in scene");
        SceneSettings::new(SceneConfig::default())
    });

    match settings {
        Ok(settings) => {
            info!(
                "Tank centre {} sides {:?}, {} swimmer(s)",
                settings.boundary.center(),
                settings.boundary.sides(),
                settings.config.agents
            );
            commands.insert_resource(LiveTuning(settings.config.tuning));
            commands.insert_resource(settings);
            loading_progress.config_loaded = true;
        }
        Err(err) => error!("Built-in scene is invalid: {err}"),
    }
}
