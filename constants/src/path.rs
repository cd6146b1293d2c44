/// Scene configuration loaded at startup.
pub const SCENE_CONFIG_PATH: &str = "scene/sea_config.json";

/// Suffix appended to the config stem when the simulator picks an output name.
pub const TRAJECTORY_REPORT_SUFFIX: &str = "_trajectories.json";
