use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

/// Fixed frame delta for headless runs (seconds).
pub const FRAME_DELTA: f32 = 1.0 / 60.0;

pub const DEFAULT_FRAMES: usize = 1000;

/// Every n-th frame is kept in the sampled path of a trajectory report.
pub const PATH_SAMPLE_STRIDE: usize = 10;

/// Swimmers spawn within this fraction of the tank's half extents.
pub const SPAWN_EXTENT_FRACTION: f32 = 0.5;

/// Renderer spawn pitch range, matching a freshly placed turtle model.
pub const RENDER_SPAWN_MAX_PITCH: f32 = FRAC_PI_2;

/// Headless spawn pitch range; flatter so reports start inside the tank.
pub const SIM_SPAWN_MAX_PITCH: f32 = FRAC_PI_4;
