//! Constants shared by the sea renderer and the headless simulator.

/// Asset paths relative to the renderer's asset root.
pub mod path;

/// Colours, lighting presets and overlay sizes for the underwater scene.
#[cfg(feature = "render")]
pub mod render_settings;

/// Fixed-step clock and spawn ranges used when simulating swimmers.
pub mod simulation;

/// Keyboard tuning increments for live gain adjustment.
pub mod tuning;
