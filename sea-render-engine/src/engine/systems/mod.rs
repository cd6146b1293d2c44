//! Runtime systems for swimming, live tuning and diagnostics.

/// Day/night lighting toggle.
pub mod day_night;

/// FPS tracking for the native overlay.
pub mod fps_tracking;

/// Keyboard-driven gain and speed tuning shared by every swimmer.
pub mod motion_tuning;

/// Per-frame motion driver updates applied to swimmer transforms.
pub mod swim;
