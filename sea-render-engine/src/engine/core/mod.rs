//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and state transitions
//! for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with config loading, swimmer systems and
/// platform-specific configuration.
pub mod app_setup;

/// Application state machine and loading progress transitions.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
