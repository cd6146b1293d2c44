//! Scene configuration loading.
//!
//! The JSON scene file is read through the asset server; once it resolves
//! (or fails and falls back to defaults) the shared tank and tuning
//! resources are inserted and the app can start swimming.

/// Scene config asset type, loader resource and resolution system.
pub mod config_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
