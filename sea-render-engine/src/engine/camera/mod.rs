//! Orbit camera for watching the tank.
//!
//! Right-drag orbits around the tank centre, the mouse wheel zooms.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
