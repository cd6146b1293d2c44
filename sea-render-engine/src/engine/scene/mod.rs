//! Scene contents: the tank outline, sea floor and the turtles themselves.

/// Flat reference grid marking the sea floor under the tank.
pub mod grid;

/// Tank boundary outline drawn with gizmos.
pub mod tank;

/// Procedural turtle meshes and swimmer spawning.
pub mod turtle;
