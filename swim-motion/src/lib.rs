//! Procedural motion control for autonomous swimmers.
//!
//! A swimmer carries a position and two rotational degrees of freedom (yaw and
//! pitch). Every frame a chain of target functions proposes a desired heading,
//! a PD-style feedback controller per axis steers toward it, and the position
//! integrator advances the swimmer along the resulting heading.
//!
//! The crate has no rendering dependency: callers feed it a [`FrameTime`] per
//! frame and apply the returned [`MotionState`] to whatever transform they own.

/// Shortest-path angle arithmetic and heading vectors.
pub mod angle;

/// Axis-aligned containment region shared read-only between swimmers.
pub mod boundary;

/// Sequential composition of target functions and the yaw/pitch [`Motion`] pair.
pub mod chain;

/// Serde configuration for tanks, tuning and behaviour chains.
pub mod config;

/// Scalar PD controller, orientation pair and position integrator.
pub mod control;

/// Per-swimmer orchestration producing one update per frame.
pub mod driver;

/// Random starting poses inside a tank.
pub mod spawn;

/// Catalogue of steering behaviours expressed as target functions.
pub mod targets;

/// Plain data shared by every module: rotations, gains, frame time.
pub mod types;

pub use angle::{heading, shortest_signed_angle_delta};
pub use boundary::{BoundaryBox, BoundaryError, Sides};
pub use chain::{Chain, Motion};
pub use config::{BehaviourConfig, SceneConfig, TankConfig};
pub use control::{OrientationController, PositionController, RotationController};
pub use driver::{MotionDriver, MotionState, MotionTuning};
pub use spawn::SpawnPose;
pub use targets::{
    BoxedTarget, ClampRotation, Identity, Perturbation, StayWithinBoxPitch, StayWithinBoxYaw,
    TargetFunction, ZeroVelocityTarget,
};
pub use types::{FrameTime, Gains, Orientation, Rotation};
