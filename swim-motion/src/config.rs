use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::sync::Arc;

use crate::boundary::{BoundaryBox, BoundaryError, Sides};
use crate::chain::{Chain, Motion};
use crate::driver::MotionTuning;
use crate::targets::ClampRotation;
use crate::types::Orientation;

const AGENT_SEED_STRIDE: u64 = 1_000;

/// Tank placement and size as written in scene files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankConfig {
    pub center: Vec3,
    pub sides: Sides,
}

impl Default for TankConfig {
    fn default() -> Self {
        // Two units tall, hanging three units below the sea surface.
        let sides = Sides::new(6.0, 2.0, 20.0);
        Self {
            center: Vec3::new(0.0, -(3.0 + sides.height / 2.0), 0.0),
            sides,
        }
    }
}

/// One link of a swimmer's behaviour chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BehaviourConfig {
    Identity,
    ZeroVelocity,
    Perturbation {
        max_yaw: f32,
        max_pitch: f32,
        interval: f32,
    },
    StayWithinBox,
    ClampPitch {
        min: f32,
        max: f32,
    },
}

impl BehaviourConfig {
    fn build(&self, boundary: &Arc<BoundaryBox>, seed: Option<u64>) -> Motion {
        match *self {
            BehaviourConfig::Identity => Motion::identity(),
            BehaviourConfig::ZeroVelocity => Motion::zero_velocity(),
            BehaviourConfig::Perturbation {
                max_yaw,
                max_pitch,
                interval,
            } => {
                let max_angle = Orientation::new(max_yaw, max_pitch);
                match seed {
                    Some(seed) => Motion::perturbation_seeded(max_angle, interval, seed),
                    None => Motion::perturbation(max_angle, interval),
                }
            }
            BehaviourConfig::StayWithinBox => Motion::stay_within_box(Arc::clone(boundary)),
            BehaviourConfig::ClampPitch { min, max } => {
                Motion::new(Chain::default(), ClampRotation::new(min, max))
            }
        }
    }
}

/// Everything needed to populate a tank with swimmers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub tank: TankConfig,
    pub tuning: MotionTuning,
    pub behaviours: Vec<BehaviourConfig>,
    pub agents: usize,
    /// Fixed seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tank: TankConfig::default(),
            tuning: MotionTuning::default(),
            behaviours: vec![
                BehaviourConfig::Perturbation {
                    max_yaw: FRAC_PI_2,
                    max_pitch: FRAC_PI_4,
                    interval: 1.0,
                },
                BehaviourConfig::StayWithinBox,
            ],
            agents: 1,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn boundary(&self) -> Result<BoundaryBox, BoundaryError> {
        BoundaryBox::new(self.tank.center, self.tank.sides)
    }

    /// Chain the configured behaviours in order.
    ///
    /// Each perturbation link draws from its own stream derived from `seed`.
    pub fn build_motion(&self, boundary: &Arc<BoundaryBox>, seed: Option<u64>) -> Motion {
        let motions = self
            .behaviours
            .iter()
            .enumerate()
            .map(|(index, behaviour)| {
                let link_seed = seed.map(|s| s.wrapping_add(2 * index as u64));
                behaviour.build(boundary, link_seed)
            })
            .collect();
        Motion::chain(motions)
    }

    /// Seed for the agent at `index`, if the scene is seeded.
    ///
    /// Agents are `AGENT_SEED_STRIDE` apart; behaviour links count up from
    /// the agent seed and the spawn stream sits at the top of the block.
    pub fn agent_seed(&self, index: usize) -> Option<u64> {
        self.seed
            .map(|seed| seed.wrapping_add((index as u64).wrapping_mul(AGENT_SEED_STRIDE)))
    }

    /// Seed for placing the agent at `index`, disjoint from its behaviour streams.
    pub fn spawn_seed(&self, index: usize) -> Option<u64> {
        self.agent_seed(index)
            .map(|seed| seed.wrapping_add(AGENT_SEED_STRIDE - 1))
    }
}
