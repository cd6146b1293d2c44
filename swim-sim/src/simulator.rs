/// Parallel headless simulation of every swimmer in a scene.
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::sync::Arc;
use swim_motion::{BoundaryBox, FrameTime, MotionDriver, SceneConfig, SpawnPose};

use crate::error::SimError;
use crate::report::{AgentReport, SimulationReport, TrajectoryRecorder};
use constants::simulation::{
    FRAME_DELTA, PATH_SAMPLE_STRIDE, SIM_SPAWN_MAX_PITCH, SPAWN_EXTENT_FRACTION,
};

pub struct Simulator {
    config: SceneConfig,
    boundary: Arc<BoundaryBox>,
    frames: usize,
}

impl Simulator {
    pub fn new(config: SceneConfig, frames: usize) -> Result<Self, SimError> {
        let boundary = Arc::new(config.boundary()?);
        Ok(Self {
            config,
            boundary,
            frames,
        })
    }

    /// Simulate every agent on the rayon pool; agents never interact.
    pub fn run(&self) -> SimulationReport {
        println!(
            "Simulating {} agent(s) for {} frames...",
            self.config.agents, self.frames
        );

        let pb = ProgressBar::new(self.config.agents as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} agents ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Swimming");

        let agents: Vec<AgentReport> = (0..self.config.agents)
            .into_par_iter()
            .map(|index| {
                let report = self.simulate_agent(index);
                pb.inc(1);
                report
            })
            .collect();
        pb.finish_with_message("Simulation complete");

        SimulationReport::new(
            self.frames,
            FRAME_DELTA,
            self.config.tank,
            self.config.tuning,
            agents,
        )
    }

    /// Spawn agent `index` at a random pose and drive it for the configured frames.
    pub fn simulate_agent(&self, index: usize) -> AgentReport {
        let seed = self.config.agent_seed(index);
        let mut rng = self
            .config
            .spawn_seed(index)
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let pose = SpawnPose::random(
            &mut rng,
            &self.boundary,
            SPAWN_EXTENT_FRACTION,
            SIM_SPAWN_MAX_PITCH,
        );

        let motion = self.config.build_motion(&self.boundary, seed);
        let mut driver =
            MotionDriver::new(pose.position, pose.orientation, motion, self.config.tuning);
        let mut recorder = TrajectoryRecorder::new(&self.boundary, pose.position, PATH_SAMPLE_STRIDE);

        let mut time = FrameTime::default();
        for frame in 1..=self.frames {
            time = time.step(FRAME_DELTA);
            let state = driver.update(time);
            recorder.record(frame, state.position);
        }

        recorder.finish(index, seed, driver.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swim_motion::{BehaviourConfig, TankConfig};

    fn seeded_config(agents: usize) -> SceneConfig {
        SceneConfig {
            agents,
            seed: Some(7),
            ..SceneConfig::default()
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let first = Simulator::new(seeded_config(3), 200).unwrap().run();
        let second = Simulator::new(seeded_config(3), 200).unwrap().run();
        assert_eq!(first.agents, second.agents);
        assert_eq!(first.agents.len(), 3);
        assert_ne!(first.agents[0].start, first.agents[1].start);
    }

    #[test]
    fn test_agents_come_back_in_index_order() {
        let report = Simulator::new(seeded_config(8), 10).unwrap().run();
        let indices: Vec<usize> = report.agents.iter().map(|a| a.index).collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_behaviour_chain_swims_straight() {
        let config = SceneConfig {
            behaviours: Vec::new(),
            ..seeded_config(1)
        };
        let simulator = Simulator::new(config, 120).unwrap();
        let report = simulator.simulate_agent(0);
        let travelled = report.final_state.position.distance(report.start);
        assert!((travelled - 120.0 * FRAME_DELTA).abs() < 1e-3, "travelled {travelled}");
        assert_eq!(report.path.len(), 1 + 120 / PATH_SAMPLE_STRIDE);
    }

    #[test]
    fn test_degenerate_tank_is_an_error() {
        let config = SceneConfig {
            tank: TankConfig {
                sides: swim_motion::Sides::new(1.0, -1.0, 1.0),
                ..TankConfig::default()
            },
            behaviours: vec![BehaviourConfig::StayWithinBox],
            ..SceneConfig::default()
        };
        assert!(matches!(
            Simulator::new(config, 10),
            Err(SimError::Boundary(_))
        ));
    }
}
