/// Trajectory report generation for simulation runs.
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use swim_motion::{BoundaryBox, MotionState, MotionTuning, TankConfig};

use crate::bounds::TrajectoryBounds;
use crate::error::SimError;

/// Outcome of one swimmer's run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    pub index: usize,
    /// Seed the agent was spawned and steered with, absent for entropy runs.
    pub seed: Option<u64>,
    pub start: Vec3,
    pub bounds: TrajectoryBounds,
    /// Furthest distance beyond any tank face.
    pub max_excursion: f32,
    pub frames_outside: usize,
    pub final_state: MotionState,
    /// Position every few frames, starting with the spawn point.
    pub path: Vec<Vec3>,
}

impl AgentReport {
    pub fn stayed_inside(&self) -> bool {
        self.frames_outside == 0
    }
}

/// Accumulates an [`AgentReport`] frame by frame.
pub struct TrajectoryRecorder<'a> {
    boundary: &'a BoundaryBox,
    sample_stride: usize,
    start: Vec3,
    bounds: TrajectoryBounds,
    max_excursion: f32,
    frames_outside: usize,
    path: Vec<Vec3>,
}

impl<'a> TrajectoryRecorder<'a> {
    pub fn new(boundary: &'a BoundaryBox, start: Vec3, sample_stride: usize) -> Self {
        let mut bounds = TrajectoryBounds::new();
        bounds.update(start);
        Self {
            boundary,
            sample_stride: sample_stride.max(1),
            start,
            bounds,
            max_excursion: boundary.excursion(start),
            frames_outside: 0,
            path: vec![start],
        }
    }

    /// Record the position reached at the end of 1-based `frame`.
    pub fn record(&mut self, frame: usize, position: Vec3) {
        self.bounds.update(position);
        let excursion = self.boundary.excursion(position);
        if excursion > 0.0 {
            self.frames_outside += 1;
            self.max_excursion = self.max_excursion.max(excursion);
        }
        if frame % self.sample_stride == 0 {
            self.path.push(position);
        }
    }

    pub fn finish(self, index: usize, seed: Option<u64>, final_state: MotionState) -> AgentReport {
        AgentReport {
            index,
            seed,
            start: self.start,
            bounds: self.bounds,
            max_excursion: self.max_excursion,
            frames_outside: self.frames_outside,
            final_state,
            path: self.path,
        }
    }
}

/// Whole-run report written as pretty JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub frames: usize,
    pub frame_delta: f32,
    pub tank: TankConfig,
    pub tuning: MotionTuning,
    pub agents_contained: usize,
    pub worst_excursion: f32,
    pub agents: Vec<AgentReport>,
}

impl SimulationReport {
    pub fn new(
        frames: usize,
        frame_delta: f32,
        tank: TankConfig,
        tuning: MotionTuning,
        agents: Vec<AgentReport>,
    ) -> Self {
        let agents_contained = agents.iter().filter(|a| a.stayed_inside()).count();
        let worst_excursion = agents.iter().map(|a| a.max_excursion).fold(0.0, f32::max);
        Self {
            frames,
            frame_delta,
            tank,
            tuning,
            agents_contained,
            worst_excursion,
            agents,
        }
    }
}

/// Writes simulation reports and prints a short summary.
pub struct ReportWriter {
    output_path: PathBuf,
}

impl ReportWriter {
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
        }
    }

    pub fn write(&self, report: &SimulationReport) -> Result<(), SimError> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let report_json = serde_json::to_string_pretty(report)?;
        fs::write(&self.output_path, report_json)?;

        println!("Generated trajectory report: {}", self.output_path.display());
        self.print_summary(report);
        Ok(())
    }

    fn print_summary(&self, report: &SimulationReport) {
        println!("Report Summary:");
        println!(
            "  Frames: {} at {:.4}s ({:.1}s simulated)",
            report.frames,
            report.frame_delta,
            report.frames as f32 * report.frame_delta
        );
        println!(
            "  Agents contained: {}/{}",
            report.agents_contained,
            report.agents.len()
        );
        println!("  Worst excursion: {:.3}", report.worst_excursion);
        for agent in &report.agents {
            let size = agent.bounds.dimensions();
            println!(
                "  Agent {}: span ({:.2}, {:.2}, {:.2}), {} frames outside",
                agent.index, size.x, size.y, size.z, agent.frames_outside
            );
        }
    }
}
