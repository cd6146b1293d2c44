/// Command line parsing for the simulator
use std::path::{Path, PathBuf};

use crate::error::SimError;
use constants::path::TRAJECTORY_REPORT_SUFFIX;
use constants::simulation::DEFAULT_FRAMES;

pub const USAGE: &str = "<config.json | --default> [frames] [output.json]";

/// Where the scene comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneSource {
    File(PathBuf),
    BuiltIn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub source: SceneSource,
    pub frames: usize,
    pub output: PathBuf,
}

impl CliOptions {
    /// Parse `args` as passed to the binary, program name first.
    pub fn parse(args: &[String]) -> Result<Self, SimError> {
        if args.len() < 2 || args.len() > 4 {
            return Err(SimError::Usage(format!(
                "Expected 1 to 3 arguments, got {}",
                args.len().saturating_sub(1)
            )));
        }

        let source = match args[1].as_str() {
            "--default" => SceneSource::BuiltIn,
            path => SceneSource::File(PathBuf::from(path)),
        };

        let frames = match args.get(2) {
            Some(frames) => frames
                .parse()
                .map_err(|_| SimError::Usage(format!("Invalid frame count: {}", frames)))?,
            None => DEFAULT_FRAMES,
        };

        let output = match args.get(3) {
            Some(output) => PathBuf::from(output),
            None => default_output_path(&source),
        };

        Ok(Self {
            source,
            frames,
            output,
        })
    }
}

/// `<config stem>_trajectories.json` next to the config file.
fn default_output_path(source: &SceneSource) -> PathBuf {
    match source {
        SceneSource::File(path) => {
            let stem = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            let directory = path.parent().unwrap_or(Path::new("."));
            directory.join(format!("{}{}", stem, TRAJECTORY_REPORT_SUFFIX))
        }
        SceneSource::BuiltIn => PathBuf::from(format!("default{}", TRAJECTORY_REPORT_SUFFIX)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("swim-sim")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_config_path_with_defaults() {
        let options = CliOptions::parse(&args(&["scenes/tank.json"])).unwrap();
        assert_eq!(options.source, SceneSource::File(PathBuf::from("scenes/tank.json")));
        assert_eq!(options.frames, DEFAULT_FRAMES);
        assert_eq!(options.output, PathBuf::from("scenes/tank_trajectories.json"));
    }

    #[test]
    fn test_builtin_scene_with_frames_and_output() {
        let options = CliOptions::parse(&args(&["--default", "250", "out/report.json"])).unwrap();
        assert_eq!(options.source, SceneSource::BuiltIn);
        assert_eq!(options.frames, 250);
        assert_eq!(options.output, PathBuf::from("out/report.json"));
    }

    #[test]
    fn test_builtin_default_output_name() {
        let options = CliOptions::parse(&args(&["--default"])).unwrap();
        assert_eq!(options.output, PathBuf::from("default_trajectories.json"));
    }

    #[test]
    fn test_bad_arguments_are_usage_errors() {
        assert!(matches!(CliOptions::parse(&args(&[])), Err(SimError::Usage(_))));
        assert!(matches!(
            CliOptions::parse(&args(&["tank.json", "many"])),
            Err(SimError::Usage(_))
        ));
        assert!(matches!(
            CliOptions::parse(&args(&["a", "1", "b", "c"])),
            Err(SimError::Usage(_))
        ));
    }
}
