/// Headless swimmer simulator main entry point
mod bounds;
mod cli;
mod error;
mod report;
mod simulator;

use cli::{CliOptions, SceneSource, USAGE};
use error::SimError;
use report::ReportWriter;
use simulator::Simulator;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use swim_motion::SceneConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let options = match CliOptions::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Usage: {} {}", args.first().map_or("swim-sim", |a| a.as_str()), USAGE);
            std::process::exit(1);
        }
    };

    let config = match &options.source {
        SceneSource::File(path) => load_scene_config(path)?,
        SceneSource::BuiltIn => {
            println!("Using built-in sea turtle scene");
            SceneConfig::default()
        }
    };

    let simulator = Simulator::new(config, options.frames)?;
    let report = simulator.run();
    ReportWriter::new(&options.output).write(&report)?;

    Ok(())
}

fn load_scene_config(path: &Path) -> Result<SceneConfig, SimError> {
    println!("Loading scene config from: {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
