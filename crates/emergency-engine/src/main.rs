//! Scenario runner for the emergency response simulation.
//!
//! Loads a YAML scenario, activates the emergency the configured number
//! of rounds, and prints the final state as JSON on stdout.
//!
//! # Usage
//!
//! ```text
//! emergency-engine [SCENARIO_PATH]
//! ```
//!
//! Without an argument the runner reads `emergency-scenario.yaml` from the
//! working directory. When that file does not exist, the built-in
//! calibration scenario is used. Set `RUST_LOG=debug` to see every
//! activation, or `RUST_LOG=trace` to also see gated delayed handlers.

mod error;

use std::path::{Path, PathBuf};

use emergency_core::Scenario;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Scenario file read when no path is given on the command line.
const DEFAULT_SCENARIO_PATH: &str = "emergency-scenario.yaml";

fn main() -> Result<(), EngineError> {
    // Logs go to stderr so stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("emergency-engine starting");

    let scenario = load_scenario(std::env::args_os().nth(1).map(PathBuf::from))?;
    let (mut emergency, rounds) = scenario.into_emergency();

    info!(
        handlers = emergency.plan().len(),
        rounds,
        effect_cap = ?emergency.config().effect_cap,
        healing_scale = emergency.config().healing_scale,
        "Scenario loaded"
    );
    for (position, description) in emergency.describe_plan().iter().enumerate() {
        info!(position, handler = %description, "Plan entry");
    }

    for _ in 0..rounds {
        emergency.activate();
        let state = emergency.state();
        info!(
            round = emergency.activations(),
            health = state.health(),
            panic = state.panic(),
            fire_damage = state.fire_damage(),
            flood_damage = state.flood_damage(),
            injury_level = state.injury_level(),
            "Round complete"
        );
    }

    let json = serde_json::to_string_pretty(emergency.state())?;
    println!("{json}");

    info!(rounds = emergency.activations(), "emergency-engine finished");
    Ok(())
}

/// Load the scenario from `path`, or from the default location.
///
/// An explicit path must exist. The default path falls back to the
/// calibration scenario when missing.
fn load_scenario(path: Option<PathBuf>) -> Result<Scenario, EngineError> {
    if let Some(path) = path {
        info!(path = %path.display(), "Loading scenario");
        return Ok(Scenario::from_file(&path)?);
    }

    let default_path = Path::new(DEFAULT_SCENARIO_PATH);
    if default_path.exists() {
        info!(path = DEFAULT_SCENARIO_PATH, "Loading scenario");
        Ok(Scenario::from_file(default_path)?)
    } else {
        info!("Scenario file not found, using calibration scenario");
        Ok(Scenario::calibration())
    }
}
