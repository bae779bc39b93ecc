//! Shared helpers for CLI commands.

use manifold_engine::{EngineConfig, EngineEvent, RealityState};
use serde_json::json;

/// Load the engine config from an optional TOML path, or fall back to
/// defaults. Bad configs are a user error: report and exit nonzero.
pub fn load_config_or_exit(path: Option<&str>) -> EngineConfig {
    match path {
        None => EngineConfig::default(),
        Some(path) => match EngineConfig::from_toml_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Serialize a reality state to a JSON value.
pub fn state_json(state: &RealityState) -> serde_json::Value {
    json!({
        "pixel_count": state.pixel_count,
        "stability": state.stability,
        "packing_efficiency": state.packing_efficiency,
        "grid": state.grid,
    })
}

/// Print a human-readable state block.
pub fn print_state(state: &RealityState) {
    println!("  Pixels: {}", state.pixel_count);
    println!("  Stability: {:.3}", state.stability);
    println!("  Packing efficiency: {:.3}", state.packing_efficiency);
}

/// Print engine events as JSON lines.
pub fn print_engine_events(events: &[EngineEvent]) {
    for event in events {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("error: failed to serialize event: {e}"),
        }
    }
}
