use manifold_engine::RealityEngine;
use serde_json::json;

use crate::support::{load_config_or_exit, print_engine_events, print_state, state_json};

pub fn run(
    file: String,
    observer: String,
    pressure: Option<f64>,
    config: Option<String>,
    json_output: bool,
) {
    let text = match std::fs::read_to_string(&file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: failed to read {file}: {e}");
            std::process::exit(1);
        }
    };

    let config = load_config_or_exit(config.as_deref());
    let mut engine = RealityEngine::new(config);

    let mut accepted = 0usize;
    let mut filtered = 0usize;
    for line in text.lines() {
        let intent = line.trim();
        if intent.is_empty() || intent.starts_with('#') {
            continue;
        }
        let ok = match pressure {
            Some(pressure) => engine.create_new_reality(&observer, intent, pressure),
            None => engine.create_with_default_pressure(&observer, intent),
        };
        if ok {
            accepted += 1;
        } else {
            filtered += 1;
        }
    }

    let state = engine.reality_state();

    if json_output {
        let payload = json!({
            "file": file,
            "observer": observer,
            "accepted": accepted,
            "filtered": filtered,
            "state": state_json(&state),
            "events": engine.events(),
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: failed to serialize output: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("manifold batch {file}");
        println!("  Accepted: {accepted}");
        println!("  Filtered: {filtered}");
        print_state(&state);
        print_engine_events(engine.events());
    }
}
