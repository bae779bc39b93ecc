use manifold_engine::RealityEngine;
use serde_json::json;

use crate::support::{load_config_or_exit, print_engine_events, print_state, state_json};

pub fn run(
    intent: String,
    observer: String,
    pressure: Option<f64>,
    config: Option<String>,
    json_output: bool,
) {
    let config = load_config_or_exit(config.as_deref());
    let mut engine = RealityEngine::new(config);

    let accepted = match pressure {
        Some(pressure) => engine.create_new_reality(&observer, &intent, pressure),
        None => engine.create_with_default_pressure(&observer, &intent),
    };
    let state = engine.reality_state();

    if json_output {
        let payload = json!({
            "intent": intent,
            "observer": observer,
            "accepted": accepted,
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
        println!("manifold manifest {intent:?}");
        println!(
            "  Accepted: {}",
            if accepted { "yes" } else { "no (filtered)" }
        );
        print_state(&state);
        print_engine_events(engine.events());
    }
}
