use manifold_signal::{SilenceGate, analyze};
use serde_json::json;

pub fn run(intent: String, json_output: bool) {
    let signal = analyze(&intent);
    let outcome = SilenceGate::default().filter(&signal);

    if json_output {
        let payload = json!({
            "intent": intent,
            "frequency": signal.frequency,
            "coherence": signal.coherence,
            "entropy": signal.entropy,
            "passes_gate": outcome.passed,
            "filtered_signal": outcome.signal,
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: failed to serialize output: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("manifold probe {intent:?}");
        println!("  Frequency: {:.3}", signal.frequency);
        println!("  Coherence: {:.3}", signal.coherence);
        println!("  Entropy:   {:.3}", signal.entropy);
        println!(
            "  Gate: {}",
            if outcome.passed { "passes" } else { "filtered" }
        );
    }
}
