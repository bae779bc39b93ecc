//! Lexical intent analysis.
//!
//! Derives a frequency/coherence/entropy triple from raw text. All lexicons
//! are case-insensitive substring matches (deliberately: "building" carries
//! the action verb "build"), counted, then folded into base values and
//! clamped to [0,1].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The analyzed form of one manifestation attempt.
///
/// Immutable once computed; the gate and tunnel produce *new* signals
/// rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentSignal {
    /// The raw intent text as submitted.
    pub raw: String,
    /// Signal strength in [0,1].
    pub frequency: f64,
    /// Signal purity in [0,1].
    pub coherence: f64,
    /// Noise level in [0,1].
    pub entropy: f64,
}

fn action_verb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)build|create|make|design|form").expect("action verb lexicon")
    })
}

fn concrete_noun_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)system|engine|tool|interface|artifact").expect("concrete noun lexicon")
    })
}

fn contradiction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)but|however|although|except").expect("contradiction lexicon"))
}

fn focus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)will|shall|must|definitely").expect("focus lexicon"))
}

fn vague_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)maybe|perhaps|possibly|kind of|sort of").expect("vague lexicon")
    })
}

fn specificity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)exactly|precisely|specifically|clearly").expect("specificity lexicon")
    })
}

fn count(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Analyze a raw intent string into an [`IntentSignal`].
///
/// Pure: same text, same triple. The length and vagueness penalties on
/// frequency keep one-word and hedged intents below the gate's noise
/// threshold.
pub fn analyze(raw: &str) -> IntentSignal {
    IntentSignal {
        raw: raw.to_string(),
        frequency: frequency_of(raw),
        coherence: coherence_of(raw),
        entropy: entropy_of(raw),
    }
}

fn frequency_of(intent: &str) -> f64 {
    let word_count = intent.split_whitespace().count();
    let mut frequency = 0.5;

    if (3..=12).contains(&word_count) {
        frequency += 0.2;
    }
    if action_verb_re().is_match(intent) {
        frequency += 0.2;
    }
    if concrete_noun_re().is_match(intent) {
        frequency += 0.1;
    }

    frequency -= count(vague_re(), intent) as f64 * 0.2;

    if intent.len() < 10 {
        frequency -= 0.3;
    } else if intent.len() > 100 {
        frequency -= 0.2;
    }

    clamp01(frequency)
}

fn coherence_of(intent: &str) -> f64 {
    let mut coherence = 0.6;

    coherence -= count(contradiction_re(), intent) as f64 * 0.1;
    coherence += count(focus_re(), intent) as f64 * 0.05;

    // Goal-directed language sharpens coherence; hedging erodes it.
    if action_verb_re().is_match(intent) {
        coherence += 0.1;
    }
    if concrete_noun_re().is_match(intent) {
        coherence += 0.05;
    }
    coherence -= count(vague_re(), intent) as f64 * 0.1;

    clamp01(coherence)
}

fn entropy_of(intent: &str) -> f64 {
    let mut entropy = 0.4;

    entropy += count(vague_re(), intent) as f64 * 0.1;
    entropy -= count(specificity_re(), intent) as f64 * 0.05;

    clamp01(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_intent_scores_high() {
        let signal = analyze("build quantum interface");
        assert!((signal.frequency - 1.0).abs() < 1e-9);
        assert!((signal.coherence - 0.75).abs() < 1e-9);
        assert!((signal.entropy - 0.4).abs() < 1e-9);
    }

    #[test]
    fn vague_markers_depress_frequency_and_coherence() {
        let crisp = analyze("build the engine");
        let hedged = analyze("maybe build the engine");
        assert!(hedged.frequency < crisp.frequency);
        assert!(hedged.coherence < crisp.coherence);
        assert!(hedged.entropy > crisp.entropy);
    }

    #[test]
    fn short_intents_lose_frequency() {
        let signal = analyze("hi");
        assert!((signal.frequency - 0.2).abs() < 1e-9);
    }

    #[test]
    fn overlong_intents_are_penalized() {
        let long = "create ".repeat(20);
        assert!(long.len() > 100);
        let signal = analyze(&long);
        // 0.5 + 0.2 (action verb) - 0.2 (length) = 0.5; word count 20 gets no bonus.
        assert!((signal.frequency - 0.5).abs() < 1e-9);
    }

    #[test]
    fn contradictions_erode_coherence() {
        let plain = analyze("form a tool for writing");
        let wobbly = analyze("form a tool for writing but however except");
        assert!((plain.coherence - wobbly.coherence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn specificity_reduces_entropy() {
        let signal = analyze("precisely design exactly one system");
        assert!((signal.entropy - 0.3).abs() < 1e-9);
    }

    #[test]
    fn metrics_stay_in_unit_interval() {
        for raw in [
            "",
            "maybe perhaps possibly kind of sort of maybe perhaps",
            "will shall must definitely will shall must definitely will shall",
            "but but but but but but but but",
        ] {
            let s = analyze(raw);
            assert!((0.0..=1.0).contains(&s.frequency), "frequency for {raw:?}");
            assert!((0.0..=1.0).contains(&s.coherence), "coherence for {raw:?}");
            assert!((0.0..=1.0).contains(&s.entropy), "entropy for {raw:?}");
        }
    }

    #[test]
    fn substring_matching_is_intentional() {
        // "building" carries "build"; lexicons are substring matches.
        let signal = analyze("building the interface");
        assert!((signal.frequency - 1.0).abs() < 1e-9);
    }
}
