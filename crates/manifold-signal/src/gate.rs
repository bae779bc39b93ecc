//! The Silence Gate: destructive interference for weak or incoherent intent.
//!
//! One gate law for the whole system: a signal is rejected when
//! `frequency < noise_threshold` OR `coherence < coherence_threshold`.
//! Accepted signals are sharpened: frequency amplified, entropy stripped.

use serde::Serialize;

use crate::analyzer::IntentSignal;

/// Default noise floor: frequency below this is indistinguishable from noise.
pub const DEFAULT_NOISE_THRESHOLD: f64 = 0.3;

/// Default purity floor: coherence below this is a contradictory signal.
pub const DEFAULT_COHERENCE_THRESHOLD: f64 = 0.7;

/// Threshold filter in front of the Central Tunnel.
#[derive(Debug, Clone)]
pub struct SilenceGate {
    noise_threshold: f64,
    coherence_threshold: f64,
}

/// Result of passing one signal through the gate.
#[derive(Debug, Clone, Serialize)]
pub struct GateOutcome {
    /// Whether the signal survived the gate.
    pub passed: bool,
    /// The filtered signal: zeroed frequency on rejection, amplified
    /// frequency and reduced entropy on acceptance.
    pub signal: IntentSignal,
}

impl Default for SilenceGate {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_THRESHOLD, DEFAULT_COHERENCE_THRESHOLD)
    }
}

impl SilenceGate {
    /// Build a gate with explicit thresholds (both in [0,1]).
    pub fn new(noise_threshold: f64, coherence_threshold: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&noise_threshold));
        debug_assert!((0.0..=1.0).contains(&coherence_threshold));
        Self {
            noise_threshold,
            coherence_threshold,
        }
    }

    /// Apply the gate law to a signal.
    ///
    /// Pure: the input signal is not mutated, a new one is produced.
    pub fn filter(&self, signal: &IntentSignal) -> GateOutcome {
        if signal.frequency < self.noise_threshold || signal.coherence < self.coherence_threshold {
            return GateOutcome {
                passed: false,
                signal: IntentSignal {
                    frequency: 0.0,
                    ..signal.clone()
                },
            };
        }

        GateOutcome {
            passed: true,
            signal: IntentSignal {
                frequency: (signal.frequency * 1.5).min(1.0),
                entropy: (signal.entropy - 0.4).max(0.0),
                ..signal.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(frequency: f64, coherence: f64, entropy: f64) -> IntentSignal {
        IntentSignal {
            raw: "test".to_string(),
            frequency,
            coherence,
            entropy,
        }
    }

    #[test]
    fn rejects_below_noise_floor() {
        let outcome = SilenceGate::default().filter(&signal(0.2, 0.9, 0.4));
        assert!(!outcome.passed);
        assert_eq!(outcome.signal.frequency, 0.0);
    }

    #[test]
    fn rejects_below_coherence_floor() {
        let outcome = SilenceGate::default().filter(&signal(0.9, 0.6, 0.4));
        assert!(!outcome.passed);
        assert_eq!(outcome.signal.frequency, 0.0);
    }

    #[test]
    fn accepts_and_sharpens() {
        let outcome = SilenceGate::default().filter(&signal(0.5, 0.8, 0.5));
        assert!(outcome.passed);
        assert!((outcome.signal.frequency - 0.75).abs() < 1e-9);
        assert!((outcome.signal.entropy - 0.1).abs() < 1e-9);
        // Coherence passes through the gate untouched.
        assert!((outcome.signal.coherence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn amplification_clamps_to_one() {
        let outcome = SilenceGate::default().filter(&signal(0.9, 0.9, 0.1));
        assert!(outcome.passed);
        assert_eq!(outcome.signal.frequency, 1.0);
        assert_eq!(outcome.signal.entropy, 0.0);
    }

    #[test]
    fn thresholds_are_exclusive_bounds() {
        // Exactly at the floors is not "below" the floors.
        let outcome = SilenceGate::default().filter(&signal(0.3, 0.7, 0.4));
        assert!(outcome.passed);
    }
}
