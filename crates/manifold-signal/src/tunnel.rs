//! Central Tunnel compression: ingress, compression, egress.
//!
//! Three fixed stages, each driven by a rising share of the caller-supplied
//! pressure. Deterministic given signal and pressure.

use crate::analyzer::IntentSignal;

/// Number of compression stages. The tunnel is always three deep.
pub const COMPRESSION_STAGES: usize = 3;

/// Compress an accepted signal through the tunnel.
///
/// Stage `k` (0-indexed) applies `stage_pressure = pressure * (k+1) / 3`:
/// frequency grows by `1 + stage_pressure`, entropy shrinks by
/// `1 - stage_pressure`, coherence gains `stage_pressure * 0.3`. All three
/// metrics are clamped back to [0,1] at egress.
pub fn compress(signal: &IntentSignal, pressure: f64) -> IntentSignal {
    let mut compressed = signal.clone();

    for stage in 0..COMPRESSION_STAGES {
        let stage_pressure = pressure * (stage + 1) as f64 / COMPRESSION_STAGES as f64;

        compressed.frequency *= 1.0 + stage_pressure;
        compressed.entropy *= 1.0 - stage_pressure;
        compressed.coherence = (compressed.coherence + stage_pressure * 0.3).min(1.0);
    }

    compressed.frequency = compressed.frequency.clamp(0.0, 1.0);
    compressed.coherence = compressed.coherence.clamp(0.0, 1.0);
    compressed.entropy = compressed.entropy.clamp(0.0, 1.0);
    compressed
}
