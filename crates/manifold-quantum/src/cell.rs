//! A single quantum cell: amplitude, phase, and its entanglement links.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::{PI, TAU};

/// Baseline amplitude for a freshly created cell.
pub const BASELINE_AMPLITUDE: f64 = 0.1;

/// One unit of simulated quantum state.
///
/// Amplitude and phase mutate in place on every accepted manifestation
/// targeting the owning pixel; the entanglement set is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantumCell {
    pub id: String,
    /// In [0,1].
    pub amplitude: f64,
    /// In [0, 2π).
    pub phase: f64,
    entangled_with: BTreeSet<String>,
}

impl QuantumCell {
    /// Create a cell at baseline amplitude with the given phase jitter.
    pub fn new(id: impl Into<String>, phase: f64) -> Self {
        debug_assert!((0.0..TAU).contains(&phase));
        Self {
            id: id.into(),
            amplitude: BASELINE_AMPLITUDE,
            phase,
            entangled_with: BTreeSet::new(),
        }
    }

    /// Link this cell to a sibling. Idempotent.
    pub(crate) fn entangle(&mut self, other_id: &str) {
        if other_id != self.id {
            self.entangled_with.insert(other_id.to_string());
        }
    }

    /// Number of entanglement links.
    pub fn entanglement_size(&self) -> usize {
        self.entangled_with.len()
    }

    /// A copy of the entanglement set. Returned by value so callers cannot
    /// alias the cell's internal state.
    pub fn entangled_with(&self) -> BTreeSet<String> {
        self.entangled_with.clone()
    }

    /// Nudge amplitude and phase by a pressure effect
    /// (`pressure * frequency` from the compressed signal).
    pub fn apply_pressure(&mut self, effect: f64) {
        self.amplitude = (self.amplitude + effect * 0.3).min(1.0);
        self.phase = (self.phase + effect * 0.1).rem_euclid(TAU);
    }

    /// How close the phase sits to zero, as circular distance normalized
    /// over π. 1.0 at phase 0, 0.0 at phase π.
    pub fn phase_alignment(&self) -> f64 {
        1.0 - self.phase.min(TAU - self.phase) / PI
    }

    /// Per-cell stability: mean of amplitude and phase alignment.
    pub fn stability(&self) -> f64 {
        (self.amplitude + self.phase_alignment()) / 2.0
    }
}
