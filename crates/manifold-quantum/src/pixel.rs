//! One manifested reality unit.

use chrono::{DateTime, Utc};
use manifold_signal::IntentSignal;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::entropy::Entropy;
use crate::register::QuantumRegister;

/// A pixel of reality: one accepted intent plus its quantum register.
///
/// Created only when the Silence Gate accepts a manifestation. Structurally
/// immutable afterwards; only the owned cells' amplitude/phase move. Pixels
/// are never removed individually; dimensional reduction replaces the whole
/// collection at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealityPixel {
    pub intent: String,
    pub pressure: f64,
    pub observer_id: String,
    /// The compressed signal that manifested this pixel.
    pub signal: IntentSignal,
    pub created_at: DateTime<Utc>,
    register: QuantumRegister,
}

impl RealityPixel {
    /// Manifest a pixel from a gate-accepted, tunnel-compressed signal.
    pub fn manifest(
        observer_id: impl Into<String>,
        signal: IntentSignal,
        pressure: f64,
        entropy: &mut Entropy,
        clock: &Clock,
    ) -> Self {
        let mut register = QuantumRegister::new(entropy);
        register.apply_pressure(pressure * signal.frequency);
        Self {
            intent: signal.raw.clone(),
            pressure,
            observer_id: observer_id.into(),
            signal,
            created_at: clock.now(),
            register,
        }
    }

    /// Derived stability of this pixel, recomputed from the cells on every
    /// call.
    pub fn stability(&self) -> f64 {
        self.register.stability()
    }

    /// Read-only view of the owned register.
    pub fn register(&self) -> &QuantumRegister {
        &self.register
    }

    /// Assemble a pixel from already-built parts. Reserved for the
    /// assembler's dimensional reduction, which synthesizes a collapsed
    /// pixel out of many.
    pub(crate) fn from_parts(
        observer_id: String,
        signal: IntentSignal,
        pressure: f64,
        created_at: DateTime<Utc>,
        register: QuantumRegister,
    ) -> Self {
        Self {
            intent: signal.raw.clone(),
            pressure,
            observer_id,
            signal,
            created_at,
            register,
        }
    }
}
