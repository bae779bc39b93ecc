//! Derived reality state: snapshots recomputed on every read.

use chrono::{DateTime, Utc};
use serde::Serialize;

use manifold_quantum::RealityPixel;

/// Point-in-time view of the whole reality.
///
/// Fully derived from the pixel collection; holding one of these does not
/// alias engine state.
#[derive(Debug, Clone, Serialize)]
pub struct RealityState {
    pub pixel_count: usize,
    /// Mean per-pixel stability; 0.0 when the reality is empty.
    pub stability: f64,
    /// `placed / allocated slots` of the packed grid.
    pub packing_efficiency: f64,
    /// The packed hex grid: `None` marks an unfilled slot.
    pub grid: Vec<Vec<Option<PixelSummary>>>,
}

/// One pixel as seen from a state snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct PixelSummary {
    pub intent: String,
    pub observer_id: String,
    pub stability: f64,
    pub coherence: f64,
    pub created_at: DateTime<Utc>,
}

impl PixelSummary {
    pub fn of(pixel: &RealityPixel) -> Self {
        Self {
            intent: pixel.intent.clone(),
            observer_id: pixel.observer_id.clone(),
            stability: pixel.stability(),
            coherence: pixel.signal.coherence,
            created_at: pixel.created_at,
        }
    }
}

/// Flat view of one cell, for visualization callers.
#[derive(Debug, Clone, Serialize)]
pub struct CellSnapshot {
    pub id: String,
    pub amplitude: f64,
    pub phase: f64,
    pub entanglement_size: usize,
}
