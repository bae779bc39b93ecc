//! Engine event log.
//!
//! Every observable lifecycle step is appended as a typed row. The log is
//! in-memory and append-only for the engine's lifetime; it is the structured
//! replacement for ad-hoc console output.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One engine event row.
#[derive(Debug, Clone, Serialize)]
pub struct EngineEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EngineEventKind,
}

/// What happened.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEventKind {
    /// A manifestation passed the gate and produced a pixel.
    Manifested {
        observer_id: String,
        intent: String,
        frequency: f64,
        coherence: f64,
    },
    /// The Silence Gate filtered a manifestation out.
    Filtered {
        observer_id: String,
        intent: String,
        frequency: f64,
        coherence: f64,
    },
    /// Dimensional reduction collapsed the pixel collection.
    Reduced { collapsed: usize },
}
