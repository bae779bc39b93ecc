//! # Manifold Engine
//!
//! The orchestrator: one [`RealityEngine`] instance owns a pixel collection
//! and runs each manifestation request through
//! Analyzer → Silence Gate → Central Tunnel → register update.
//!
//! Engines are explicit instances constructed by the caller; there is no
//! global. All methods take `&self`/`&mut self` and run to completion;
//! the design is single-threaded by contract. An embedding that serves
//! concurrent callers must put its own mutex or actor boundary around the
//! whole engine.

pub mod config;
pub mod engine;
pub mod events;
pub mod state;

pub use config::{ConfigError, EngineConfig};
pub use engine::RealityEngine;
pub use events::{EngineEvent, EngineEventKind};
pub use state::{CellSnapshot, PixelSummary, RealityState};
