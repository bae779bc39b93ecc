//! # Manifold Signal
//!
//! The front half of the manifestation pipeline: free-text intent goes in,
//! a compressed `IntentSignal` comes out.
//!
//! ```text
//! raw intent ──► Analyzer ──► SilenceGate ──► CentralTunnel ──► compressed signal
//!                  │              │
//!                  │              └─ rejects noisy/incoherent signals
//!                  └─ lexical heuristics only, no side effects
//! ```
//!
//! Every stage is a pure transformation: the analyzer derives metrics from
//! text, the gate either zeroes a signal out or sharpens it, and the tunnel
//! amplifies under pressure. Nothing here owns state.

pub mod analyzer;
pub mod gate;
pub mod tunnel;

pub use analyzer::{IntentSignal, analyze};
pub use gate::{GateOutcome, SilenceGate};
pub use tunnel::{COMPRESSION_STAGES, compress};
