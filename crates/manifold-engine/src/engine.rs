//! The Reality Engine.

use manifold_quantum::{Clock, Entropy, RealityPixel, assembler};
use manifold_signal::{SilenceGate, analyze, compress};

use crate::config::EngineConfig;
use crate::events::{EngineEvent, EngineEventKind};
use crate::state::{CellSnapshot, PixelSummary, RealityState};

/// One reality session: pixel collection, config, entropy, clock, event log.
///
/// Construct one per session and pass it by reference into request handlers.
/// All mutation goes through `&mut self`; reads are pure and recomputed per
/// call.
#[derive(Debug)]
pub struct RealityEngine {
    config: EngineConfig,
    gate: SilenceGate,
    pixels: Vec<RealityPixel>,
    entropy: Entropy,
    clock: Clock,
    events: Vec<EngineEvent>,
}

impl RealityEngine {
    /// Engine with OS entropy and the system clock.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_sources(config, Entropy::from_os(), Clock::system())
    }

    /// Engine with injected entropy/clock, for deterministic tests.
    pub fn with_sources(config: EngineConfig, entropy: Entropy, clock: Clock) -> Self {
        if let Err(e) = config.validate() {
            panic!("invalid engine config: {e}");
        }
        let gate = SilenceGate::new(config.noise_threshold, config.coherence_threshold);
        Self {
            config,
            gate,
            pixels: Vec::new(),
            entropy,
            clock,
            events: Vec::new(),
        }
    }

    /// Run one manifestation attempt through the full pipeline.
    ///
    /// Returns true iff the Silence Gate accepted the intent. On acceptance
    /// a pixel is appended and its register takes the compressed pressure;
    /// on rejection nothing changes except the event log. A rejected intent
    /// is a normal outcome, not an error.
    pub fn create_new_reality(&mut self, observer_id: &str, intent: &str, pressure: f64) -> bool {
        let pressure = pressure.clamp(0.0, 1.0);
        let intent = intent.trim();
        if intent.is_empty() {
            self.record(EngineEventKind::Filtered {
                observer_id: observer_id.to_string(),
                intent: String::new(),
                frequency: 0.0,
                coherence: 0.0,
            });
            return false;
        }

        let signal = analyze(intent);
        let outcome = self.gate.filter(&signal);
        if !outcome.passed {
            self.record(EngineEventKind::Filtered {
                observer_id: observer_id.to_string(),
                intent: intent.to_string(),
                frequency: signal.frequency,
                coherence: signal.coherence,
            });
            return false;
        }

        let compressed = compress(&outcome.signal, pressure);
        self.record(EngineEventKind::Manifested {
            observer_id: observer_id.to_string(),
            intent: intent.to_string(),
            frequency: compressed.frequency,
            coherence: compressed.coherence,
        });

        let pixel = RealityPixel::manifest(
            observer_id,
            compressed,
            pressure,
            &mut self.entropy,
            &self.clock,
        );
        self.pixels.push(pixel);

        if self.pixels.len() > self.config.reduction_threshold {
            let collapsed = self.pixels.len();
            self.pixels = assembler::reduce_dimensionality(
                std::mem::take(&mut self.pixels),
                self.config.reduction_threshold,
                &mut self.entropy,
                &self.clock,
            );
            self.record(EngineEventKind::Reduced { collapsed });
        }

        true
    }

    /// Manifestation at the configured default pressure.
    pub fn create_with_default_pressure(&mut self, observer_id: &str, intent: &str) -> bool {
        self.create_new_reality(observer_id, intent, self.config.default_pressure)
    }

    /// Derived state snapshot: recomputed from the pixel collection on every
    /// call, never cached.
    pub fn reality_state(&self) -> RealityState {
        let packed = assembler::pack_with_widths(
            &self.pixels,
            self.config.row_width_even,
            self.config.row_width_odd,
        );

        let stability = if self.pixels.is_empty() {
            0.0
        } else {
            self.pixels.iter().map(RealityPixel::stability).sum::<f64>() / self.pixels.len() as f64
        };

        let grid = packed
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|slot| slot.map(|index| PixelSummary::of(&self.pixels[index])))
                    .collect()
            })
            .collect();

        RealityState {
            pixel_count: self.pixels.len(),
            stability,
            packing_efficiency: packed.efficiency,
            grid,
        }
    }

    /// Flat snapshot of every cell across all pixels, for visualization.
    pub fn quantum_states(&self) -> Vec<CellSnapshot> {
        self.pixels
            .iter()
            .flat_map(|pixel| pixel.register().cells())
            .map(|cell| CellSnapshot {
                id: cell.id.clone(),
                amplitude: cell.amplitude,
                phase: cell.phase,
                entanglement_size: cell.entanglement_size(),
            })
            .collect()
    }

    /// Read-only view of the pixel collection, in creation order.
    pub fn pixels(&self) -> &[RealityPixel] {
        &self.pixels
    }

    /// The append-only event log for this engine's lifetime.
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn record(&mut self, kind: EngineEventKind) {
        self.events.push(EngineEvent {
            at: self.clock.now(),
            kind,
        });
    }
}
