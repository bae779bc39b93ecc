//! End-to-end manifestation scenarios through a full engine instance.
//!
//! Seeded entropy and fixed clocks keep every run deterministic.

use chrono::{TimeZone, Utc};
use manifold_engine::{EngineConfig, EngineEventKind, RealityEngine};
use manifold_quantum::{CELLS_PER_PIXEL, Clock, Entropy};
use std::f64::consts::TAU;

fn engine_with_seed(seed: u64) -> RealityEngine {
    let clock = Clock::fixed(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
    RealityEngine::with_sources(EngineConfig::default(), Entropy::seeded(seed), clock)
}

#[test]
fn directed_intent_manifests_a_pixel() {
    let mut engine = engine_with_seed(1);
    assert!(engine.create_new_reality("observer_1", "build quantum interface", 0.7));
    let state = engine.reality_state();
    assert_eq!(state.pixel_count, 1);
    assert!(state.stability > 0.0);
}

#[test]
fn hedged_intent_is_filtered() {
    let mut engine = engine_with_seed(2);
    assert!(!engine.create_new_reality("observer_1", "maybe build something", 0.7));
    assert_eq!(engine.reality_state().pixel_count, 0);
}

#[test]
fn short_intents_without_action_verbs_never_manifest() {
    let mut engine = engine_with_seed(3);
    for intent in ["hi", "ok", "do it", "a b tool", "nothing"] {
        assert!(intent.len() < 10);
        assert!(
            !engine.create_with_default_pressure("observer_1", intent),
            "{intent:?} should be filtered"
        );
    }
    assert_eq!(engine.reality_state().pixel_count, 0);
}

#[test]
fn accepted_pixels_have_twelve_cells_in_range() {
    let mut engine = engine_with_seed(4);
    assert!(engine.create_with_default_pressure("observer_1", "create a design system"));
    let pixel = &engine.pixels()[0];
    let cells = pixel.register().cells();
    assert_eq!(cells.len(), CELLS_PER_PIXEL);
    for cell in cells {
        assert!((0.0..=1.0).contains(&cell.amplitude));
        assert!((0.0..TAU).contains(&cell.phase));
        assert_eq!(cell.entanglement_size(), CELLS_PER_PIXEL - 1);
    }
}

#[test]
fn reads_are_idempotent() {
    let mut engine = engine_with_seed(5);
    engine.create_with_default_pressure("observer_1", "build a storage engine");
    engine.create_with_default_pressure("observer_1", "design a query tool");

    let first = engine.reality_state();
    let second = engine.reality_state();
    assert_eq!(first.pixel_count, second.pixel_count);
    assert_eq!(first.stability, second.stability);
    assert_eq!(first.packing_efficiency, second.packing_efficiency);
}

#[test]
fn packing_law_holds_for_any_accepted_count() {
    for n in 1..=24 {
        let mut engine = engine_with_seed(100 + n as u64);
        for i in 0..n {
            assert!(
                engine.create_with_default_pressure("observer_1", &format!("build tool number {i}"))
            );
        }
        let state = engine.reality_state();
        let slots: usize = state.grid.iter().map(Vec::len).sum();
        assert!(slots >= n);
        assert!((state.packing_efficiency - n as f64 / slots as f64).abs() < 1e-9);
    }
}

#[test]
fn grid_rows_alternate_widths() {
    let mut engine = engine_with_seed(6);
    for i in 0..11 {
        engine.create_with_default_pressure("observer_1", &format!("build tool number {i}"));
    }
    let widths: Vec<usize> = engine.reality_state().grid.iter().map(Vec::len).collect();
    assert_eq!(widths, vec![5, 4, 5]);
}

#[test]
fn exceeding_the_threshold_collapses_to_one_pixel() {
    let mut engine = engine_with_seed(7);
    for i in 0..25 {
        assert!(
            engine.create_with_default_pressure("observer_1", &format!("build tool number {i}"))
        );
    }
    let state = engine.reality_state();
    assert_eq!(state.pixel_count, 1);
    assert!(
        engine
            .events()
            .iter()
            .any(|e| matches!(e.kind, EngineEventKind::Reduced { collapsed: 25 }))
    );
    // The collapsed pixel still satisfies the register invariant.
    assert_eq!(engine.pixels()[0].register().cells().len(), CELLS_PER_PIXEL);
}

#[test]
fn growth_continues_after_reduction() {
    let mut engine = engine_with_seed(8);
    for i in 0..25 {
        engine.create_with_default_pressure("observer_1", &format!("build tool number {i}"));
    }
    assert_eq!(engine.reality_state().pixel_count, 1);
    assert!(engine.create_with_default_pressure("observer_1", "build one more tool"));
    assert_eq!(engine.reality_state().pixel_count, 2);
}

#[test]
fn event_log_tracks_accept_and_reject() {
    let mut engine = engine_with_seed(9);
    engine.create_with_default_pressure("observer_1", "build quantum interface");
    engine.create_with_default_pressure("observer_2", "maybe build something");

    let kinds: Vec<&str> = engine
        .events()
        .iter()
        .map(|e| match e.kind {
            EngineEventKind::Manifested { .. } => "manifested",
            EngineEventKind::Filtered { .. } => "filtered",
            EngineEventKind::Reduced { .. } => "reduced",
        })
        .collect();
    assert_eq!(kinds, vec!["manifested", "filtered"]);
}

#[test]
fn quantum_states_expose_every_cell() {
    let mut engine = engine_with_seed(10);
    engine.create_with_default_pressure("observer_1", "build a storage engine");
    engine.create_with_default_pressure("observer_1", "design a query tool");
    let snapshots = engine.quantum_states();
    assert_eq!(snapshots.len(), 2 * CELLS_PER_PIXEL);
    assert!(
        snapshots
            .iter()
            .all(|s| s.entanglement_size == CELLS_PER_PIXEL - 1)
    );
}

#[test]
fn same_seed_same_reality() {
    let run = |seed: u64| {
        let mut engine = engine_with_seed(seed);
        engine.create_with_default_pressure("observer_1", "build quantum interface");
        engine.create_with_default_pressure("observer_1", "design a query tool");
        engine.reality_state().stability
    };
    assert_eq!(run(42), run(42));
}
