//! The per-pixel cell register.
//!
//! Twelve cells with complete mutual entanglement (11 links each), created
//! once and never restructured. Every accepted manifestation nudges all
//! twelve in lockstep.

use serde::{Deserialize, Serialize};

use crate::cell::QuantumCell;
use crate::entropy::Entropy;

/// Cells per pixel. Fixed by the reality model.
pub const CELLS_PER_PIXEL: usize = 12;

/// The full cell set owned by one reality pixel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantumRegister {
    cells: Vec<QuantumCell>,
}

impl QuantumRegister {
    /// Instantiate `CELLS_PER_PIXEL` cells with jittered phases and wire up
    /// complete entanglement.
    pub fn new(entropy: &mut Entropy) -> Self {
        let mut cells: Vec<QuantumCell> = (0..CELLS_PER_PIXEL)
            .map(|i| QuantumCell::new(format!("quanta_{i}"), entropy.phase_jitter()))
            .collect();

        let ids: Vec<String> = cells.iter().map(|c| c.id.clone()).collect();
        for cell in &mut cells {
            for id in &ids {
                cell.entangle(id);
            }
        }

        let register = Self { cells };
        register.assert_invariants();
        register
    }

    /// Apply one accepted manifestation to every cell.
    ///
    /// `effect` is `pressure * frequency` of the compressed signal.
    pub fn apply_pressure(&mut self, effect: f64) {
        for cell in &mut self.cells {
            cell.apply_pressure(effect);
        }
    }

    /// Derived stability: mean per-cell stability. Computed at read time,
    /// never cached.
    pub fn stability(&self) -> f64 {
        self.assert_invariants();
        let sum: f64 = self.cells.iter().map(QuantumCell::stability).sum();
        sum / self.cells.len() as f64
    }

    /// Read-only view of the cells.
    pub fn cells(&self) -> &[QuantumCell] {
        &self.cells
    }

    /// Overwrite one cell's amplitude. Used only by dimensional reduction
    /// when collapsing many registers into one.
    pub(crate) fn set_amplitude(&mut self, index: usize, amplitude: f64) {
        debug_assert!((0.0..=1.0).contains(&amplitude));
        self.cells[index].amplitude = amplitude;
    }

    /// A register without exactly 12 fully-entangled cells is a programming
    /// error, not a recoverable state.
    fn assert_invariants(&self) {
        assert_eq!(self.cells.len(), CELLS_PER_PIXEL, "register cell count");
        debug_assert!(
            self.cells
                .iter()
                .all(|c| c.entanglement_size() == CELLS_PER_PIXEL - 1),
            "entanglement must be complete"
        );
    }
}
