//! Injectable randomness source.
//!
//! The core is deterministic except for two decorative draws: phase jitter
//! when a cell is created, and the random suffix of certificate ids. Both
//! are routed through `Entropy` so production code uses OS entropy while
//! tests seed a fixed stream.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Length of the random id suffix drawn by [`Entropy::id_suffix`].
pub const ID_SUFFIX_LEN: usize = 9;

/// Seeded random stream for phase jitter and id suffixes.
#[derive(Debug, Clone)]
pub struct Entropy {
    rng: StdRng,
}

impl Entropy {
    /// OS-seeded entropy for production use.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic entropy for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in [0, 2π): the initial phase of a fresh cell.
    ///
    /// Decorative only; nothing downstream depends on this value for
    /// correctness.
    pub fn phase_jitter(&mut self) -> f64 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Nine alphanumeric characters for best-effort-unique ids.
    pub fn id_suffix(&mut self) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(char::from)
            .collect()
    }
}
