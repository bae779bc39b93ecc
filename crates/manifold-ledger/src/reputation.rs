//! Creator reputation: a bounded score per creator id.

use serde::Serialize;
use std::collections::BTreeMap;

/// Score assumed for creators the ledger has never seen.
pub const DEFAULT_REPUTATION: u8 = 50;

/// Mapping from creator id to a score in [0,100].
///
/// Process-lifetime state; adjustments saturate at the bounds rather than
/// failing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReputationBook {
    scores: BTreeMap<String, u8>,
}

impl ReputationBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score for a creator, defaulting to 50 when unseen.
    pub fn score(&self, creator: &str) -> u8 {
        self.scores.get(creator).copied().unwrap_or(DEFAULT_REPUTATION)
    }

    /// Apply a signed adjustment, clamped into [0,100].
    ///
    /// Returns `(before, after)` for event recording.
    pub fn adjust(&mut self, creator: &str, delta: i16) -> (u8, u8) {
        let before = self.score(creator);
        let after = (i16::from(before) + delta).clamp(0, 100) as u8;
        self.scores.insert(creator.to_string(), after);
        (before, after)
    }
}
