//! Injectable time source.

use chrono::{DateTime, Utc};

/// Where timestamps come from.
///
/// Engine and ledger never call `Utc::now()` directly; they ask their clock.
/// Tests pin a fixed instant so created/completed timestamps and time-based
/// id prefixes are reproducible.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Wall-clock time.
    System,
    /// A pinned instant, for tests.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Wall-clock source for production use.
    pub fn system() -> Self {
        Clock::System
    }

    /// Pinned source for tests.
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Clock::Fixed(at)
    }

    /// The current instant according to this clock.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::System
    }
}
