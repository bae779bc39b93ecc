//! Ledger event log.
//!
//! Slashes and yield shares exist *only* here: the ledger is bookkeeping,
//! no balances move.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One ledger event row.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: LedgerEventKind,
}

/// What happened.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEventKind {
    CertificateCreated {
        certificate_id: String,
        creator: String,
        intent: String,
    },
    Backed {
        certificate_id: String,
        backer: String,
        amount: f64,
    },
    Funded {
        certificate_id: String,
    },
    Completed {
        certificate_id: String,
        yield_distributed: f64,
    },
    Failed {
        certificate_id: String,
    },
    ReputationChanged {
        creator: String,
        from: u8,
        to: u8,
    },
    /// Per-participant share of a successful certificate's yield. Computed
    /// at completion, recorded here, not persisted per participant.
    YieldShare {
        certificate_id: String,
        participants: usize,
        share: f64,
    },
    /// Stake forfeited on failure. Bookkeeping only.
    StakeSlashed {
        certificate_id: String,
        creator: String,
        stake_amount: f64,
    },
}
