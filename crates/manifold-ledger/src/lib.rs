//! # Manifold Ledger
//!
//! The economic layer on top of manifested reality. Each successful
//! manifestation can be recorded as an [`IntentCertificate`] and driven
//! through a funding lifecycle:
//!
//! ```text
//! Proposed ──► Funded ──► Completed
//!    │           │
//!    └───────────┴──────► Failed
//! ```
//!
//! Terminal states never transition. Creator reputation is a bounded score
//! in [0,100] adjusted by lifecycle events. This ledger tracks bookkeeping
//! only: no value moves; slashes and yield shares are recorded as events.

pub mod certificate;
pub mod events;
pub mod ledger;
pub mod reputation;

pub use certificate::{CertificateStatus, IntentCertificate};
pub use events::{LedgerEvent, LedgerEventKind};
pub use ledger::CertificateLedger;
pub use reputation::{DEFAULT_REPUTATION, ReputationBook};
