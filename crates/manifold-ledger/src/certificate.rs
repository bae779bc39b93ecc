//! Certificate types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a certificate.
///
/// `Building` exists in the status space for embedders that track work in
/// progress, but no ledger operation produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateStatus {
    Proposed,
    Funded,
    Building,
    Completed,
    Failed,
}

impl CertificateStatus {
    /// Completed and Failed are terminal: no transition leaves them.
    pub fn is_terminal(self) -> bool {
        matches!(self, CertificateStatus::Completed | CertificateStatus::Failed)
    }
}

/// An economic record tied to one successful manifestation.
///
/// Mutated only through the ledger's lifecycle operations; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentCertificate {
    pub id: String,
    pub creator: String,
    pub intent: String,
    pub stake_amount: f64,
    pub funding_goal: f64,
    /// The pixel stability at certification time.
    pub quantum_stability: f64,
    pub status: CertificateStatus,
    backers: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub yield_distributed: f64,
}

impl IntentCertificate {
    pub(crate) fn propose(
        id: String,
        creator: String,
        intent: String,
        stake_amount: f64,
        funding_goal: f64,
        quantum_stability: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            creator,
            intent,
            stake_amount,
            funding_goal,
            quantum_stability,
            status: CertificateStatus::Proposed,
            backers: Vec::new(),
            created_at,
            completed_at: None,
            yield_distributed: 0.0,
        }
    }

    /// Ordered backer ids, as a copy, so callers cannot alias the owned list.
    pub fn backers(&self) -> Vec<String> {
        self.backers.clone()
    }

    /// Number of recorded backings.
    pub fn backer_count(&self) -> usize {
        self.backers.len()
    }

    pub(crate) fn push_backer(&mut self, backer: String) {
        debug_assert_eq!(self.status, CertificateStatus::Proposed);
        self.backers.push(backer);
    }
}
