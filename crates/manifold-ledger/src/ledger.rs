//! The certificate ledger.

use manifold_quantum::{Clock, Entropy};

use crate::certificate::{CertificateStatus, IntentCertificate};
use crate::events::{LedgerEvent, LedgerEventKind};
use crate::reputation::ReputationBook;

/// Reputation delta for creating a certificate.
const CREATE_REPUTATION: i16 = 10;
/// Reputation delta for completing one successfully.
const COMPLETE_REPUTATION: i16 = 50;
/// Reputation delta for a failed certificate.
const FAIL_REPUTATION: i16 = -20;

/// In-memory certificate ledger with a reputation book and event log.
///
/// One instance per session, constructed by the caller. Unknown ids and
/// invalid transitions are normal no-op outcomes signalled by return value,
/// never errors.
#[derive(Debug)]
pub struct CertificateLedger {
    certificates: Vec<IntentCertificate>,
    reputation: ReputationBook,
    entropy: Entropy,
    clock: Clock,
    events: Vec<LedgerEvent>,
}

impl CertificateLedger {
    /// Ledger with OS entropy and the system clock.
    pub fn new() -> Self {
        Self::with_sources(Entropy::from_os(), Clock::system())
    }

    /// Ledger with injected entropy/clock, for deterministic tests.
    pub fn with_sources(entropy: Entropy, clock: Clock) -> Self {
        Self {
            certificates: Vec::new(),
            reputation: ReputationBook::new(),
            entropy,
            clock,
            events: Vec::new(),
        }
    }

    /// Record a successful manifestation as a proposed certificate.
    ///
    /// Ids are `ic_<unix_millis>_<random suffix>`: best-effort unique, not
    /// cryptographic. Creating boosts the creator's reputation by 10.
    pub fn create_certificate(
        &mut self,
        creator: &str,
        intent: &str,
        stake_amount: f64,
        funding_goal: f64,
        quantum_stability: f64,
    ) -> String {
        let now = self.clock.now();
        let id = format!(
            "ic_{}_{}",
            now.timestamp_millis(),
            self.entropy.id_suffix()
        );

        self.certificates.push(IntentCertificate::propose(
            id.clone(),
            creator.to_string(),
            intent.to_string(),
            stake_amount,
            funding_goal,
            quantum_stability,
            now,
        ));

        self.record(LedgerEventKind::CertificateCreated {
            certificate_id: id.clone(),
            creator: creator.to_string(),
            intent: intent.to_string(),
        });
        self.adjust_reputation(creator, CREATE_REPUTATION);

        id
    }

    /// Back a proposed certificate.
    ///
    /// Returns false (no-op) when the id is unknown or the certificate has
    /// left `Proposed`. Funding flips when `backers * amount` reaches the
    /// goal. Amount is a flat per-backing unit, not a running sum
    /// (deliberate simplification of the funding model).
    pub fn back_certificate(&mut self, certificate_id: &str, backer: &str, amount: f64) -> bool {
        let Some(index) = self.index_of(certificate_id) else {
            return false;
        };
        if self.certificates[index].status != CertificateStatus::Proposed {
            return false;
        }

        self.certificates[index].push_backer(backer.to_string());
        self.record(LedgerEventKind::Backed {
            certificate_id: certificate_id.to_string(),
            backer: backer.to_string(),
            amount,
        });

        let certificate = &mut self.certificates[index];
        let total_backed = certificate.backer_count() as f64 * amount;
        if total_backed >= certificate.funding_goal {
            certificate.status = CertificateStatus::Funded;
            self.record(LedgerEventKind::Funded {
                certificate_id: certificate_id.to_string(),
            });
        }

        true
    }

    /// Settle a certificate.
    ///
    /// No-op when the id is unknown or the certificate is already terminal.
    /// Success stamps completion, records the distributed yield, computes
    /// the per-participant share (creator + backers), and boosts reputation.
    /// Failure slashes reputation and records the stake forfeit; no balance
    /// is debited.
    pub fn complete_certificate(&mut self, certificate_id: &str, success: bool, yield_amount: f64) {
        let Some(index) = self.index_of(certificate_id) else {
            return;
        };
        if self.certificates[index].status.is_terminal() {
            return;
        }

        let now = self.clock.now();
        let creator = self.certificates[index].creator.clone();

        if success {
            let participants = self.certificates[index].backer_count() + 1;
            let share = yield_amount / participants as f64;

            let certificate = &mut self.certificates[index];
            certificate.status = CertificateStatus::Completed;
            certificate.completed_at = Some(now);
            certificate.yield_distributed = yield_amount;

            self.record(LedgerEventKind::Completed {
                certificate_id: certificate_id.to_string(),
                yield_distributed: yield_amount,
            });
            self.record(LedgerEventKind::YieldShare {
                certificate_id: certificate_id.to_string(),
                participants,
                share,
            });
            self.adjust_reputation(&creator, COMPLETE_REPUTATION);
        } else {
            let certificate = &mut self.certificates[index];
            certificate.status = CertificateStatus::Failed;
            let stake_amount = certificate.stake_amount;

            self.record(LedgerEventKind::Failed {
                certificate_id: certificate_id.to_string(),
            });
            self.record(LedgerEventKind::StakeSlashed {
                certificate_id: certificate_id.to_string(),
                creator: creator.clone(),
                stake_amount,
            });
            self.adjust_reputation(&creator, FAIL_REPUTATION);
        }
    }

    /// All certificates in creation order, as copies.
    pub fn certificates(&self) -> Vec<IntentCertificate> {
        self.certificates.clone()
    }

    /// Lookup one certificate by id.
    pub fn certificate(&self, certificate_id: &str) -> Option<&IntentCertificate> {
        self.certificates.iter().find(|c| c.id == certificate_id)
    }

    /// Creator reputation in [0,100]; 50 for unseen creators.
    pub fn creator_reputation(&self, creator: &str) -> u8 {
        self.reputation.score(creator)
    }

    /// The append-only event log for this ledger's lifetime.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    fn index_of(&self, certificate_id: &str) -> Option<usize> {
        self.certificates.iter().position(|c| c.id == certificate_id)
    }

    fn adjust_reputation(&mut self, creator: &str, delta: i16) {
        let (from, to) = self.reputation.adjust(creator, delta);
        self.record(LedgerEventKind::ReputationChanged {
            creator: creator.to_string(),
            from,
            to,
        });
    }

    fn record(&mut self, kind: LedgerEventKind) {
        self.events.push(LedgerEvent {
            at: self.clock.now(),
            kind,
        });
    }
}

impl Default for CertificateLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ledger() -> CertificateLedger {
        let clock = Clock::fixed(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
        CertificateLedger::with_sources(Entropy::seeded(33), clock)
    }

    #[test]
    fn ids_carry_timestamp_prefix_and_stay_unique() {
        let mut ledger = ledger();
        let a = ledger.create_certificate("alice", "build X", 80.0, 400.0, 0.8);
        let b = ledger.create_certificate("alice", "build Y", 80.0, 400.0, 0.8);
        assert!(a.starts_with("ic_"));
        assert_ne!(a, b);
    }

    #[test]
    fn backing_unknown_certificate_is_a_noop() {
        let mut ledger = ledger();
        assert!(!ledger.back_certificate("ic_missing", "bob", 100.0));
        assert!(ledger.certificates().is_empty());
    }

    #[test]
    fn completing_unknown_certificate_is_a_noop() {
        let mut ledger = ledger();
        ledger.complete_certificate("ic_missing", true, 500.0);
        assert!(ledger.events().is_empty());
    }
}
