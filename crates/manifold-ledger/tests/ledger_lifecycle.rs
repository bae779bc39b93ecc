//! Certificate lifecycle scenarios.

use chrono::{TimeZone, Utc};
use manifold_ledger::{CertificateLedger, CertificateStatus, LedgerEventKind};
use manifold_quantum::{Clock, Entropy};

fn ledger() -> CertificateLedger {
    let clock = Clock::fixed(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
    CertificateLedger::with_sources(Entropy::seeded(7), clock)
}

#[test]
fn creation_proposes_and_boosts_reputation() {
    let mut ledger = ledger();
    let id = ledger.create_certificate("alice", "build X", 80.0, 400.0, 0.8);

    let cert = ledger.certificate(&id).expect("created");
    assert_eq!(cert.status, CertificateStatus::Proposed);
    assert_eq!(cert.backer_count(), 0);
    assert_eq!(cert.quantum_stability, 0.8);
    assert_eq!(ledger.creator_reputation("alice"), 60);
}

#[test]
fn funding_flips_when_backings_reach_the_goal() {
    let mut ledger = ledger();
    let id = ledger.create_certificate("alice", "build X", 80.0, 400.0, 0.8);

    assert!(ledger.back_certificate(&id, "bob", 100.0));
    assert_eq!(
        ledger.certificate(&id).unwrap().status,
        CertificateStatus::Proposed
    );

    // Two backers at a flat 200 each: 2 * 200 >= 400.
    assert!(ledger.back_certificate(&id, "carol", 200.0));
    let cert = ledger.certificate(&id).unwrap();
    assert_eq!(cert.status, CertificateStatus::Funded);
    assert_eq!(cert.backers(), vec!["bob".to_string(), "carol".to_string()]);
}

#[test]
fn funded_certificates_accept_no_more_backers() {
    let mut ledger = ledger();
    let id = ledger.create_certificate("alice", "build X", 80.0, 100.0, 0.8);
    assert!(ledger.back_certificate(&id, "bob", 100.0));
    assert_eq!(
        ledger.certificate(&id).unwrap().status,
        CertificateStatus::Funded
    );
    assert!(!ledger.back_certificate(&id, "carol", 100.0));
    assert_eq!(ledger.certificate(&id).unwrap().backer_count(), 1);
}

#[test]
fn successful_completion_settles_yield_and_reputation() {
    let mut ledger = ledger();
    let id = ledger.create_certificate("alice", "build X", 80.0, 200.0, 0.8);
    ledger.back_certificate(&id, "bob", 100.0);
    ledger.back_certificate(&id, "carol", 100.0);
    ledger.complete_certificate(&id, true, 300.0);

    let cert = ledger.certificate(&id).unwrap();
    assert_eq!(cert.status, CertificateStatus::Completed);
    assert!(cert.completed_at.is_some());
    assert_eq!(cert.yield_distributed, 300.0);
    // +10 create, +50 complete, clamped at the ceiling.
    assert_eq!(ledger.creator_reputation("alice"), 100);

    // Share: 300 / (2 backers + creator).
    assert!(ledger.events().iter().any(|e| matches!(
        e.kind,
        LedgerEventKind::YieldShare {
            participants: 3,
            ref share,
            ..
        } if (*share - 100.0).abs() < 1e-9
    )));
}

#[test]
fn failure_slashes_stake_and_reputation() {
    let mut ledger = ledger();
    let id = ledger.create_certificate("alice", "build X", 80.0, 400.0, 0.8);
    ledger.complete_certificate(&id, false, 0.0);

    let cert = ledger.certificate(&id).unwrap();
    assert_eq!(cert.status, CertificateStatus::Failed);
    assert!(cert.completed_at.is_none());
    // +10 create, -20 fail.
    assert_eq!(ledger.creator_reputation("alice"), 40);

    assert!(ledger.events().iter().any(|e| matches!(
        e.kind,
        LedgerEventKind::StakeSlashed {
            ref stake_amount, ..
        } if *stake_amount == 80.0
    )));
}

#[test]
fn terminal_states_never_transition() {
    let mut ledger = ledger();
    let id = ledger.create_certificate("alice", "build X", 80.0, 100.0, 0.8);
    ledger.complete_certificate(&id, true, 100.0);
    assert_eq!(
        ledger.certificate(&id).unwrap().status,
        CertificateStatus::Completed
    );

    // Settling again, either way, changes nothing.
    ledger.complete_certificate(&id, false, 0.0);
    assert_eq!(
        ledger.certificate(&id).unwrap().status,
        CertificateStatus::Completed
    );
    assert_eq!(ledger.creator_reputation("alice"), 100);
    assert!(!ledger.back_certificate(&id, "bob", 100.0));
}

#[test]
fn reputation_stays_clamped_over_any_sequence() {
    let mut ledger = ledger();
    for _ in 0..5 {
        let id = ledger.create_certificate("alice", "build X", 80.0, 100.0, 0.8);
        ledger.complete_certificate(&id, true, 100.0);
    }
    assert_eq!(ledger.creator_reputation("alice"), 100);

    for _ in 0..10 {
        let id = ledger.create_certificate("bob", "build Y", 80.0, 100.0, 0.8);
        ledger.complete_certificate(&id, false, 0.0);
    }
    // Each round is +10 then -20; floor at 0.
    assert_eq!(ledger.creator_reputation("bob"), 0);
}

#[test]
fn certificates_list_preserves_creation_order() {
    let mut ledger = ledger();
    let a = ledger.create_certificate("alice", "build X", 80.0, 400.0, 0.8);
    let b = ledger.create_certificate("bob", "build Y", 80.0, 400.0, 0.8);
    let ids: Vec<String> = ledger.certificates().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a, b]);
}
