//! Unit tests for document expiry alerting
//!
//! Covers the ceiling day arithmetic, the classification boundaries at the
//! renewal window, and the filtering rules of the batch scan.

use chrono::{Duration, Utc};
use fleet_ops_core::documents::{compute_alerts, days_remaining, DocumentRecord};
use fleet_ops_core::types::{AlertLevel, DocumentKind, VehicleId};

fn insurance(expires_at: Option<chrono::DateTime<Utc>>) -> DocumentRecord {
    DocumentRecord::new(VehicleId::new(), DocumentKind::Insurance, "policy", expires_at)
}

/// A document that expired yesterday is classified expired with -1 days
#[test]
fn test_document_expired_yesterday() {
    let now = Utc::now();
    let documents = vec![insurance(Some(now - Duration::days(1)))];

    let alerts = compute_alerts(&documents, now, 30);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::Expired);
    assert_eq!(alerts[0].days_remaining, -1);
}

/// A document expiring exactly at the renewal window edge is to-renew
#[test]
fn test_document_at_renewal_window_edge() {
    let now = Utc::now();
    let documents = vec![insurance(Some(now + Duration::days(30)))];

    let alerts = compute_alerts(&documents, now, 30);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::ToRenew);
    assert_eq!(alerts[0].days_remaining, 30);
}

/// A document just past the renewal window is valid and excluded
#[test]
fn test_document_just_past_window_is_excluded() {
    let now = Utc::now();
    let documents = vec![insurance(Some(now + Duration::days(31)))];

    let alerts = compute_alerts(&documents, now, 30);
    assert!(alerts.is_empty());
}

/// A document with no expiration date never appears in the output
#[test]
fn test_undated_document_is_excluded() {
    let now = Utc::now();
    let documents = vec![insurance(None)];

    let alerts = compute_alerts(&documents, now, 30);
    assert!(alerts.is_empty());
}

/// A document expiring later today counts as to-renew, not expired
#[test]
fn test_document_expiring_today() {
    let now = Utc::now();
    // A few hours ago, still within the current 24-hour day under the
    // ceiling rule
    let documents = vec![insurance(Some(now - Duration::hours(6)))];

    let alerts = compute_alerts(&documents, now, 30);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::ToRenew);
    assert_eq!(alerts[0].days_remaining, 0);
}

/// Ceiling arithmetic over partial days
#[test]
fn test_days_remaining_ceiling_rule() {
    let now = Utc::now();

    assert_eq!(days_remaining(now, now), 0);
    assert_eq!(days_remaining(now + Duration::milliseconds(1), now), 1);
    assert_eq!(days_remaining(now + Duration::hours(36), now), 2);
    assert_eq!(days_remaining(now - Duration::milliseconds(1), now), 0);
    assert_eq!(days_remaining(now - Duration::hours(25), now), -1);
    assert_eq!(days_remaining(now - Duration::days(10), now), -10);
}

/// Output preserves input order and mixes levels correctly
#[test]
fn test_scan_preserves_input_order() {
    let now = Utc::now();
    let documents = vec![
        insurance(Some(now + Duration::days(5))),
        insurance(Some(now + Duration::days(200))),
        insurance(Some(now - Duration::days(40))),
        insurance(None),
        insurance(Some(now + Duration::days(29))),
    ];

    let alerts = compute_alerts(&documents, now, 30);
    assert_eq!(alerts.len(), 3);
    assert_eq!(alerts[0].document_id, documents[0].id);
    assert_eq!(alerts[0].level, AlertLevel::ToRenew);
    assert_eq!(alerts[1].document_id, documents[2].id);
    assert_eq!(alerts[1].level, AlertLevel::Expired);
    assert_eq!(alerts[2].document_id, documents[4].id);
    assert_eq!(alerts[2].level, AlertLevel::ToRenew);
}

/// The scan never mutates its input and is idempotent
#[test]
fn test_scan_is_idempotent() {
    let now = Utc::now();
    let documents = vec![
        insurance(Some(now - Duration::days(3))),
        insurance(Some(now + Duration::days(10))),
    ];
    let snapshot: Vec<_> = documents.iter().map(|d| (d.id, d.expires_at)).collect();

    let first = compute_alerts(&documents, now, 30);
    let second = compute_alerts(&documents, now, 30);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.document_id, b.document_id);
        assert_eq!(a.level, b.level);
        assert_eq!(a.days_remaining, b.days_remaining);
    }

    let after: Vec<_> = documents.iter().map(|d| (d.id, d.expires_at)).collect();
    assert_eq!(snapshot, after);
}

/// A custom renewal window moves the to-renew boundary
#[test]
fn test_custom_renewal_window() {
    let now = Utc::now();
    let documents = vec![insurance(Some(now + Duration::days(40)))];

    assert!(compute_alerts(&documents, now, 30).is_empty());

    let alerts = compute_alerts(&documents, now, 45);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::ToRenew);
}

/// An empty input yields an empty result, never an error
#[test]
fn test_empty_input_yields_empty_output() {
    let alerts = compute_alerts(&[], Utc::now(), 30);
    assert!(alerts.is_empty());
}
