//! Document expiry alerting
//!
//! Batch classification of document expiration dates into alert levels.
//! The scan is a pure function of its inputs: it never mutates the input
//! records, is idempotent, and preserves input order in its output.

use crate::documents::{DocumentAlert, DocumentRecord};
use crate::types::AlertLevel;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Milliseconds in one day, the unit of the expiry arithmetic
const MS_PER_DAY: i64 = 86_400_000;

/// Whole days between `now` and `expires_at`, rounded up
///
/// Ceiling division over milliseconds, so a document that expired within
/// the past 24 hours yields 0 and one that expired the day before yields -1.
pub fn days_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (expires_at - now).num_milliseconds();
    ms.div_euclid(MS_PER_DAY) + i64::from(ms.rem_euclid(MS_PER_DAY) != 0)
}

/// Classify a days-remaining value against the renewal window
pub fn classify(days_remaining: i64, renewal_window_days: i64) -> AlertLevel {
    if days_remaining < 0 {
        AlertLevel::Expired
    } else if days_remaining <= renewal_window_days {
        AlertLevel::ToRenew
    } else {
        AlertLevel::Valid
    }
}

/// Scan document records and return the actionable alerts
///
/// Documents without an expiration date are excluded entirely; documents
/// classified [`AlertLevel::Valid`] are dropped from the result since the
/// consumer only needs actionable alerts. Output order follows input order.
pub fn compute_alerts(
    documents: &[DocumentRecord],
    now: DateTime<Utc>,
    renewal_window_days: i64,
) -> Vec<DocumentAlert> {
    let alerts: Vec<DocumentAlert> = documents
        .iter()
        .filter_map(|document| {
            let expires_at = document.expires_at?;
            let remaining = days_remaining(expires_at, now);
            let level = classify(remaining, renewal_window_days);
            if level == AlertLevel::Valid {
                return None;
            }
            Some(DocumentAlert {
                document_id: document.id,
                vehicle_id: document.vehicle_id,
                kind: document.kind,
                name: document.name.clone(),
                level,
                days_remaining: remaining,
            })
        })
        .collect();

    debug!(
        scanned = documents.len(),
        alerts = alerts.len(),
        renewal_window_days,
        "document alert scan complete"
    );

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentKind, VehicleId};
    use chrono::Duration;

    fn doc(expires_at: Option<DateTime<Utc>>) -> DocumentRecord {
        DocumentRecord::new(VehicleId::new(), DocumentKind::Insurance, "policy", expires_at)
    }

    #[test]
    fn partial_days_round_up() {
        let now = Utc::now();
        assert_eq!(days_remaining(now + Duration::hours(3), now), 1);
        assert_eq!(days_remaining(now, now), 0);
        assert_eq!(days_remaining(now - Duration::hours(3), now), 0);
    }

    #[test]
    fn expired_yesterday_is_minus_one() {
        let now = Utc::now();
        assert_eq!(days_remaining(now - Duration::days(1), now), -1);
        assert_eq!(days_remaining(now - Duration::days(1) - Duration::hours(1), now), -1);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(-1, 30), AlertLevel::Expired);
        assert_eq!(classify(0, 30), AlertLevel::ToRenew);
        assert_eq!(classify(30, 30), AlertLevel::ToRenew);
        assert_eq!(classify(31, 30), AlertLevel::Valid);
    }

    #[test]
    fn valid_and_undated_documents_are_dropped() {
        let now = Utc::now();
        let documents = vec![
            doc(Some(now + Duration::days(60))),
            doc(None),
            doc(Some(now - Duration::days(2))),
        ];
        let alerts = compute_alerts(&documents, now, 30);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Expired);
        assert_eq!(alerts[0].document_id, documents[2].id);
    }
}
