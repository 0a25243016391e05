//! Alert scan summaries
//!
//! Aggregates a batch of document alerts into per-level, per-kind and
//! per-vehicle counts for the CLI report and dashboard exports.

use crate::documents::DocumentAlert;
use crate::types::{AlertLevel, DocumentKind, VehicleId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write as _;

/// Aggregate view over one alert scan
#[derive(Debug, Clone, Serialize)]
pub struct AlertSummary {
    /// When the summary was produced
    pub generated_at: DateTime<Utc>,
    /// Documents scanned, including valid and undated ones
    pub documents_scanned: usize,
    /// Actionable alerts produced by the scan
    pub total_alerts: usize,
    /// Alerts classified as expired
    pub expired: usize,
    /// Alerts classified as due for renewal
    pub to_renew: usize,
    /// Alert counts per document kind
    pub by_kind: HashMap<DocumentKind, usize>,
    /// Alert counts per vehicle
    pub by_vehicle: HashMap<VehicleId, usize>,
}

impl AlertSummary {
    /// Build a summary from a completed scan
    pub fn from_scan(documents_scanned: usize, alerts: &[DocumentAlert]) -> Self {
        let mut by_kind: HashMap<DocumentKind, usize> = HashMap::new();
        let mut by_vehicle: HashMap<VehicleId, usize> = HashMap::new();
        let mut expired = 0;
        let mut to_renew = 0;

        for alert in alerts {
            *by_kind.entry(alert.kind).or_insert(0) += 1;
            *by_vehicle.entry(alert.vehicle_id).or_insert(0) += 1;
            match alert.level {
                AlertLevel::Expired => expired += 1,
                AlertLevel::ToRenew => to_renew += 1,
                AlertLevel::Valid => {}
            }
        }

        Self {
            generated_at: Utc::now(),
            documents_scanned,
            total_alerts: alerts.len(),
            expired,
            to_renew,
            by_kind,
            by_vehicle,
        }
    }

    /// Share of scanned documents that produced an alert, as a percentage
    pub fn alert_percentage(&self) -> f64 {
        if self.documents_scanned == 0 {
            0.0
        } else {
            self.total_alerts as f64 / self.documents_scanned as f64 * 100.0
        }
    }

    /// Number of vehicles with at least one alert
    pub fn affected_vehicles(&self) -> usize {
        self.by_vehicle.len()
    }

    /// Render a plain-text report for the CLI
    pub fn render_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "Document Alert Summary");
        let _ = writeln!(report, "----------------------");
        let _ = writeln!(report, "Documents scanned:  {}", self.documents_scanned);
        let _ = writeln!(
            report,
            "Actionable alerts:  {} ({:.1}%)",
            self.total_alerts,
            self.alert_percentage()
        );
        let _ = writeln!(report, "  Expired:          {}", self.expired);
        let _ = writeln!(report, "  To renew:         {}", self.to_renew);
        let _ = writeln!(report, "Affected vehicles:  {}", self.affected_vehicles());

        if !self.by_kind.is_empty() {
            let _ = writeln!(report, "Alerts by kind:");
            let mut kinds: Vec<_> = self.by_kind.iter().collect();
            kinds.sort_by(|a, b| b.1.cmp(a.1));
            for (kind, count) in kinds {
                let _ = writeln!(report, "  {:<22} {}", kind.to_string(), count);
            }
        }

        report
    }
}
