//! Vehicle document records
//!
//! This module contains the [`DocumentRecord`] as stored by the upload flow
//! and the derived [`DocumentAlert`] produced by the alerting scan.

use crate::types::{AlertLevel, DocumentId, DocumentKind, VehicleId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document attached to a vehicle
///
/// Records are created and updated by the upload flow elsewhere in the
/// application; the alerting scan treats them as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Unique identifier for the document
    pub id: DocumentId,
    /// Vehicle the document belongs to
    pub vehicle_id: VehicleId,
    /// Document kind
    pub kind: DocumentKind,
    /// Human-readable document name
    pub name: String,
    /// Expiration date, if the document expires at all
    pub expires_at: Option<DateTime<Utc>>,
}

impl DocumentRecord {
    /// Create a document record
    pub fn new(
        vehicle_id: VehicleId,
        kind: DocumentKind,
        name: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self { id: DocumentId::new(), vehicle_id, kind, name: name.into(), expires_at }
    }
}

impl fmt::Display for DocumentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expires_at {
            Some(expires_at) => {
                write!(f, "{} [{}] expires {}", self.name, self.kind, expires_at.date_naive())
            }
            None => write!(f, "{} [{}] (no expiry)", self.name, self.kind),
        }
    }
}

/// An actionable alert derived from a document's expiration date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAlert {
    /// Document the alert refers to
    pub document_id: DocumentId,
    /// Vehicle the document belongs to
    pub vehicle_id: VehicleId,
    /// Document kind
    pub kind: DocumentKind,
    /// Human-readable document name
    pub name: String,
    /// Derived urgency classification (never [`AlertLevel::Valid`])
    pub level: AlertLevel,
    /// Whole days until expiry; negative once the date has passed
    pub days_remaining: i64,
}

impl fmt::Display for DocumentAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] on {}: {} ({} days)",
            self.name, self.kind, self.vehicle_id, self.level, self.days_remaining
        )
    }
}
