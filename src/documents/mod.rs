//! Vehicle documents and expiry alerting
//!
//! This module handles document records, the batch expiry-alert scan, and
//! fixture generation for demos and tests.
//!
//! # Overview
//!
//! - **DocumentRecord**: a document attached to a vehicle, with an optional
//!   expiration date; read-only to the alerting scan
//! - **compute_alerts**: classifies expirations into alert levels and
//!   returns only the actionable (non-valid) records
//! - **DocumentGenerator**: rand-driven fixture fleets
//!
//! # Usage Example
//!
//! ```rust
//! use fleet_ops_core::documents::{compute_alerts, DocumentRecord};
//! use fleet_ops_core::types::{AlertLevel, DocumentKind, VehicleId};
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! let vehicle = VehicleId::new();
//! let documents = vec![
//!     DocumentRecord::new(vehicle, DocumentKind::Insurance, "policy", Some(now + Duration::days(10))),
//!     DocumentRecord::new(vehicle, DocumentKind::Registration, "title", None),
//! ];
//!
//! let alerts = compute_alerts(&documents, now, 30);
//! assert_eq!(alerts.len(), 1);
//! assert_eq!(alerts[0].level, AlertLevel::ToRenew);
//! ```

pub mod alerts;
pub mod generator;
pub mod record;

// Re-export all public types for convenience
pub use alerts::*;
pub use generator::*;
pub use record::*;
