//! Fleet Operations Core
//!
//! The engineered core of a fleet/transport-operations application:
//! permission resolution, vehicle document expiry alerting, debounced
//! change-feed reconciliation, and idle-session timeout management.
//!
//! # Overview
//!
//! The surrounding application is a set of CRUD views over a hosted
//! backend. This crate carries the logic those views share:
//!
//! - **Permission Resolver**: pure capability checks over roles and
//!   explicit grants, with admin and "all" sentinels
//! - **Document Alerting**: batch classification of document expirations
//!   into expired / to-renew alerts
//! - **Auto-Sync Listener**: coalesces bursts of validation-state change
//!   notifications into one delayed reconciliation pass
//! - **Session Timeout Manager**: warning and expiry timers over an
//!   injected scheduler, reset by tracked user activity
//!
//! # Quick Start
//!
//! ```rust
//! use fleet_ops_core::access::{has_permission, UserAccount};
//! use fleet_ops_core::documents::{compute_alerts, DocumentRecord};
//! use fleet_ops_core::types::{DocumentKind, Permission, Role, VehicleId};
//! use chrono::{Duration, Utc};
//!
//! // Capability checks
//! let manager = UserAccount::with_permissions(
//!     "Kim",
//!     Role::Manager,
//!     vec![Permission::ManageVehicles],
//! );
//! assert!(has_permission(Some(&manager), Permission::ManageVehicles));
//!
//! // Expiry alerting
//! let now = Utc::now();
//! let documents = vec![DocumentRecord::new(
//!     VehicleId::new(),
//!     DocumentKind::Insurance,
//!     "fleet policy",
//!     Some(now + Duration::days(12)),
//! )];
//! let alerts = compute_alerts(&documents, now, 30);
//! assert_eq!(alerts.len(), 1);
//! ```
//!
//! # Module Organization
//!
//! - [`types`]: identifiers, closed enums, and configuration
//! - [`access`]: user accounts and capability resolution
//! - [`documents`]: document records, expiry alerting, fixtures
//! - [`analysis`]: alert scan summaries
//! - [`runtime`]: clock abstraction and the cooperative timer scheduler
//! - [`backend`]: hosted-backend collaborator interfaces and errors
//! - [`sync`]: change-feed subscription and the auto-sync listener
//! - [`session`]: idle-session timeout management
//! - [`logging`]: tracing subscriber configuration
//! - [`error`]: top-level error type for batch entry points
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod access;
pub mod analysis;
pub mod backend;
pub mod documents;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod sync;
pub mod types;

// Re-export all public types for convenience

// Core types and identifiers
pub use types::{
    ActivityKind,
    AlertLevel,
    ChangeOp,
    ConfigError,
    ConfigValidationError,
    // Configuration
    CoreConfig,
    DocumentId,
    DocumentKind,
    OutputFormat,
    Permission,
    QueryGroup,
    // Enums
    Role,
    // Identifiers
    UserId,
    VehicleId,
};

// Access control
pub use access::{has_permission, has_role, UserAccount};

// Documents and alerting
pub use documents::{compute_alerts, DocumentAlert, DocumentGenerator, DocumentRecord};

// Analysis
pub use analysis::AlertSummary;

// Runtime primitives
pub use runtime::{Clock, ManualClock, Scheduler, SystemClock, TimerId};

// Backend collaborators
pub use backend::{
    AuthGateway, BackendError, CacheInvalidator, SessionNotifier, SyncOutcome, SyncService,
};

// Auto-sync
pub use sync::{
    AutoSyncListener, ChangeEvent, ChangeFeed, ChangeFilter, LocalChangeFeed, SubscriptionId,
    SyncPhase,
};

// Session lifecycle
pub use session::{SessionPhase, SessionTimeoutManager};

// Logging and errors
pub use error::CoreError;
pub use logging::LoggingConfig;
