//! Change-feed subscription and auto-sync
//!
//! This module connects the backend's row-level change stream to the
//! validation-state reconciliation RPC.
//!
//! # Overview
//!
//! - **ChangeEvent / ChangeFilter / ChangeFeed**: the notification stream
//!   interface, with [`LocalChangeFeed`] as an in-memory double
//! - **AutoSyncListener**: debounces update bursts into one reconciliation
//!   pass (sync-all plus cache invalidation) after a quiescence delay
//!
//! # Usage Example
//!
//! ```rust
//! use fleet_ops_core::backend::{BackendError, CacheInvalidator, SyncOutcome, SyncService};
//! use fleet_ops_core::runtime::{ManualClock, Scheduler};
//! use fleet_ops_core::sync::{
//!     AutoSyncListener, ChangeEvent, ChangeFeed, LocalChangeFeed,
//!     VALIDATION_SCHEMA, VALIDATION_TABLE,
//! };
//! use fleet_ops_core::types::{ChangeOp, QueryGroup};
//! use chrono::Duration;
//! use std::sync::Arc;
//!
//! struct NoopSync;
//! impl SyncService for NoopSync {
//!     fn sync_all(&self) -> Result<SyncOutcome, BackendError> {
//!         Ok(SyncOutcome { reconciled: 0 })
//!     }
//! }
//!
//! struct NoopCaches;
//! impl CacheInvalidator for NoopCaches {
//!     fn invalidate(&self, _group: QueryGroup) {}
//! }
//!
//! let clock = ManualClock::from_system_time();
//! let scheduler = Scheduler::new(Arc::new(clock.clone()));
//! let listener = AutoSyncListener::new(
//!     scheduler.clone(),
//!     Duration::milliseconds(1000),
//!     Arc::new(NoopSync),
//!     Arc::new(NoopCaches),
//! );
//!
//! let feed = LocalChangeFeed::new();
//! listener.attach(&feed);
//! feed.publish(&ChangeEvent::new(ChangeOp::Update, VALIDATION_SCHEMA, VALIDATION_TABLE));
//!
//! clock.advance_by(Duration::milliseconds(1000));
//! scheduler.run_due();
//! ```

pub mod feed;
pub mod listener;

// Re-export all public types for convenience
pub use feed::*;
pub use listener::*;
