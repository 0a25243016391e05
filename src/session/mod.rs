//! Idle-session lifecycle
//!
//! This module contains the session timeout manager: an explicit context
//! object owned by the application shell, replacing the global singleton
//! timers of a typical browser implementation.
//!
//! # Overview
//!
//! - **SessionTimeoutManager**: arms warning and expiry timers over the
//!   shared [`Scheduler`](crate::runtime::Scheduler), resets them on
//!   tracked activity, and drives best-effort logout on expiry
//! - **SessionPhase**: `Stopped -> Running{warned} -> Expired -> Stopped`
//!
//! # Usage Example
//!
//! ```rust
//! use fleet_ops_core::backend::{AuthGateway, BackendError, SessionNotifier};
//! use fleet_ops_core::runtime::{ManualClock, Scheduler};
//! use fleet_ops_core::session::{SessionPhase, SessionTimeoutManager};
//! use chrono::Duration;
//! use std::sync::Arc;
//!
//! struct NoopAuth;
//! impl AuthGateway for NoopAuth {
//!     fn sign_out(&self) -> Result<(), BackendError> {
//!         Ok(())
//!     }
//! }
//!
//! struct NoopNotifier;
//! impl SessionNotifier for NoopNotifier {
//!     fn warn_idle(&self, _remaining: Duration) {}
//!     fn redirect_to_login(&self) {}
//! }
//!
//! let clock = ManualClock::from_system_time();
//! let scheduler = Scheduler::new(Arc::new(clock.clone()));
//! let session = SessionTimeoutManager::new(
//!     scheduler.clone(),
//!     Duration::minutes(30),
//!     Duration::minutes(5),
//!     Arc::new(NoopAuth),
//!     Arc::new(NoopNotifier),
//! );
//!
//! session.start();
//! assert_eq!(session.phase(), SessionPhase::Running { warned: false });
//!
//! clock.advance_by(Duration::minutes(30));
//! scheduler.run_due();
//! assert_eq!(session.phase(), SessionPhase::Expired);
//! ```

pub mod manager;

// Re-export all public types for convenience
pub use manager::*;
