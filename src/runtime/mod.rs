//! Clock and timer runtime
//!
//! This module contains the cooperative scheduling primitives the session
//! manager and auto-sync listener are built on.
//!
//! # Overview
//!
//! - **Clock**: trait over the current time, with [`SystemClock`] for
//!   production and [`ManualClock`] for virtual time in tests and demos
//! - **Scheduler**: a mutex-guarded one-shot timer queue; the owning event
//!   loop drains due timers with [`Scheduler::run_due`]
//!
//! # Usage Example
//!
//! ```rust
//! use fleet_ops_core::runtime::{ManualClock, Scheduler};
//! use chrono::Duration;
//! use std::sync::Arc;
//!
//! let clock = ManualClock::from_system_time();
//! let scheduler = Scheduler::new(Arc::new(clock.clone()));
//!
//! scheduler.set_timer(Duration::seconds(5), Box::new(|| println!("due")));
//! assert_eq!(scheduler.run_due(), 0);
//!
//! clock.advance_by(Duration::seconds(5));
//! assert_eq!(scheduler.run_due(), 1);
//! ```

pub mod clock;
pub mod scheduler;

// Re-export all public types for convenience
pub use clock::*;
pub use scheduler::*;
