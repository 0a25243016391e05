//! Clock abstraction
//!
//! Timer deadlines and expiry arithmetic read the current time through the
//! [`Clock`] trait so that tests and demos can drive virtual time instead
//! of waiting on the wall clock.

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex, PoisonError};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// The current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced virtual time for tests and demos
///
/// Cloning shares the underlying instant, so a clone handed to a scheduler
/// observes every `advance_by` made through the original.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a virtual clock starting at the given instant
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self { current: Arc::new(Mutex::new(start)) }
    }

    /// Create a virtual clock starting at the current wall-clock time
    pub fn from_system_time() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Advance the virtual time by the given duration
    pub fn advance_by(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current = *current + duration;
    }

    /// Jump the virtual time to the given instant
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_and_shares_state() {
        let clock = ManualClock::from_system_time();
        let shared = clock.clone();
        let start = clock.now();

        clock.advance_by(Duration::minutes(7));

        assert_eq!(clock.now(), start + Duration::minutes(7));
        assert_eq!(shared.now(), clock.now());
    }

    #[test]
    fn system_clock_tracks_wall_time() {
        let clock = SystemClock;
        let before = Utc::now();
        let observed = clock.now();
        let after = Utc::now();
        assert!(observed >= before && observed <= after);
    }
}
