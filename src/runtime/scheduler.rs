//! Timer scheduling
//!
//! A cooperative, single-threaded timer queue modelling the event loop the
//! application runs on. Components arm timers with [`Scheduler::set_timer`]
//! and the owning loop drains due timers with [`Scheduler::run_due`].
//!
//! Internal state sits behind a mutex so a threaded embedding stays sound;
//! callbacks always run outside the lock, so a firing timer may re-arm
//! itself or cancel others without deadlocking.

use crate::runtime::Clock;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Handle identifying an armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TIMER_{}", self.0)
    }
}

/// Callback invoked when a timer fires
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

struct TimerEntry {
    id: TimerId,
    deadline: DateTime<Utc>,
    callback: TimerCallback,
}

impl fmt::Debug for TimerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerEntry")
            .field("id", &self.id)
            .field("deadline", &self.deadline)
            .finish()
    }
}

#[derive(Debug, Default)]
struct SchedulerState {
    next_id: u64,
    entries: Vec<TimerEntry>,
}

/// Cloneable handle to the shared timer queue
#[derive(Clone)]
pub struct Scheduler {
    clock: Arc<dyn Clock>,
    state: Arc<Mutex<SchedulerState>>,
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("Scheduler").field("pending", &state.entries.len()).finish()
    }
}

impl Scheduler {
    /// Create a scheduler reading time from the given clock
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, state: Arc::new(Mutex::new(SchedulerState::default())) }
    }

    fn lock_state(&self) -> MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The scheduler's view of the current time
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Arm a one-shot timer firing after the given delay
    pub fn set_timer(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let deadline = self.clock.now() + delay;
        let mut state = self.lock_state();
        state.next_id += 1;
        let id = TimerId(state.next_id);
        state.entries.push(TimerEntry { id, deadline, callback });
        trace!(timer = %id, %deadline, "timer armed");
        id
    }

    /// Cancel an armed timer
    ///
    /// Returns `false` when the timer already fired or was cancelled.
    pub fn cancel_timer(&self, id: TimerId) -> bool {
        let mut state = self.lock_state();
        let before = state.entries.len();
        state.entries.retain(|entry| entry.id != id);
        let cancelled = state.entries.len() < before;
        if cancelled {
            trace!(timer = %id, "timer cancelled");
        }
        cancelled
    }

    /// Number of armed timers
    pub fn pending_timers(&self) -> usize {
        self.lock_state().entries.len()
    }

    /// Fire every timer whose deadline has passed, in deadline order
    ///
    /// Callbacks run outside the internal lock and may arm or cancel other
    /// timers. Timers armed by a callback are not fired in the same pass,
    /// even if already due. Returns the number of timers fired.
    pub fn run_due(&self) -> usize {
        let now = self.clock.now();
        let mut due: Vec<TimerEntry> = {
            let mut state = self.lock_state();
            let mut still_pending = Vec::with_capacity(state.entries.len());
            let mut ready = Vec::new();
            for entry in state.entries.drain(..) {
                if entry.deadline <= now {
                    ready.push(entry);
                } else {
                    still_pending.push(entry);
                }
            }
            state.entries = still_pending;
            ready
        };

        due.sort_by_key(|entry| entry.deadline);
        let fired = due.len();

        for entry in due {
            trace!(timer = %entry.id, deadline = %entry.deadline, "timer fired");
            (entry.callback)();
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ManualClock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scheduler() -> (ManualClock, Scheduler) {
        let clock = ManualClock::from_system_time();
        let scheduler = Scheduler::new(Arc::new(clock.clone()));
        (clock, scheduler)
    }

    #[test]
    fn timer_fires_only_after_its_deadline() {
        let (clock, scheduler) = scheduler();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        scheduler.set_timer(
            Duration::seconds(10),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        clock.advance_by(Duration::seconds(9));
        assert_eq!(scheduler.run_due(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        clock.advance_by(Duration::seconds(1));
        assert_eq!(scheduler.run_due(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let (clock, scheduler) = scheduler();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let id = scheduler.set_timer(
            Duration::seconds(5),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(scheduler.cancel_timer(id));
        assert!(!scheduler.cancel_timer(id));

        clock.advance_by(Duration::seconds(60));
        assert_eq!(scheduler.run_due(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn due_timers_fire_in_deadline_order() {
        let (clock, scheduler) = scheduler();
        let order = Arc::new(Mutex::new(Vec::new()));

        for (label, delay) in [("late", 30), ("early", 10), ("middle", 20)] {
            let order = Arc::clone(&order);
            scheduler.set_timer(
                Duration::seconds(delay),
                Box::new(move || {
                    order.lock().unwrap().push(label);
                }),
            );
        }

        clock.advance_by(Duration::seconds(60));
        assert_eq!(scheduler.run_due(), 3);
        assert_eq!(*order.lock().unwrap(), vec!["early", "middle", "late"]);
    }

    #[test]
    fn callback_may_rearm_without_firing_in_same_pass() {
        let (clock, scheduler) = scheduler();
        let fired = Arc::new(AtomicUsize::new(0));

        let rearm = {
            let scheduler = scheduler.clone();
            let fired = Arc::clone(&fired);
            Box::new(move || {
                fired.fetch_add(1, Ordering::SeqCst);
                let fired = Arc::clone(&fired);
                scheduler.set_timer(
                    Duration::zero(),
                    Box::new(move || {
                        fired.fetch_add(1, Ordering::SeqCst);
                    }),
                );
            })
        };

        scheduler.set_timer(Duration::seconds(1), rearm);
        clock.advance_by(Duration::seconds(1));

        assert_eq!(scheduler.run_due(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // The re-armed timer fires on the next pass
        assert_eq!(scheduler.run_due(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
