//! Auto-sync listener
//!
//! Subscribes to UPDATE events on the validation-state relation and
//! coalesces bursts of notifications into a single delayed reconciliation
//! pass: one `sync_all` RPC followed by invalidation of the dependent
//! cached query groups.
//!
//! The source application armed a fresh timer on every notification,
//! allowing overlapping reconciliation passes under bursts. This listener
//! deliberately uses a one-timer-at-a-time policy instead: a notification
//! arriving while a pass is pending or running arms nothing new, so a burst
//! produces exactly one pass. The next notification after the pass
//! completes schedules the next one.

use crate::backend::{CacheInvalidator, SyncService};
use crate::runtime::Scheduler;
use crate::sync::{ChangeEvent, ChangeFeed, ChangeFilter, SubscriptionId};
use crate::types::QueryGroup;
use chrono::Duration;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Schema holding the validation-state relation
pub const VALIDATION_SCHEMA: &str = "public";

/// Relation whose UPDATE events trigger reconciliation
pub const VALIDATION_TABLE: &str = "validation_states";

/// Observable listener state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// No reconciliation pending
    Idle,
    /// A reconciliation timer is armed
    PendingSync,
    /// The reconciliation pass is running
    Syncing,
}

#[derive(Debug)]
struct ListenerState {
    phase: SyncPhase,
    subscription: Option<SubscriptionId>,
}

/// Change-feed subscriber driving debounced validation-state reconciliation
#[derive(Clone)]
pub struct AutoSyncListener {
    scheduler: Scheduler,
    quiescence: Duration,
    sync: Arc<dyn SyncService>,
    caches: Arc<dyn CacheInvalidator>,
    state: Arc<Mutex<ListenerState>>,
}

impl fmt::Debug for AutoSyncListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoSyncListener")
            .field("phase", &self.phase())
            .field("quiescence_ms", &self.quiescence.num_milliseconds())
            .finish()
    }
}

impl AutoSyncListener {
    /// Create a listener with the given quiescence delay
    pub fn new(
        scheduler: Scheduler,
        quiescence: Duration,
        sync: Arc<dyn SyncService>,
        caches: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            scheduler,
            quiescence,
            sync,
            caches,
            state: Arc::new(Mutex::new(ListenerState {
                phase: SyncPhase::Idle,
                subscription: None,
            })),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ListenerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current listener phase
    pub fn phase(&self) -> SyncPhase {
        self.lock_state().phase
    }

    /// Subscribe to validation-state updates on the feed
    pub fn attach(&self, feed: &dyn ChangeFeed) -> SubscriptionId {
        let listener = self.clone();
        let id = feed.subscribe(
            ChangeFilter::updates_on(VALIDATION_SCHEMA, VALIDATION_TABLE),
            Box::new(move |event| listener.handle_notification(event)),
        );
        self.lock_state().subscription = Some(id);
        info!(subscription = %id, "auto-sync listener attached");
        id
    }

    /// Cancel the feed subscription
    ///
    /// An already-armed reconciliation timer is left to fire; only the
    /// stream subscription is torn down.
    pub fn detach(&self, feed: &dyn ChangeFeed) {
        if let Some(id) = self.lock_state().subscription.take() {
            feed.unsubscribe(id);
            info!(subscription = %id, "auto-sync listener detached");
        }
    }

    /// React to one change notification
    ///
    /// Arms the reconciliation timer when idle; otherwise the notification
    /// is absorbed by the pass already pending or running.
    pub fn handle_notification(&self, event: &ChangeEvent) {
        let mut state = self.lock_state();
        if state.phase != SyncPhase::Idle {
            debug!(event = %event, phase = ?state.phase, "notification absorbed by pending sync");
            return;
        }
        state.phase = SyncPhase::PendingSync;
        drop(state);

        debug!(event = %event, delay_ms = self.quiescence.num_milliseconds(), "reconciliation scheduled");

        let listener = self.clone();
        self.scheduler.set_timer(self.quiescence, Box::new(move || listener.run_reconciliation()));
    }

    /// Execute the reconciliation pass
    ///
    /// A sync failure is logged and swallowed; it is never surfaced to the
    /// user and never retried proactively, since the next notification
    /// schedules a fresh pass anyway. The cached query groups are
    /// invalidated regardless of the sync outcome so dependent views
    /// converge on backend truth.
    fn run_reconciliation(&self) {
        self.lock_state().phase = SyncPhase::Syncing;

        match self.sync.sync_all() {
            Ok(outcome) => {
                info!(reconciled = outcome.reconciled, "validation-state sync complete");
            }
            Err(error) => {
                warn!(%error, "validation-state sync failed; awaiting next notification");
            }
        }

        for group in QueryGroup::ALL {
            self.caches.invalidate(group);
        }

        self.lock_state().phase = SyncPhase::Idle;
    }
}
