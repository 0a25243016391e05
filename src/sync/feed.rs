//! Change-notification stream
//!
//! Types for the backend's row-level change feed and an in-memory
//! implementation used by tests and demos. The production feed is the
//! hosted platform's realtime channel; the core only depends on the
//! [`ChangeFeed`] trait.

use crate::types::ChangeOp;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// A row-level change delivered by the stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Change operation
    pub op: ChangeOp,
    /// Schema the changed relation lives in
    pub schema: String,
    /// Name of the changed relation
    pub table: String,
}

impl ChangeEvent {
    /// Create a change event
    pub fn new(op: ChangeOp, schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self { op, schema: schema.into(), table: table.into() }
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}.{}", self.op, self.schema, self.table)
    }
}

/// Subscription filter over the change stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeFilter {
    /// Operation to match
    pub op: ChangeOp,
    /// Schema to match
    pub schema: String,
    /// Relation to match
    pub table: String,
}

impl ChangeFilter {
    /// Filter for UPDATE events on one relation
    pub fn updates_on(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self { op: ChangeOp::Update, schema: schema.into(), table: table.into() }
    }

    /// Whether an event passes this filter
    pub fn matches(&self, event: &ChangeEvent) -> bool {
        self.op == event.op && self.schema == event.schema && self.table == event.table
    }
}

/// Handle identifying an active subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SUB_{}", self.0)
    }
}

/// Handler invoked for each matching change event
pub type ChangeHandler = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Push channel delivering row-level change events
pub trait ChangeFeed: Send + Sync {
    /// Subscribe a handler to events passing the filter
    fn subscribe(&self, filter: ChangeFilter, handler: ChangeHandler) -> SubscriptionId;

    /// Cancel a subscription
    ///
    /// Returns `false` when the subscription was already cancelled.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

struct Subscription {
    filter: ChangeFilter,
    handler: ChangeHandler,
}

#[derive(Default)]
struct FeedState {
    next_id: u64,
    subscriptions: HashMap<u64, Subscription>,
}

/// In-memory change feed for tests and demos
#[derive(Default)]
pub struct LocalChangeFeed {
    state: Mutex<FeedState>,
}

impl fmt::Debug for LocalChangeFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("LocalChangeFeed")
            .field("subscriptions", &state.subscriptions.len())
            .finish()
    }
}

impl LocalChangeFeed {
    /// Create an empty feed
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_state(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deliver an event to every matching subscription
    pub fn publish(&self, event: &ChangeEvent) {
        let state = self.lock_state();
        for subscription in state.subscriptions.values() {
            if subscription.filter.matches(event) {
                trace!(event = %event, "delivering change event");
                (subscription.handler)(event);
            }
        }
    }

    /// Number of active subscriptions
    pub fn subscription_count(&self) -> usize {
        self.lock_state().subscriptions.len()
    }
}

impl ChangeFeed for LocalChangeFeed {
    fn subscribe(&self, filter: ChangeFilter, handler: ChangeHandler) -> SubscriptionId {
        let mut state = self.lock_state();
        state.next_id += 1;
        let id = state.next_id;
        state.subscriptions.insert(id, Subscription { filter, handler });
        SubscriptionId(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock_state().subscriptions.remove(&id.0).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn filter_matches_op_schema_and_table() {
        let filter = ChangeFilter::updates_on("public", "validation_states");
        assert!(filter.matches(&ChangeEvent::new(ChangeOp::Update, "public", "validation_states")));
        assert!(!filter.matches(&ChangeEvent::new(ChangeOp::Insert, "public", "validation_states")));
        assert!(!filter.matches(&ChangeEvent::new(ChangeOp::Update, "public", "missions")));
    }

    #[test]
    fn unsubscribed_handler_stops_receiving() {
        let feed = LocalChangeFeed::new();
        let delivered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&delivered);

        let id = feed.subscribe(
            ChangeFilter::updates_on("public", "validation_states"),
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let event = ChangeEvent::new(ChangeOp::Update, "public", "validation_states");
        feed.publish(&event);
        assert_eq!(delivered.load(Ordering::SeqCst), 1);

        assert!(feed.unsubscribe(id));
        assert!(!feed.unsubscribe(id));
        feed.publish(&event);
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }
}
