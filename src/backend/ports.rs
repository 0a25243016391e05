//! Backend collaborator interfaces
//!
//! Traits for the hosted-backend operations the core invokes but does not
//! reimplement: the validation-state sync RPC, session sign-out, cache
//! invalidation, and the non-blocking session notifications presented by
//! the UI layer.

use crate::backend::BackendError;
use crate::types::QueryGroup;
use chrono::Duration;

/// Outcome of a successful validation-state sync pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncOutcome {
    /// Number of validation-state rows reconciled
    pub reconciled: usize,
}

/// Validation-state reconciliation RPC
///
/// `sync_all` is idempotent on the backend side; invoking it twice in a
/// row converges to the same state.
pub trait SyncService: Send + Sync {
    /// Reconcile every validation state against backend truth
    fn sync_all(&self) -> Result<SyncOutcome, BackendError>;
}

/// Session termination against the backend auth service
pub trait AuthGateway: Send + Sync {
    /// Clear the backend session
    fn sign_out(&self) -> Result<(), BackendError>;
}

/// Invalidation of cached query results elsewhere in the application
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate one cached query group, forcing dependent views to refetch
    fn invalidate(&self, group: QueryGroup);
}

/// Non-blocking session notifications presented by the UI layer
///
/// The idle warning is a callback rather than a blocking prompt: the UI
/// presents it and calls
/// [`SessionTimeoutManager::extend`](crate::session::SessionTimeoutManager::extend)
/// if the user chooses to stay signed in. Declining or ignoring the warning
/// leaves the expiry timer untouched.
pub trait SessionNotifier: Send + Sync {
    /// The session will expire after `remaining` unless extended
    fn warn_idle(&self, remaining: Duration);

    /// Route the user to the login screen
    ///
    /// Always invoked on expiry or explicit sign-out, even when the remote
    /// sign-out failed.
    fn redirect_to_login(&self);
}
