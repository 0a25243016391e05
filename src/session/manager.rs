//! Session timeout management
//!
//! An injected idle-session context owned by the application shell. It arms
//! a warning timer and an expiry timer, resets both on tracked user
//! activity, and forces logout when the idle window elapses.
//!
//! Logout is "best-effort remote, guaranteed local": a failed backend
//! sign-out is logged and the login redirect still happens.

use crate::backend::{AuthGateway, SessionNotifier};
use crate::runtime::{Scheduler, TimerId};
use crate::types::ActivityKind;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Lifecycle phase of the managed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No timers armed; no session being tracked
    Stopped,
    /// Session active; `warned` is set once the idle warning has fired
    Running {
        /// Whether the idle warning has been raised for the current window
        warned: bool,
    },
    /// The idle window elapsed and the user was logged out
    Expired,
}

#[derive(Debug)]
struct SessionState {
    phase: SessionPhase,
    warning_timer: Option<TimerId>,
    expiry_timer: Option<TimerId>,
    last_activity: Option<DateTime<Utc>>,
}

/// Idle-session timeout manager
///
/// One instance tracks the single authenticated session. State lives
/// behind a mutex so `start`/`extend`/`end` stay serialized even in a
/// threaded embedding; under the single-threaded event loop the lock is
/// uncontended.
#[derive(Clone)]
pub struct SessionTimeoutManager {
    scheduler: Scheduler,
    timeout: Duration,
    warning_lead: Duration,
    auth: Arc<dyn AuthGateway>,
    notifier: Arc<dyn SessionNotifier>,
    state: Arc<Mutex<SessionState>>,
}

impl fmt::Debug for SessionTimeoutManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTimeoutManager")
            .field("phase", &self.phase())
            .field("timeout_min", &self.timeout.num_minutes())
            .field("warning_lead_min", &self.warning_lead.num_minutes())
            .finish()
    }
}

impl SessionTimeoutManager {
    /// Create a manager with the given idle timeout and warning lead
    ///
    /// The warning fires at `timeout - warning_lead`; both timers are armed
    /// by [`start`](Self::start).
    pub fn new(
        scheduler: Scheduler,
        timeout: Duration,
        warning_lead: Duration,
        auth: Arc<dyn AuthGateway>,
        notifier: Arc<dyn SessionNotifier>,
    ) -> Self {
        Self {
            scheduler,
            timeout,
            warning_lead,
            auth,
            notifier,
            state: Arc::new(Mutex::new(SessionState {
                phase: SessionPhase::Stopped,
                warning_timer: None,
                expiry_timer: None,
                last_activity: None,
            })),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current session phase
    pub fn phase(&self) -> SessionPhase {
        self.lock_state().phase
    }

    /// Instant of the most recent tracked activity, if any
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.lock_state().last_activity
    }

    /// Start (or restart) the idle window
    ///
    /// Cancels any existing timers, then arms the warning timer at
    /// `timeout - warning_lead` and the expiry timer at `timeout`.
    pub fn start(&self) {
        let now = self.scheduler.now();
        let mut state = self.lock_state();
        self.cancel_timers(&mut state);

        state.phase = SessionPhase::Running { warned: false };
        state.last_activity = Some(now);

        let warning = {
            let manager = self.clone();
            self.scheduler
                .set_timer(self.timeout - self.warning_lead, Box::new(move || manager.on_warning()))
        };
        let expiry = {
            let manager = self.clone();
            self.scheduler.set_timer(self.timeout, Box::new(move || manager.on_expiry()))
        };

        state.warning_timer = Some(warning);
        state.expiry_timer = Some(expiry);
        drop(state);

        debug!(
            timeout_min = self.timeout.num_minutes(),
            warning_lead_min = self.warning_lead.num_minutes(),
            "session idle window armed"
        );
    }

    /// Reset the idle window to its full length
    ///
    /// Identical to [`start`](Self::start); the warning and expiry are
    /// measured from now, not from the original `start` call.
    pub fn extend(&self) {
        self.start();
    }

    /// Record a tracked user-input event, resetting the idle window
    pub fn record_activity(&self, kind: ActivityKind) {
        debug!(activity = %kind, "tracked activity; resetting idle window");
        self.extend();
    }

    /// End the session immediately, bypassing the warning step
    ///
    /// Cancels both timers and forces logout.
    pub fn end(&self) {
        let mut state = self.lock_state();
        self.cancel_timers(&mut state);
        state.phase = SessionPhase::Stopped;
        state.last_activity = None;
        drop(state);

        info!("session ended explicitly");
        self.force_logout();
    }

    fn cancel_timers(&self, state: &mut SessionState) {
        if let Some(id) = state.warning_timer.take() {
            self.scheduler.cancel_timer(id);
        }
        if let Some(id) = state.expiry_timer.take() {
            self.scheduler.cancel_timer(id);
        }
    }

    /// Warning timer fired: raise the non-blocking idle warning
    ///
    /// Accepting the warning is the UI calling [`extend`](Self::extend);
    /// declining or ignoring it leaves the expiry timer untouched.
    fn on_warning(&self) {
        let mut state = self.lock_state();
        if !matches!(state.phase, SessionPhase::Running { .. }) {
            return;
        }
        state.phase = SessionPhase::Running { warned: true };
        state.warning_timer = None;
        drop(state);

        info!(remaining_min = self.warning_lead.num_minutes(), "idle warning raised");
        self.notifier.warn_idle(self.warning_lead);
    }

    /// Expiry timer fired: force logout regardless of the warning outcome
    fn on_expiry(&self) {
        let mut state = self.lock_state();
        if !matches!(state.phase, SessionPhase::Running { .. }) {
            return;
        }
        state.phase = SessionPhase::Expired;
        state.warning_timer = None;
        state.expiry_timer = None;
        drop(state);

        info!("idle window elapsed; expiring session");
        self.force_logout();
    }

    /// Best-effort remote sign-out, unconditional local redirect
    fn force_logout(&self) {
        if let Err(error) = self.auth.sign_out() {
            warn!(%error, "backend sign-out failed; proceeding with local logout");
        }
        self.notifier.redirect_to_login();
    }
}
