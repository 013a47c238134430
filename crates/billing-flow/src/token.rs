//! Session Cancellation Token
//!
//! The gateway handoffs are fire-and-forget timers with no cancellation of
//! their own. If the user navigates away before one fires, the deferred
//! completion must not act on stale state. Every deferred completion checks
//! this token before applying its transition.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag for one billing session
#[derive(Clone, Debug, Default)]
pub struct SessionToken {
    cancelled: Arc<AtomicBool>,
}

impl SessionToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session as left. Any in-flight completion becomes a no-op
    /// beyond resetting its busy flag.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
