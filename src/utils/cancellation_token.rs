use std::{
    sync::{Condvar, Mutex},
    time::Duration,
};

/// A cancellation token shared between the main thread and helper threads.
pub(crate) struct CancellationToken {
    // Setting this to true marks the token as cancelled.
    mutex: Mutex<bool>,
    cvar: Condvar,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self {
            mutex: Mutex::new(false),
            cvar: Condvar::new(),
        }
    }
}

impl CancellationToken {
    /// Mark the [`CancellationToken`] as cancelled.
    ///
    /// This is idempotent, and once cancelled, will stay cancelled.
    pub fn cancel(&self) {
        let mut guard = self
            .mutex
            .lock()
            .expect("cancellation token lock should not be poisoned");

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    /// Whether the token has been cancelled. Does not block; if the lock is
    /// currently held elsewhere this reports `false` and the caller checks
    /// again on its next pass.
    pub fn is_cancelled(&self) -> bool {
        self.mutex.try_lock().map(|guard| *guard).unwrap_or(false)
    }

    /// Sleep for up to `duration`, waking early if the token is cancelled.
    ///
    /// Returns whether the token is cancelled after waking up.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let guard = self
            .mutex
            .lock()
            .expect("cancellation token lock should not be poisoned");

        let (result, _) = self
            .cvar
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .expect("cancellation token lock should not be poisoned");

        *result
    }
}
