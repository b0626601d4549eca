/*!
 * One-Shot Latch
 *
 * Cross-thread "one shot" ready condition built on parking_lot's
 * `Mutex<bool>` + `Condvar`.
 *
 * # Semantics
 *
 * - `signal()` arms the latch and wakes blocked waiters
 * - `wait_until_signaled()` blocks until armed, then disarms under the same
 *   lock before returning, so the latch is immediately ready for the next round
 *
 * Exactly one waiter consumes each signal. Waiters racing for the same signal
 * have a single winner; the rest stay blocked until the next `signal()`.
 *
 * # Caller Contract
 *
 * `signal()` should be called at most once between two consumed waits.
 * Extra signals issued while the latch is already armed collapse into one.
 * There is no timeout: a wait that is never signaled blocks forever, so test
 * harnesses must supply their own deadline.
 */

use super::traits::ReadySignal;
use parking_lot::{Condvar, Mutex};
use tracing::trace;

/// Reusable single-flag rendezvous between a signaler and its waiters
///
/// # Examples
///
/// ```
/// use proxy_test_common::core::sync::OneShotLatch;
/// use std::sync::Arc;
/// use std::thread;
///
/// let latch = Arc::new(OneShotLatch::new());
/// let latch_clone = latch.clone();
///
/// let handle = thread::spawn(move || latch_clone.signal());
///
/// latch.wait_until_signaled();
/// assert!(!latch.is_signaled());
/// handle.join().unwrap();
/// ```
#[derive(Debug)]
pub struct OneShotLatch {
    ready: Mutex<bool>,
    condvar: Condvar,
}

impl OneShotLatch {
    /// Create an idle latch
    pub const fn new() -> Self {
        Self {
            ready: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Arm the latch and wake waiters
    ///
    /// Safe to call with nobody waiting: the next wait returns immediately.
    pub fn signal(&self) {
        {
            let mut ready = self.ready.lock();
            *ready = true;
        }
        // Wake everyone; only the first to reacquire the lock consumes the flag
        let woken = self.condvar.notify_all();
        trace!(woken, "latch signaled");
    }

    /// Block until signaled, then reset for the next round
    ///
    /// Returns immediately (still resetting) if the latch is already armed.
    pub fn wait_until_signaled(&self) {
        let mut ready = self.ready.lock();
        while !*ready {
            self.condvar.wait(&mut ready);
        }
        *ready = false;
        trace!("latch consumed");
    }

    /// Snapshot of the flag, for diagnostics and assertions only
    ///
    /// The value may be stale by the time the caller looks at it.
    pub fn is_signaled(&self) -> bool {
        *self.ready.lock()
    }
}

impl Default for OneShotLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadySignal for OneShotLatch {
    #[inline]
    fn signal(&self) {
        OneShotLatch::signal(self)
    }

    #[inline]
    fn wait_until_signaled(&self) {
        OneShotLatch::wait_until_signaled(self)
    }
}
