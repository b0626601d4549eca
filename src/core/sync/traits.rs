/*!
 * Synchronization Traits
 *
 * Seam for components that need to be told "you may proceed" by another
 * thread without caring how the notification is implemented.
 */

use std::sync::Arc;

/// A readiness notification that is consumed by the waiter
///
/// Implementations must be:
/// - **Thread-safe**: `signal` and `wait_until_signaled` may run on different threads
/// - **Lossless**: a signal that happens-before a wait is observed by that wait
/// - **Single delivery**: each signal releases at most one wait
pub trait ReadySignal: Send + Sync {
    /// Mark the condition ready and wake a waiter
    fn signal(&self);

    /// Block until ready, consuming the readiness
    fn wait_until_signaled(&self);
}

impl<T> ReadySignal for Arc<T>
where
    T: ReadySignal + ?Sized,
{
    #[inline]
    fn signal(&self) {
        (**self).signal()
    }

    #[inline]
    fn wait_until_signaled(&self) {
        (**self).wait_until_signaled()
    }
}
