/*!
 * Synchronization Primitives
 *
 * Cross-thread coordination used by tests that run a producer and one or
 * more consumers on real OS threads.
 *
 * # Architecture
 *
 * - `OneShotLatch`: mutex + condvar flag that auto-resets when a waiter
 *   consumes it, reusable across rounds
 * - `ReadySignal`: trait seam so helpers can accept any readiness source
 */

mod latch;
mod traits;

pub use latch::OneShotLatch;
pub use traits::ReadySignal;
