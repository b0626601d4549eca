/*!
 * Core Module
 * Concurrency and randomness primitives, errors and limits
 */

pub mod errors;
pub mod limits;
pub mod random;
pub mod sync;

// Re-export for convenience
pub use errors::*;
pub use random::{RandomConfig, RandomSource, SeededRandomSource};
pub use sync::{OneShotLatch, ReadySignal};
