/*!
 * Deterministic Randomness
 *
 * Seeded generator whose seed is always logged, so flaky concurrent tests can
 * be replayed with `TEST_RANDOM_SEED=<seed>`.
 */

mod config;
mod generator;
mod traits;

pub use config::RandomConfig;
pub use generator::SeededRandomSource;
pub use traits::RandomSource;
