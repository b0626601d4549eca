/*!
 * Monitoring
 * Tracing subscriber setup for test binaries
 */

pub mod tracer;

pub use tracer::{init_test_tracing, init_tracing};
