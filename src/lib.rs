/*!
 * Proxy Test Common
 * Shared test-support library for the proxy's unit and integration tests
 */

pub mod core;
pub mod http;
pub mod monitoring;
pub mod utility;

// Re-exports
pub use crate::core::errors::{ConfigError, UtilityError, UtilityResult};
pub use crate::core::random::{RandomConfig, RandomSource, SeededRandomSource};
pub use crate::core::sync::{OneShotLatch, ReadySignal};
pub use http::{HeaderMap, HeaderMapImpl, LowerCaseString, TestHeaderMap};
pub use monitoring::{init_test_tracing, init_tracing};

// Used by `expect_err_with_message!`
#[doc(hidden)]
pub use anyhow;
