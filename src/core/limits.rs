/*!
 * Test Limits and Constants
 *
 * Centralized location for environment variable names, default timeouts and
 * other knobs shared by the test helpers.
 */

use std::time::Duration;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Environment variable holding an explicit random seed
/// Set it to the seed printed by a failing run to replay the same sequence
pub const RANDOM_SEED_ENV: &str = "TEST_RANDOM_SEED";

/// Environment variable enabling JSON trace output ("1" or "true")
pub const TRACE_JSON_ENV: &str = "TEST_TRACE_JSON";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// TIMEOUTS
// =============================================================================

/// Upper bound a test should allow for a signaled latch waiter to return
/// Used by test harnesses wrapping the latch in an external deadline
pub const LATCH_WAKE_TIMEOUT: Duration = Duration::from_secs(5);

/// Delay used when proving that a waiter actually blocked
pub const LATCH_BLOCK_CHECK: Duration = Duration::from_millis(50);
