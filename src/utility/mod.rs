/*!
 * Test Utilities
 *
 * Small deterministic helpers shared by unit and integration tests:
 * - Buffer comparison and conversion
 * - Stats lookup by name
 * - DNS response construction
 * - File listing and descriptor cleanup
 * - Proto equality
 * - Error-with-message assertions
 */

pub mod assertions;
pub mod buffer;
pub mod dns;
pub mod fs;
pub mod proto;
pub mod stats;

pub use assertions::expect_err_with_message;
pub use buffer::{buffer_to_string, buffers_equal};
pub use dns::make_dns_response;
pub use fs::list_files;
#[cfg(unix)]
pub use fs::ScopedFdCloser;
pub use proto::{proto_equal, repeated_proto_equal};
pub use stats::{find_counter, find_gauge, Counter, Gauge, IsolatedStore, StatsStore};
