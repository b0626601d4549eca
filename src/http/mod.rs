/*!
 * HTTP Test Helpers
 */

pub mod header_map;

pub use header_map::{HeaderMap, HeaderMapImpl, LowerCaseString, TestHeaderMap};
