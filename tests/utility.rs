/*!
 * Test utility integration tests entry point
 */

#[path = "utility/stats_test.rs"]
mod stats_test;

#[path = "utility/fs_test.rs"]
mod fs_test;

#[path = "utility/header_map_test.rs"]
mod header_map_test;
