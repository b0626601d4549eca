/*!
 * Test Header Map Tests
 */

use pretty_assertions::assert_eq;
use proxy_test_common::{HeaderMap, HeaderMapImpl, LowerCaseString, TestHeaderMap};

/// Helpers written against the capability accept the test map directly
fn header_count(map: &dyn HeaderMap, key: &str) -> usize {
    let key = LowerCaseString::new(key);
    map.iter().filter(|(k, _)| **k == key).count()
}

#[test]
fn test_request_headers() {
    let headers = TestHeaderMap::from_pairs([
        (":method", "POST"),
        (":path", "/v1/discovery"),
        (":authority", "host"),
        ("Content-Type", "application/grpc"),
        ("x-forwarded-for", "10.0.0.1"),
        ("X-Forwarded-For", "10.0.0.2"),
    ]);

    assert_eq!(headers.get_(":path"), "/v1/discovery");
    assert_eq!(headers.get_("content-type"), "application/grpc");
    assert_eq!(header_count(&headers, "x-forwarded-for"), 2);
    assert_eq!(headers.len(), 6);
}

#[test]
fn test_round_trip_through_impl() {
    let mut original = TestHeaderMap::new();
    original.add_copy("a", "1");
    original.add_copy(&LowerCaseString::new("B"), "2");

    let inner: HeaderMapImpl = original.clone().into_inner();
    let copy = TestHeaderMap::from_map(&inner);
    assert_eq!(copy, original);
    assert!(copy.has("b"));
}
