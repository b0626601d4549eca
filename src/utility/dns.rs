/*!
 * DNS Response Helpers
 */

use crate::core::errors::{UtilityError, UtilityResult};
use std::net::{IpAddr, SocketAddr};

/// Build a resolver answer from IP literals, preserving order
///
/// Each address gets port 0, as a resolver would return it.
pub fn make_dns_response<S>(addresses: &[S]) -> UtilityResult<Vec<SocketAddr>>
where
    S: AsRef<str>,
{
    addresses
        .iter()
        .map(|address| {
            let address = address.as_ref();
            address
                .parse::<IpAddr>()
                .map(|ip| SocketAddr::new(ip, 0))
                .map_err(|_| UtilityError::InvalidAddress(address.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_families() {
        let response = make_dns_response(&["127.0.0.1", "::1", "10.0.0.2"]).unwrap();
        let rendered: Vec<String> = response.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["127.0.0.1:0", "[::1]:0", "10.0.0.2:0"]);
    }

    #[test]
    fn test_empty_input() {
        let response = make_dns_response::<&str>(&[]).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_rejects_hostname_and_port() {
        assert!(matches!(
            make_dns_response(&["localhost"]),
            Err(UtilityError::InvalidAddress(a)) if a == "localhost"
        ));
        assert!(make_dns_response(&["127.0.0.1:80"]).is_err());
    }
}
