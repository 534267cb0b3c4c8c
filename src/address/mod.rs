//! Client address validation and classification.
//!
//! Decides which candidate addresses from a forwarding header are worth a
//! database lookup. Loopback, link-local, private and other non-routable
//! addresses are "local" and never geolocated.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Parses a candidate address, ignoring surrounding whitespace.
///
/// Returns `None` for empty, whitespace-only or malformed input.
pub fn parse_candidate(ip: &str) -> Option<IpAddr> {
    let trimmed = ip.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<IpAddr>().ok()
}

/// Returns true if `ip` is a dotted-decimal IPv4 or textual IPv6 address.
pub fn is_syntactically_valid(ip: &str) -> bool {
    parse_candidate(ip).is_some()
}

/// Returns true if `ip` is a valid address that cannot be meaningfully geolocated.
///
/// Invalid input is never local.
pub fn is_local(ip: &str) -> bool {
    parse_candidate(ip).is_some_and(|addr| is_local_addr(&addr))
}

/// Checks whether an address is loopback, link-local, private or otherwise non-routable.
pub fn is_local_addr(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_local_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => is_local_v4(&v4),
            None => is_local_v6(v6),
        },
    }
}

fn is_local_v4(v4: &Ipv4Addr) -> bool {
    v4.is_loopback()
        || v4.is_private()
        || v4.is_link_local()
        || v4.is_unspecified()
        || v4.is_broadcast()
        || is_shared_v4(v4)
}

// 100.64.0.0/10 (carrier-grade NAT, RFC 6598)
fn is_shared_v4(v4: &Ipv4Addr) -> bool {
    let [a, b, ..] = v4.octets();
    a == 100 && (b & 0xc0) == 0x40
}

fn is_local_v6(v6: &Ipv6Addr) -> bool {
    v6.is_loopback()
        || v6.is_unspecified()
        || (v6.segments()[0] & 0xfe00) == 0xfc00 // fc00::/7 (ULA)
        || (v6.segments()[0] & 0xffc0) == 0xfe80 // fe80::/10 (link-local)
}

/// Splits a comma-separated forwarding header into trimmed candidates.
///
/// Order is preserved and empty entries are dropped.
pub fn split_candidates(header: &str) -> Vec<&str> {
    header
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns the first candidate that is valid and not local, in order.
pub fn first_routable<'a, I, S>(candidates: I) -> Option<IpAddr>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    candidates.into_iter().find_map(|candidate| {
        let addr = parse_candidate(candidate.as_ref())?;
        if is_local_addr(&addr) {
            log::debug!("Skipping local address {}", addr);
            return None;
        }
        Some(addr)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_local_ipv4() {
        // Private ranges
        assert!(is_local("10.0.0.1"));
        assert!(is_local("172.16.0.1"));
        assert!(is_local("172.31.255.254"));
        assert!(is_local("192.168.1.1"));
        // Loopback
        assert!(is_local("127.0.0.1"));
        assert!(is_local("127.255.0.3"));
        // Link-local, shared, unspecified, broadcast
        assert!(is_local("169.254.10.10"));
        assert!(is_local("100.64.0.1"));
        assert!(is_local("100.127.255.255"));
        assert!(is_local("0.0.0.0"));
        assert!(is_local("255.255.255.255"));
        // Public
        assert!(!is_local("8.8.8.8"));
        assert!(!is_local("1.1.1.1"));
        assert!(!is_local("172.32.0.1"));
        assert!(!is_local("100.128.0.1"));
    }

    #[test]
    fn test_is_local_ipv6() {
        assert!(is_local("::1"));
        assert!(is_local("::"));
        assert!(is_local("fd00::1"));
        assert!(is_local("fc00::1"));
        assert!(is_local("fe80::1"));
        assert!(is_local("::ffff:192.168.1.1"));
        assert!(!is_local("2001:4860:4860::8888"));
        assert!(!is_local("::ffff:8.8.8.8"));
    }

    #[test]
    fn test_invalid_is_never_local() {
        assert!(!is_local(""));
        assert!(!is_local("   "));
        assert!(!is_local("localhost"));
        assert!(!is_local("127.0.0.256"));
    }

    #[test]
    fn test_is_syntactically_valid_accepts_both_families() {
        assert!(is_syntactically_valid("8.8.8.8"));
        assert!(is_syntactically_valid("2001:db8:85a3::8a2e:370:7334"));
        assert!(is_syntactically_valid("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(is_syntactically_valid("::ffff:192.168.1.1"));
        // header values arrive with a space after each comma
        assert!(is_syntactically_valid(" 8.8.8.8 "));
    }

    #[test]
    fn test_is_syntactically_valid_rejects_malformed() {
        let malformed = vec![
            "",
            " ",
            "abcd",
            "999.1.1.1",
            "256.1.1.1",
            "1.1.1",
            "1.1.1.1.1",
            "8.8.8.8\0",
            "2001:db8::85a3::7334",
            "1:2:3:4:5:6:7:8:9",
            "8.8.8.8:80",
        ];
        for ip in malformed {
            assert!(
                !is_syntactically_valid(ip),
                "{:?} should not be a valid address",
                ip
            );
        }
    }

    #[test]
    fn test_very_long_string_is_invalid() {
        let long_string = "A".repeat(10000);
        assert!(!is_syntactically_valid(&long_string));
    }

    #[test]
    fn test_split_candidates_preserves_order_and_trims() {
        assert_eq!(
            split_candidates("203.0.113.9, 10.0.0.1 ,8.8.8.8"),
            vec!["203.0.113.9", "10.0.0.1", "8.8.8.8"]
        );
        assert_eq!(split_candidates(" , ,"), Vec::<&str>::new());
        assert_eq!(split_candidates(""), Vec::<&str>::new());
    }

    #[test]
    fn test_first_routable_skips_private_and_invalid() {
        let candidates = ["10.0.0.1", "garbage", "8.8.8.8", "1.1.1.1"];
        assert_eq!(
            first_routable(&candidates),
            Some("8.8.8.8".parse().unwrap())
        );
    }

    #[test]
    fn test_first_routable_none_when_all_local() {
        let candidates = vec!["127.0.0.1".to_string(), "".to_string(), "fe80::1".to_string()];
        assert_eq!(first_routable(&candidates), None);
    }
}
