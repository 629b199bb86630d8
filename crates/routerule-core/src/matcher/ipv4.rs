//! IPv4 literal classification
//!
//! A target is treated as an address only when the whole string is a
//! dotted quad with every octet in `0..=255`. Anything else is a domain.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::Ipv4Addr;

const OCTET: &str = r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^{OCTET}\.{OCTET}\.{OCTET}\.{OCTET}$");
    Regex::new(&pattern).expect("IPv4 pattern is a valid regex")
});

/// Check if the entire input is an IPv4 dotted-quad literal.
///
/// Leading zeros are accepted (`"01.002.3.4"`), out-of-range octets,
/// missing or extra segments are not.
pub fn is_ipv4(input: &str) -> bool {
    IPV4_RE.is_match(input)
}

/// Parse an IPv4 literal accepted by [`is_ipv4`].
///
/// Unlike [`Ipv4Addr::from_str`](std::str::FromStr), zero-padded octets are
/// read as decimal.
pub fn parse_ipv4(input: &str) -> Option<Ipv4Addr> {
    let caps = IPV4_RE.captures(input)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps.get(i + 1)?.as_str().parse().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_dotted_quad() {
        assert!(is_ipv4("1.2.3.4"));
        assert!(is_ipv4("0.0.0.0"));
        assert!(is_ipv4("255.255.255.255"));
        assert!(is_ipv4("8.8.8.8"));
    }

    #[test]
    fn test_accepts_leading_zeros() {
        assert!(is_ipv4("01.002.3.4"));
        assert!(is_ipv4("000.000.000.000"));
        assert_eq!(parse_ipv4("010.001.000.009"), Some(Ipv4Addr::new(10, 1, 0, 9)));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(!is_ipv4("256.1.1.1"));
        assert!(!is_ipv4("999.1.1.1"));
        assert!(!is_ipv4("1.1.1.300"));
        assert!(!is_ipv4("0255.1.1.1"));
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        assert!(!is_ipv4("1.2.3"));
        assert!(!is_ipv4("1.2.3.4.5"));
        assert!(!is_ipv4("1.2.3."));
        assert!(!is_ipv4(".1.2.3"));
    }

    #[test]
    fn test_rejects_non_addresses() {
        assert!(!is_ipv4("abc"));
        assert!(!is_ipv4(""));
        assert!(!is_ipv4("1.2.3.4 "));
        assert!(!is_ipv4(" 1.2.3.4"));
        assert!(!is_ipv4("1.2.3.4\n"));
        assert!(!is_ipv4("www.1.2.3.4.com"));
        assert!(!is_ipv4("::1"));
    }

    #[test]
    fn test_parse_matches_classifier() {
        assert_eq!(parse_ipv4("192.168.1.10"), Some(Ipv4Addr::new(192, 168, 1, 10)));
        assert_eq!(parse_ipv4("256.1.1.1"), None);
        assert_eq!(parse_ipv4("example.com"), None);
    }

    proptest! {
        #[test]
        fn prop_every_dotted_quad_is_ipv4(a in any::<u8>(), b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
            let s = format!("{a}.{b}.{c}.{d}");
            prop_assert!(is_ipv4(&s));
            prop_assert_eq!(parse_ipv4(&s), Some(Ipv4Addr::new(a, b, c, d)));
        }

        #[test]
        fn prop_out_of_range_octet_rejected(a in 256u32..100_000, b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
            let s = format!("{b}.{c}.{a}.{d}");
            prop_assert!(!is_ipv4(&s));
        }

        #[test]
        fn prop_alphabetic_never_ipv4(s in "[a-zA-Z.-]{0,40}") {
            prop_assert!(!is_ipv4(&s));
            prop_assert_eq!(parse_ipv4(&s), None);
        }
    }
}
