// datamask/src/maskers/ip.rs

use once_cell::sync::Lazy;
use regex::Regex;

static V4_LAST_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\d+$").expect("built-in pattern must compile"));

static V6_LAST_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":[0-9a-fA-F]+$").expect("built-in pattern must compile"));

/// Masks the host portion of an IP address.
///
/// IPv4 loses its last dot-segment (`192.168.1.50` → `192.168.1.***`),
/// IPv6 its last colon-segment. Anything else passes through unchanged.
pub fn mask_ip(value: &str) -> String {
    if value.contains('.') {
        return V4_LAST_SEGMENT.replace(value, ".***").to_string();
    }
    if value.contains(':') {
        return V6_LAST_SEGMENT.replace(value, ":****").to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_ipv4_tail() {
        assert_eq!(mask_ip("192.168.1.50"), "192.168.1.***");
    }

    #[test]
    fn masks_ipv6_tail() {
        assert_eq!(
            mask_ip("2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
            "2001:0db8:85a3:0000:0000:8a2e:0370:****"
        );
    }

    #[test]
    fn passes_through_non_ip() {
        assert_eq!(mask_ip("not-an-ip"), "not-an-ip");
    }
}
