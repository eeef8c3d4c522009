//! IP address, CIDR and listen-address validation.

use std::net::IpAddr;

/// Classification of an address-like string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// A bare IPv4 or IPv6 address.
    Ip,
    /// An address with a prefix length, e.g. `10.0.0.0/8`.
    Cidr,
    /// Neither of the above.
    Neither,
}

/// Returns true if `input` is a valid IPv4 or IPv6 address.
#[must_use]
pub fn is_ip_address(input: &str) -> bool {
    input.parse::<IpAddr>().is_ok()
}

/// Returns true if `input` is valid CIDR notation.
///
/// The address part may have host bits set (`192.168.1.7/24` is accepted);
/// the prefix must not exceed 32 for IPv4 or 128 for IPv6.
#[must_use]
pub fn is_cidr(input: &str) -> bool {
    let Some((address, prefix)) = input.split_once('/') else {
        return false;
    };
    let Ok(address) = address.parse::<IpAddr>() else {
        return false;
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Ok(prefix) = prefix.parse::<u8>() else {
        return false;
    };

    match address {
        IpAddr::V4(_) => prefix <= 32,
        IpAddr::V6(_) => prefix <= 128,
    }
}

/// Determines whether `input` is an IP address, a CIDR block, or neither.
#[must_use]
pub fn classify_address(input: &str) -> AddressKind {
    if is_ip_address(input) {
        AddressKind::Ip
    } else if is_cidr(input) {
        AddressKind::Cidr
    } else {
        AddressKind::Neither
    }
}

/// Validates a listen address of the form `:<port>` or `<ip>:<port>`.
///
/// IPv6 hosts must be bracketed (`[::1]:8080`). The port must be in
/// `1..=65535`.
#[must_use]
pub fn is_valid_listen_addr(addr: &str) -> bool {
    let Some((host, port)) = split_host_port(addr) else {
        return false;
    };

    if !host.is_empty() && !is_ip_address(host) {
        return false;
    }

    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(port.parse::<u32>(), Ok(1..=65_535))
}

fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    if let Some(bracketed) = addr.strip_prefix('[') {
        let (host, rest) = bracketed.split_once(']')?;
        let port = rest.strip_prefix(':')?;
        return Some((host, port));
    }

    let (host, port) = addr.rsplit_once(':')?;
    if host.contains(':') {
        // Unbracketed IPv6 is ambiguous.
        return None;
    }
    Some((host, port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ip_addresses() {
        assert!(is_ip_address("192.168.1.100"));
        assert!(is_ip_address("192.168.1.120"));
        assert!(is_ip_address("::1"));
        assert!(is_ip_address("2001:db8::ff00:42:8329"));
        assert!(!is_ip_address("192.168.1.256"));
        assert!(!is_ip_address("invalid-input"));
        assert!(!is_ip_address("192.168.1.100/32"));
    }

    #[test]
    fn test_cidr() {
        assert!(is_cidr("192.168.1.100/32"));
        assert!(is_cidr("10.0.0.0/8"));
        assert!(is_cidr("2001:db8::/32"));
        assert!(is_cidr("::/0"));
        assert!(!is_cidr("192.168.1.100/33"));
        assert!(!is_cidr("2001:db8::/129"));
        assert!(!is_cidr("192.168.1.100"));
        assert!(!is_cidr("192.168.1.100/"));
        assert!(!is_cidr("192.168.1.100/+8"));
        assert!(!is_cidr("host/24"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify_address("192.168.1.100"), AddressKind::Ip);
        assert_eq!(classify_address("192.168.1.100/32"), AddressKind::Cidr);
        assert_eq!(classify_address("invalid-input"), AddressKind::Neither);
        assert_eq!(classify_address("192.168.1.100/33"), AddressKind::Neither);
    }

    #[test]
    fn test_listen_addr() {
        assert!(is_valid_listen_addr(":80"));
        assert!(is_valid_listen_addr("127.0.0.1:8080"));
        assert!(is_valid_listen_addr("[::1]:443"));
        assert!(is_valid_listen_addr("0.0.0.0:65535"));
    }

    #[test]
    fn test_invalid_listen_addr() {
        assert!(!is_valid_listen_addr("80"));
        assert!(!is_valid_listen_addr(":0"));
        assert!(!is_valid_listen_addr(":65536"));
        assert!(!is_valid_listen_addr("localhost:80"));
        assert!(!is_valid_listen_addr("::1:80"));
        assert!(!is_valid_listen_addr("127.0.0.1:"));
        assert!(!is_valid_listen_addr("127.0.0.1:http"));
        assert!(!is_valid_listen_addr("[::1]443"));
    }
}
