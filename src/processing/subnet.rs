//! Subnet expression resolution.
//!
//! Turns what the user typed in the subnet field, either a CIDR prefix
//! (`24`, `64`) or an IPv4 dotted mask (`255.255.255.0`), into a
//! [`PrefixLength`] for the version of a reference address.

use crate::error::SubnetError;
use crate::models::{mask_to_prefix_len, parse_address, Address, IpVersion, PrefixLength};
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Regex for a bare base-10 prefix length.
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Resolve a subnet expression against the version of `reference`.
///
/// When there is no usable reference address the IPv4 rules apply, so a
/// subnet typed before the address is still checked against 0-32.
///
/// # Examples
/// ```
/// use ipconf_check::models::parse_address;
/// use ipconf_check::processing::resolve_subnet;
/// let addr = parse_address("192.168.1.10").unwrap();
/// assert_eq!(resolve_subnet("255.255.255.0", Some(&addr)).unwrap().value(), 24);
/// ```
pub fn resolve_subnet(
    subnet: &str,
    reference: Option<&Address>,
) -> Result<PrefixLength, SubnetError> {
    let version = reference.map_or(IpVersion::V4, Address::version);
    resolve_for_version(subnet, version)
}

/// Resolve a subnet expression using the address text as reference.
///
/// Unparseable address text falls back to IPv4 rules.
pub fn resolve_subnet_text(subnet: &str, reference: &str) -> Result<PrefixLength, SubnetError> {
    let reference = parse_address(reference).ok();
    resolve_subnet(subnet, reference.as_ref())
}

/// True if `subnet` resolves against the address text `reference`.
pub fn is_valid_subnet(subnet: &str, reference: &str) -> bool {
    resolve_subnet_text(subnet, reference).is_ok()
}

/// Resolve a subnet expression for an explicit IP version.
pub fn resolve_for_version(subnet: &str, version: IpVersion) -> Result<PrefixLength, SubnetError> {
    let subnet = subnet.trim();
    if subnet.is_empty() {
        return Err(SubnetError::Empty);
    }

    if get_prefix_regex().is_match(subnet) {
        let max = version.width();
        // Too many digits for u64 is out of range as well
        let value = u64::from_str(subnet).unwrap_or(u64::MAX);
        if value > u64::from(max) {
            log::debug!("prefix {subnet} rejected for {version}, max {max}");
            return Err(SubnetError::PrefixOutOfRange { value, max });
        }
        return PrefixLength::new(value as u8, version);
    }

    match version {
        IpVersion::V4 => resolve_dotted_mask(subnet),
        IpVersion::V6 => {
            if subnet.contains('.') {
                Err(SubnetError::DottedMaskForIpv6(subnet.to_string()))
            } else {
                Err(SubnetError::Malformed(subnet.to_string()))
            }
        }
    }
}

fn resolve_dotted_mask(subnet: &str) -> Result<PrefixLength, SubnetError> {
    let mask = Ipv4Addr::from_str(subnet).map_err(|_| SubnetError::Malformed(subnet.to_string()))?;
    let len = mask_to_prefix_len(u32::from(mask))
        .ok_or_else(|| SubnetError::NonContiguousMask(subnet.to_string()))?;
    log::debug!("dotted mask {subnet} resolved to /{len}");
    PrefixLength::new(len, IpVersion::V4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len_for(subnet: &str, reference: &str) -> Option<u8> {
        resolve_subnet_text(subnet, reference).ok().map(|p| p.value())
    }

    #[test]
    fn test_integer_prefix() {
        assert_eq!(len_for("24", "192.168.1.10"), Some(24));
        assert_eq!(len_for(" 24 ", "192.168.1.10"), Some(24));
        assert_eq!(len_for("0", "192.168.1.10"), Some(0));
        assert_eq!(len_for("32", "192.168.1.10"), Some(32));
        assert_eq!(len_for("024", "192.168.1.10"), Some(24));
        assert_eq!(len_for("33", "192.168.1.10"), None);
        assert_eq!(len_for("64", "2001:db8::1"), Some(64));
        assert_eq!(len_for("128", "2001:db8::1"), Some(128));
        assert_eq!(len_for("129", "2001:db8::1"), None);
        assert_eq!(len_for("99999999999999999999999", "2001:db8::1"), None);
    }

    #[test]
    fn test_prefix_keeps_version() {
        let prefix = resolve_subnet_text("64", "2001:db8::1").unwrap();
        assert_eq!(prefix.version(), IpVersion::V6);
        let prefix = resolve_subnet_text("24", "10.0.0.1").unwrap();
        assert_eq!(prefix.version(), IpVersion::V4);
    }

    #[test]
    fn test_rejects_non_integer_numbers() {
        for bad in ["", "   ", "-1", "+24", "24.5", "0x18", "1e1", "/24", "twenty"] {
            assert_eq!(len_for(bad, "192.168.1.10"), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_dotted_mask() {
        assert_eq!(len_for("255.255.255.0", "192.168.1.10"), Some(24));
        assert_eq!(len_for("255.255.0.0", "10.0.0.1"), Some(16));
        assert_eq!(len_for("255.255.255.252", "10.0.0.1"), Some(30));
        assert_eq!(len_for("255.255.255.255", "10.0.0.1"), Some(32));
        assert_eq!(len_for("0.0.0.0", "10.0.0.1"), Some(0));
    }

    #[test]
    fn test_dotted_mask_rejects() {
        assert_eq!(
            resolve_subnet_text("255.0.255.0", "10.0.0.1"),
            Err(SubnetError::NonContiguousMask("255.0.255.0".to_string()))
        );
        assert_eq!(len_for("0.255.255.255", "10.0.0.1"), None);
        assert_eq!(len_for("255.255.255", "10.0.0.1"), None);
        assert_eq!(len_for("255.255.255.256", "10.0.0.1"), None);
    }

    #[test]
    fn test_dotted_mask_never_for_ipv6() {
        assert_eq!(
            resolve_subnet_text("255.255.255.0", "2001:db8::1"),
            Err(SubnetError::DottedMaskForIpv6("255.255.255.0".to_string()))
        );
        assert_eq!(len_for("ffff:ffff::", "2001:db8::1"), None);
    }

    #[test]
    fn test_unparseable_reference_uses_ipv4_rules() {
        assert_eq!(len_for("24", "not-an-ip"), Some(24));
        assert_eq!(len_for("255.255.255.0", ""), Some(24));
        assert_eq!(len_for("64", "not-an-ip"), None);
        assert!(resolve_subnet("24", None).is_ok());
    }

    #[test]
    fn test_is_valid_subnet() {
        assert!(is_valid_subnet("24", "192.168.1.10"));
        assert!(!is_valid_subnet("255.0.255.0", "192.168.1.10"));
    }

    #[test]
    fn test_every_dotted_mask_round_trips() {
        for len in 0..=32u8 {
            let mask = PrefixLength::new(len, IpVersion::V4).unwrap().to_mask();
            let resolved = resolve_for_version(&mask.to_string(), IpVersion::V4).unwrap();
            assert_eq!(resolved.value(), len);
            assert_eq!(resolved.to_mask(), mask);
        }
    }
}
