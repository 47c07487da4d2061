//! Address / subnet relationship checks.
//!
//! Subnet membership between two addresses, and the network / broadcast
//! address edge cases for a single address and prefix.

use super::subnet::{resolve_subnet, resolve_subnet_text};
use crate::models::{
    broadcast_addr, cut_addr, parse_address, Address, Field, Finding, IpVersion, PrefixLength,
};
use serde::Serialize;

/// Shortest IPv4 prefix where every address is a usable host.
pub const IPV4_POINT_TO_POINT: u8 = 31;
/// Shortest IPv6 prefix where every address is a usable host.
pub const IPV6_POINT_TO_POINT: u8 = 127;

/// An address that collides with a reserved address of its own subnet.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCase {
    NetworkAddress,
    BroadcastAddress,
}

impl EdgeCase {
    /// The blocking finding for `field` sitting on this edge case.
    pub fn finding(self, field: Field) -> Finding {
        match self {
            EdgeCase::NetworkAddress => Finding::NetworkAddressConflict { field },
            EdgeCase::BroadcastAddress => Finding::BroadcastAddressConflict { field },
        }
    }
}

/// Network address (host bits cleared). `None` on version mismatch.
pub fn network_address(addr: &Address, prefix: PrefixLength) -> Option<Address> {
    cut_addr(addr, prefix).ok()
}

/// Broadcast address (host bits set). IPv6 has no broadcast, so `None`.
pub fn broadcast_address(addr: &Address, prefix: PrefixLength) -> Option<Address> {
    match addr.version() {
        IpVersion::V4 => broadcast_addr(addr, prefix).ok(),
        IpVersion::V6 => None,
    }
}

/// True if both addresses share the top `prefix` bits.
///
/// Addresses of different versions are never in the same subnet.
pub fn same_subnet_addr(a: &Address, b: &Address, prefix: PrefixLength) -> bool {
    if a.version() != b.version() {
        return false;
    }
    match (cut_addr(a, prefix), cut_addr(b, prefix)) {
        (Ok(net_a), Ok(net_b)) => net_a == net_b,
        _ => false,
    }
}

/// Check whether two address texts sit in the same subnet.
///
/// The prefix is resolved against `a`. Any parse failure, an unresolvable
/// subnet or differing versions give `false`.
///
/// # Examples
/// ```
/// use ipconf_check::processing::same_subnet;
/// assert!(same_subnet("192.168.1.10", "192.168.1.1", "24"));
/// assert!(!same_subnet("192.168.1.10", "192.168.2.1", "255.255.255.0"));
/// ```
pub fn same_subnet(a: &str, b: &str, subnet: &str) -> bool {
    let prefix = match resolve_subnet_text(subnet, a) {
        Ok(prefix) => prefix,
        Err(_) => return false,
    };
    match (parse_address(a), parse_address(b)) {
        (Ok(a), Ok(b)) => same_subnet_addr(&a, &b, prefix),
        _ => false,
    }
}

/// Detect an address that is its subnet's network or broadcast address.
///
/// Point-to-point prefixes (/31, /32 for IPv4 and /127, /128 for IPv6)
/// never conflict.
pub fn edge_case_for(addr: &Address, prefix: PrefixLength) -> Option<EdgeCase> {
    let limit = match addr.version() {
        IpVersion::V4 => IPV4_POINT_TO_POINT,
        IpVersion::V6 => IPV6_POINT_TO_POINT,
    };
    if prefix.value() >= limit {
        return None;
    }
    if network_address(addr, prefix).is_some_and(|network| network == *addr) {
        return Some(EdgeCase::NetworkAddress);
    }
    if broadcast_address(addr, prefix).is_some_and(|broadcast| broadcast == *addr) {
        return Some(EdgeCase::BroadcastAddress);
    }
    None
}

/// Text form of [`edge_case_for`].
///
/// Returns `None` when the address or subnet does not resolve; callers
/// report that as a format problem instead.
pub fn edge_case_check(address: &str, subnet: &str) -> Option<EdgeCase> {
    let addr = parse_address(address).ok()?;
    let prefix = resolve_subnet(subnet, Some(&addr)).ok()?;
    let edge = edge_case_for(&addr, prefix);
    if let Some(edge) = edge {
        log::debug!("{address}{prefix} is the {edge:?}");
    }
    edge
}
