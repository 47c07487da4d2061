//! Address classification.
//!
//! Names the special-use block an address belongs to. Anything outside the
//! tables below is ordinary global unicast, which is what the form treats
//! as a public address.

use crate::models::{cut_addr, parse_address, Address, IpVersion, PrefixLength};
use serde::Serialize;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Routing class of an address.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AddressRange {
    Unspecified,
    Broadcast,
    Multicast,
    LinkLocal,
    Loopback,
    CarrierGradeNat,
    Private,
    UniqueLocal,
    Ipv4Mapped,
    Translation,
    SixToFour,
    Teredo,
    Documentation,
    Benchmarking,
    Reserved,
    Unicast,
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AddressRange::Unspecified => "unspecified",
            AddressRange::Broadcast => "broadcast",
            AddressRange::Multicast => "multicast",
            AddressRange::LinkLocal => "link-local",
            AddressRange::Loopback => "loopback",
            AddressRange::CarrierGradeNat => "carrier-grade NAT",
            AddressRange::Private => "private",
            AddressRange::UniqueLocal => "unique-local",
            AddressRange::Ipv4Mapped => "IPv4-mapped",
            AddressRange::Translation => "IPv4/IPv6 translation",
            AddressRange::SixToFour => "6to4",
            AddressRange::Teredo => "Teredo",
            AddressRange::Documentation => "documentation",
            AddressRange::Benchmarking => "benchmarking",
            AddressRange::Reserved => "reserved",
            AddressRange::Unicast => "unicast",
        };
        write!(f, "{name}")
    }
}

// More specific blocks come before the blocks that contain them.
const IPV4_RANGES: &[(Ipv4Addr, u8, AddressRange)] = &[
    (Ipv4Addr::new(0, 0, 0, 0), 8, AddressRange::Unspecified),
    (Ipv4Addr::new(255, 255, 255, 255), 32, AddressRange::Broadcast),
    (Ipv4Addr::new(224, 0, 0, 0), 4, AddressRange::Multicast),
    (Ipv4Addr::new(169, 254, 0, 0), 16, AddressRange::LinkLocal),
    (Ipv4Addr::new(127, 0, 0, 0), 8, AddressRange::Loopback),
    (Ipv4Addr::new(100, 64, 0, 0), 10, AddressRange::CarrierGradeNat),
    (Ipv4Addr::new(10, 0, 0, 0), 8, AddressRange::Private),
    (Ipv4Addr::new(172, 16, 0, 0), 12, AddressRange::Private),
    (Ipv4Addr::new(192, 168, 0, 0), 16, AddressRange::Private),
    (Ipv4Addr::new(192, 0, 2, 0), 24, AddressRange::Documentation),
    (Ipv4Addr::new(198, 51, 100, 0), 24, AddressRange::Documentation),
    (Ipv4Addr::new(203, 0, 113, 0), 24, AddressRange::Documentation),
    (Ipv4Addr::new(198, 18, 0, 0), 15, AddressRange::Benchmarking),
    (Ipv4Addr::new(192, 0, 0, 0), 24, AddressRange::Reserved),
    (Ipv4Addr::new(192, 88, 99, 0), 24, AddressRange::Reserved),
    (Ipv4Addr::new(192, 31, 196, 0), 24, AddressRange::Reserved),
    (Ipv4Addr::new(192, 52, 193, 0), 24, AddressRange::Reserved),
    (Ipv4Addr::new(192, 175, 48, 0), 24, AddressRange::Reserved),
    (Ipv4Addr::new(240, 0, 0, 0), 4, AddressRange::Reserved),
];

const IPV6_RANGES: &[(Ipv6Addr, u8, AddressRange)] = &[
    (Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0), 128, AddressRange::Unspecified),
    (Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1), 128, AddressRange::Loopback),
    (Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0), 10, AddressRange::LinkLocal),
    (Ipv6Addr::new(0xff00, 0, 0, 0, 0, 0, 0, 0), 8, AddressRange::Multicast),
    (Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0), 7, AddressRange::UniqueLocal),
    (Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0, 0), 96, AddressRange::Ipv4Mapped),
    (Ipv6Addr::new(0, 0, 0, 0, 0xffff, 0, 0, 0), 96, AddressRange::Translation),
    (Ipv6Addr::new(0x64, 0xff9b, 0, 0, 0, 0, 0, 0), 96, AddressRange::Translation),
    (Ipv6Addr::new(0x2002, 0, 0, 0, 0, 0, 0, 0), 16, AddressRange::SixToFour),
    (Ipv6Addr::new(0x2001, 0, 0, 0, 0, 0, 0, 0), 32, AddressRange::Teredo),
    (Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0), 32, AddressRange::Documentation),
    (Ipv6Addr::new(0x2001, 0x2, 0, 0, 0, 0, 0, 0), 48, AddressRange::Benchmarking),
    (Ipv6Addr::new(0x100, 0, 0, 0, 0, 0, 0, 0), 64, AddressRange::Reserved),
    (Ipv6Addr::new(0x2001, 0x3, 0, 0, 0, 0, 0, 0), 32, AddressRange::Reserved),
    (Ipv6Addr::new(0x2001, 0x4, 0x112, 0, 0, 0, 0, 0), 48, AddressRange::Reserved),
    (Ipv6Addr::new(0x2001, 0x10, 0, 0, 0, 0, 0, 0), 28, AddressRange::Reserved),
    (Ipv6Addr::new(0x2001, 0x20, 0, 0, 0, 0, 0, 0), 28, AddressRange::Reserved),
    (Ipv6Addr::new(0x2001, 0x30, 0, 0, 0, 0, 0, 0), 28, AddressRange::Reserved),
    // rest of the IETF protocol assignments, after the 2001:* blocks above
    (Ipv6Addr::new(0x2001, 0, 0, 0, 0, 0, 0, 0), 23, AddressRange::Reserved),
    (Ipv6Addr::new(0x2620, 0x4f, 0x8000, 0, 0, 0, 0, 0), 48, AddressRange::Reserved),
];

/// True if `addr` lies inside `network/len`.
fn in_block(addr: &Address, network: Address, len: u8) -> bool {
    PrefixLength::new(len, network.version())
        .and_then(|prefix| cut_addr(addr, prefix))
        .is_ok_and(|cut| cut == network)
}

/// Find the special-use block an address falls in.
pub fn classify(addr: &Address) -> AddressRange {
    let found = match addr.version() {
        IpVersion::V4 => IPV4_RANGES
            .iter()
            .find(|(network, len, _)| in_block(addr, Address::from(*network), *len))
            .map(|(_, _, range)| *range),
        IpVersion::V6 => IPV6_RANGES
            .iter()
            .find(|(network, len, _)| in_block(addr, Address::from(*network), *len))
            .map(|(_, _, range)| *range),
    };
    found.unwrap_or(AddressRange::Unicast)
}

/// True if the address is globally routable unicast.
pub fn is_public(addr: &Address) -> bool {
    classify(addr) == AddressRange::Unicast
}

/// Like [`is_public`], but from text. Unparseable text is never public.
pub fn is_public_text(text: &str) -> bool {
    parse_address(text).is_ok_and(|addr| is_public(&addr))
}
