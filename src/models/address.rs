//! IPv4 / IPv6 address value.
//!
//! Provides [`Address`], a parsed address that always knows its [`IpVersion`]
//! and can be viewed as a fixed-width bit pattern for subnet arithmetic.

use crate::error::AddressParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Bit width of an IPv4 address.
pub const IPV4_WIDTH: u8 = 32;
/// Bit width of an IPv6 address.
pub const IPV6_WIDTH: u8 = 128;

/// IP protocol version of an [`Address`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Number of bits in an address of this version.
    pub fn width(self) -> u8 {
        match self {
            IpVersion::V4 => IPV4_WIDTH,
            IpVersion::V6 => IPV6_WIDTH,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "ipv4"),
            IpVersion::V6 => write!(f, "ipv6"),
        }
    }
}

/// A successfully parsed IP address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Address {
    addr: IpAddr,
}

/// Parse dotted-quad IPv4 or colon-hex IPv6 text into an [`Address`].
///
/// Surrounding whitespace is not stripped; `" 10.0.0.1"` is malformed.
///
/// # Examples
/// ```
/// use ipconf_check::models::{parse_address, IpVersion};
/// assert_eq!(parse_address("2001:db8::1").unwrap().version(), IpVersion::V6);
/// assert!(parse_address("192.168.1.256").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Address, AddressParseError> {
    if text.is_empty() {
        return Err(AddressParseError::Empty);
    }
    let addr = IpAddr::from_str(text).map_err(|_| AddressParseError::Malformed(text.to_string()))?;
    Ok(Address { addr })
}

impl Address {
    /// Build an address back from its version and bit pattern.
    ///
    /// For IPv4 only the low 32 bits of `bits` are used.
    pub fn from_bits(version: IpVersion, bits: u128) -> Address {
        let addr = match version {
            IpVersion::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            IpVersion::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
        };
        Address { addr }
    }

    pub fn version(&self) -> IpVersion {
        match self.addr {
            IpAddr::V4(_) => IpVersion::V4,
            IpAddr::V6(_) => IpVersion::V6,
        }
    }

    /// Bit width of this address (32 or 128).
    pub fn width(&self) -> u8 {
        self.version().width()
    }

    /// The address as an unsigned integer, IPv4 zero-extended to 128 bits.
    pub fn bits(&self) -> u128 {
        match self.addr {
            IpAddr::V4(v4) => u128::from(u32::from(v4)),
            IpAddr::V6(v6) => u128::from(v6),
        }
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        Address { addr }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address {
            addr: IpAddr::V4(addr),
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address {
            addr: IpAddr::V6(addr),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.addr)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(serde::de::Error::custom)
    }
}
