//! Prefix length and mask arithmetic.
//!
//! Provides [`PrefixLength`], a CIDR prefix tied to the IP version it was
//! resolved against, along with the mask / network / broadcast calculations
//! that work the same way for 32-bit and 128-bit addresses.

use super::address::{Address, IpVersion};
use crate::error::SubnetError;
use serde::Serialize;
use std::fmt;

/// A CIDR prefix length, valid for one IP version.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixLength {
    len: u8,
    version: IpVersion,
}

impl PrefixLength {
    /// Create a prefix length, rejecting values wider than the version allows.
    ///
    /// # Examples
    /// ```
    /// use ipconf_check::models::{IpVersion, PrefixLength};
    /// assert!(PrefixLength::new(24, IpVersion::V4).is_ok());
    /// assert!(PrefixLength::new(33, IpVersion::V4).is_err());
    /// assert!(PrefixLength::new(64, IpVersion::V6).is_ok());
    /// ```
    pub fn new(len: u8, version: IpVersion) -> Result<PrefixLength, SubnetError> {
        let max = version.width();
        if len > max {
            return Err(SubnetError::PrefixOutOfRange {
                value: u64::from(len),
                max,
            });
        }
        Ok(PrefixLength { len, version })
    }

    pub fn value(&self) -> u8 {
        self.len
    }

    pub fn version(&self) -> IpVersion {
        self.version
    }

    /// Number of host bits left after the prefix.
    pub fn host_bits(&self) -> u8 {
        self.version.width() - self.len
    }

    /// The network mask as an address of the same version,
    /// e.g. `/24` becomes `255.255.255.0`.
    pub fn to_mask(&self) -> Address {
        Address::from_bits(self.version, get_cidr_mask(*self))
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}", self.len)
    }
}

/// All-ones value for the given address width.
fn width_bits(version: IpVersion) -> u128 {
    match version {
        IpVersion::V4 => u128::from(u32::MAX),
        IpVersion::V6 => u128::MAX,
    }
}

/// Convert a prefix length to its network mask bits.
///
/// IPv4 masks occupy the low 32 bits of the result.
pub fn get_cidr_mask(prefix: PrefixLength) -> u128 {
    let right_len = prefix.host_bits();
    if right_len >= 128 {
        // /0 on IPv6, shifting by the full width would overflow
        return 0;
    }
    (width_bits(prefix.version) >> right_len) << right_len
}

fn check_version(addr: &Address, prefix: PrefixLength) -> Result<(), SubnetError> {
    if addr.version() != prefix.version() {
        return Err(SubnetError::VersionMismatch {
            prefix: prefix.version(),
            address: addr.version(),
        });
    }
    Ok(())
}

/// Get the network address (all host bits cleared) for an address and prefix.
pub fn cut_addr(addr: &Address, prefix: PrefixLength) -> Result<Address, SubnetError> {
    check_version(addr, prefix)?;
    let network_bits = addr.bits() & get_cidr_mask(prefix);
    Ok(Address::from_bits(prefix.version(), network_bits))
}

/// Get the last address (all host bits set) for an address and prefix.
///
/// For IPv4 this is the broadcast address.
pub fn broadcast_addr(addr: &Address, prefix: PrefixLength) -> Result<Address, SubnetError> {
    check_version(addr, prefix)?;
    let mask = get_cidr_mask(prefix);
    let host_mask = !mask & width_bits(prefix.version());
    let broadcast_bits = (addr.bits() & mask) | host_mask;
    Ok(Address::from_bits(prefix.version(), broadcast_bits))
}

/// Prefix length of a mask, or `None` if its one-bits are not contiguous.
///
/// # Examples
/// ```
/// use ipconf_check::models::mask_to_prefix_len;
/// assert_eq!(mask_to_prefix_len(0xFFFF_FF00), Some(24));
/// assert_eq!(mask_to_prefix_len(0xFF00_FF00), None);
/// ```
pub fn mask_to_prefix_len(mask: u32) -> Option<u8> {
    let ones = mask.leading_ones();
    if ones + mask.trailing_zeros() == 32 {
        Some(ones as u8)
    } else {
        None
    }
}
