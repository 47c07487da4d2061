//! Domain models for the configuration validator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Address`] - parsed IPv4/IPv6 address with its [`IpVersion`]
//! - [`PrefixLength`] - CIDR prefix tied to an IP version, plus mask arithmetic
//! - [`Configuration`] and [`DnsServers`] - the raw user input
//! - [`Finding`] - one validation outcome keyed by [`Field`]

mod address;
mod config;
mod finding;
mod prefix;

// Re-export public types
pub use address::{parse_address, Address, IpVersion, IPV4_WIDTH, IPV6_WIDTH};
pub use config::{ConfigType, Configuration, DnsServers, MAX_DNS_SERVERS, MIN_DNS_SERVERS};
pub use finding::{Field, Finding, Severity};
pub use prefix::{broadcast_addr, cut_addr, get_cidr_mask, mask_to_prefix_len, PrefixLength};
