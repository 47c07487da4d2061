//! Error types returned across the library boundary.
//!
//! Parsing and resolving never panic; every failure is one of these enums.

use thiserror::Error;

/// Failure to read an IPv4 or IPv6 address from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("address is empty")]
    Empty,
    #[error("invalid IP address: {0}")]
    Malformed(String),
}

/// Failure to turn a subnet expression into a prefix length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("subnet is empty")]
    Empty,
    #[error("prefix length {value} is out of range 0-{max}")]
    PrefixOutOfRange { value: u64, max: u8 },
    #[error("{0} is not a contiguous subnet mask")]
    NonContiguousMask(String),
    #[error("dotted subnet masks are only valid for IPv4: {0}")]
    DottedMaskForIpv6(String),
    #[error("invalid subnet: {0}")]
    Malformed(String),
    #[error("{prefix} prefix length cannot be applied to an {address} address")]
    VersionMismatch {
        prefix: crate::models::IpVersion,
        address: crate::models::IpVersion,
    },
}

/// Failure reported by a clipboard capability.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to load a configuration from the environment or a file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown configuration type '{0}', expected dhcp or static")]
    UnknownMode(String),
    #[error("too many DNS servers: {0} given, at most {max}", max = crate::models::MAX_DNS_SERVERS)]
    TooManyDns(usize),
    #[error("error reading config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("error parsing config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
