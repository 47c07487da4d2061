//! Validation findings.
//!
//! A [`Finding`] names one problem (or warning) and the form field(s) it
//! belongs to. Findings are produced fresh by every validation pass.

use super::address::IpVersion;
use serde::Serialize;
use std::fmt;

/// A logical input field of the configuration form.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", tag = "field", content = "index")]
pub enum Field {
    IpAddress,
    Subnet,
    Gateway,
    /// One DNS slot, zero based.
    Dns(usize),
    /// The DNS list as a whole.
    DnsServers,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::IpAddress => write!(f, "IP Address"),
            Field::Subnet => write!(f, "Subnet Mask"),
            Field::Gateway => write!(f, "Gateway"),
            Field::Dns(index) => write!(f, "DNS Server {}", index + 1),
            Field::DnsServers => write!(f, "DNS Servers"),
        }
    }
}

/// Whether a finding stops a summary from being generated.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Blocking,
    Advisory,
}

/// One outcome of a validation pass.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Finding {
    FieldRequired { field: Field },
    InvalidFormat { field: Field },
    PublicAddressWarning,
    /// `field` is the address or gateway equal to the subnet's network address.
    NetworkAddressConflict { field: Field },
    BroadcastAddressConflict { field: Field },
    VersionMismatch { address: IpVersion, gateway: IpVersion },
    SubnetMismatchWarning,
    NoDnsWarning,
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::FieldRequired { .. }
            | Finding::InvalidFormat { .. }
            | Finding::NetworkAddressConflict { .. }
            | Finding::BroadcastAddressConflict { .. }
            | Finding::VersionMismatch { .. } => Severity::Blocking,
            Finding::PublicAddressWarning
            | Finding::SubnetMismatchWarning
            | Finding::NoDnsWarning => Severity::Advisory,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity() == Severity::Blocking
    }

    /// The field the finding is shown under.
    pub fn field(&self) -> Field {
        match self {
            Finding::FieldRequired { field }
            | Finding::InvalidFormat { field }
            | Finding::NetworkAddressConflict { field }
            | Finding::BroadcastAddressConflict { field } => *field,
            Finding::PublicAddressWarning => Field::IpAddress,
            Finding::VersionMismatch { .. } | Finding::SubnetMismatchWarning => Field::Gateway,
            Finding::NoDnsWarning => Field::DnsServers,
        }
    }

    /// Every field involved in the finding, the display field first.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Finding::NetworkAddressConflict { field }
            | Finding::BroadcastAddressConflict { field } => vec![*field, Field::Subnet],
            Finding::VersionMismatch { .. } => vec![Field::Gateway, Field::IpAddress],
            Finding::SubnetMismatchWarning => {
                vec![Field::Gateway, Field::IpAddress, Field::Subnet]
            }
            other => vec![other.field()],
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Finding::FieldRequired { field } => write!(f, "{field} is required."),
            Finding::InvalidFormat {
                field: Field::Subnet,
            } => write!(f, "Invalid Subnet Mask format."),
            Finding::InvalidFormat {
                field: Field::Gateway,
            } => write!(f, "Invalid Gateway IP Address format."),
            Finding::InvalidFormat {
                field: dns @ Field::Dns(_),
            } => write!(f, "{dns} has an invalid IP Address format."),
            Finding::InvalidFormat { field } => write!(f, "Invalid {field} format."),
            Finding::PublicAddressWarning => write!(
                f,
                "Warning: You are using a public IP address. This is likely incorrect."
            ),
            Finding::NetworkAddressConflict {
                field: Field::IpAddress,
            } => write!(f, "IP address cannot be the network address."),
            Finding::NetworkAddressConflict { field } => {
                write!(f, "{field} cannot be the network address.")
            }
            Finding::BroadcastAddressConflict {
                field: Field::IpAddress,
            } => write!(f, "IP address cannot be the broadcast address."),
            Finding::BroadcastAddressConflict { field } => {
                write!(f, "{field} cannot be the broadcast address.")
            }
            Finding::VersionMismatch { address, gateway } => write!(
                f,
                "Gateway must be the same IP version as the IP Address ({gateway} vs {address})."
            ),
            Finding::SubnetMismatchWarning => {
                write!(f, "Warning: Gateway appears to be on a different subnet.")
            }
            Finding::NoDnsWarning => write!(
                f,
                "Warning: No DNS server specified. A public DNS server (e.g., 8.8.8.8) will be used."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert!(Finding::FieldRequired {
            field: Field::Gateway
        }
        .is_blocking());
        assert!(Finding::NetworkAddressConflict {
            field: Field::Gateway
        }
        .is_blocking());
        assert!(Finding::VersionMismatch {
            address: IpVersion::V6,
            gateway: IpVersion::V4
        }
        .is_blocking());
        assert!(!Finding::PublicAddressWarning.is_blocking());
        assert!(!Finding::SubnetMismatchWarning.is_blocking());
        assert!(!Finding::NoDnsWarning.is_blocking());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Finding::FieldRequired {
                field: Field::IpAddress
            }
            .to_string(),
            "IP Address is required."
        );
        assert_eq!(
            Finding::InvalidFormat {
                field: Field::IpAddress
            }
            .to_string(),
            "Invalid IP Address format."
        );
        assert_eq!(
            Finding::InvalidFormat {
                field: Field::Dns(1)
            }
            .to_string(),
            "DNS Server 2 has an invalid IP Address format."
        );
        assert_eq!(
            Finding::VersionMismatch {
                address: IpVersion::V6,
                gateway: IpVersion::V4
            }
            .to_string(),
            "Gateway must be the same IP version as the IP Address (ipv4 vs ipv6)."
        );
        assert_eq!(
            Finding::NetworkAddressConflict {
                field: Field::IpAddress
            }
            .to_string(),
            "IP address cannot be the network address."
        );
        assert_eq!(
            Finding::BroadcastAddressConflict {
                field: Field::Gateway
            }
            .to_string(),
            "Gateway cannot be the broadcast address."
        );
    }

    #[test]
    fn test_fields() {
        assert_eq!(Finding::NoDnsWarning.field(), Field::DnsServers);
        assert_eq!(
            Finding::SubnetMismatchWarning.fields(),
            vec![Field::Gateway, Field::IpAddress, Field::Subnet]
        );
        assert_eq!(
            Finding::InvalidFormat {
                field: Field::Dns(2)
            }
            .fields(),
            vec![Field::Dns(2)]
        );
        let conflict = Finding::BroadcastAddressConflict {
            field: Field::Gateway,
        };
        assert_eq!(conflict.field(), Field::Gateway);
        assert_eq!(conflict.fields(), vec![Field::Gateway, Field::Subnet]);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Finding::InvalidFormat {
            field: Field::Dns(0),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"kind":"InvalidFormat","field":{"field":"dns","index":0}}"#
        );
    }
}
